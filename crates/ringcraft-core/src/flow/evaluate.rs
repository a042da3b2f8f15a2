//! Page-view evaluation pipeline.
//!
//! Everything here is synchronous: the redirect decision must exist before
//! any step UI is painted, so resolution, the guard, and step ordering all
//! complete before the (async) builder-data fetch is even started.

use serde::Serialize;

use ringcraft_types::config::RedirectTargets;
use ringcraft_types::page::{PageRole, RedirectDecision, StepOrder};
use ringcraft_types::selection::Selections;

use crate::flow::resolver::{self, PageQuery};
use crate::flow::{guard, order};
use crate::session::SessionStore;

/// Outcome of evaluating one page view.
#[derive(Debug, Clone, Serialize)]
pub struct PageEvaluation {
    /// The effective selections after cleanup and query merging. The
    /// session store already reflects these (minus the query-carried
    /// variant, which is only persisted once the shopper confirms it).
    pub selections: Selections,
    /// Show the page, or navigate away.
    pub decision: RedirectDecision,
    /// Present only when the page is shown; a redirected page renders
    /// nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_order: Option<StepOrder>,
}

/// Run resolver -> guard -> step order for one page view.
pub fn evaluate_page_view<S>(
    page_role: PageRole,
    store: &S,
    query: &PageQuery,
    targets: &RedirectTargets,
) -> PageEvaluation
where
    S: SessionStore + ?Sized,
{
    let selections = resolver::resolve(page_role, store, query);
    let decision = guard::decide(page_role, &selections, targets);

    let step_order = match &decision {
        RedirectDecision::Proceed => Some(order::order(page_role, &selections)),
        RedirectDecision::RedirectTo { target } => {
            tracing::debug!(%page_role, target, "page view redirected");
            None
        }
    };

    PageEvaluation {
        selections,
        decision,
        step_order,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionSelections;
    use crate::session::store::tests::HashMapSessionStore;
    use ringcraft_types::page::StepKind;

    fn targets() -> RedirectTargets {
        RedirectTargets {
            complete_page: Some("/pages/complete-your-ring".to_string()),
            base_item_list: Some("/collections/engagement-rings".to_string()),
            variant_list: Some("/pages/start-with-a-diamond".to_string()),
        }
    }

    #[test]
    fn test_scenario_base_item_detail_mid_flow() {
        // Base item chosen, no variant, arriving on its detail page.
        let store = HashMapSessionStore::default();
        store.select_base_item("R1");

        let result =
            evaluate_page_view(PageRole::BaseItemDetail, &store, &PageQuery::default(), &targets());

        assert_eq!(result.decision, RedirectDecision::Proceed);
        let step_order = result.step_order.expect("proceed carries a step order");
        assert_eq!(
            step_order.steps(),
            &[StepKind::BaseItem, StepKind::Variant, StepKind::Complete]
        );
    }

    #[test]
    fn test_scenario_finished_pair_on_variant_detail() {
        let store = HashMapSessionStore::default();
        store.select_base_item("R1");
        store.select_variant("D9");

        let result =
            evaluate_page_view(PageRole::VariantDetail, &store, &PageQuery::default(), &targets());

        assert_eq!(
            result.decision,
            RedirectDecision::redirect_to("/pages/complete-your-ring")
        );
        assert!(result.step_order.is_none());
    }

    #[test]
    fn test_scenario_empty_session_on_complete_page() {
        let store = HashMapSessionStore::default();

        let result =
            evaluate_page_view(PageRole::CompletePage, &store, &PageQuery::default(), &targets());

        assert_eq!(
            result.decision,
            RedirectDecision::redirect_to("/collections/engagement-rings")
        );
    }

    #[test]
    fn test_scenario_query_overrides_stored_variant() {
        let store = HashMapSessionStore::default();
        store.select_variant("D9");
        let query = PageQuery {
            variant_id: Some("D5".to_string()),
        };

        let result = evaluate_page_view(PageRole::VariantDetail, &store, &query, &targets());

        assert_eq!(result.selections.variant_id, Some("D5".to_string()));
        assert_eq!(result.decision, RedirectDecision::Proceed);
        let step_order = result.step_order.expect("proceed carries a step order");
        assert_eq!(step_order.leading(), StepKind::Variant);
    }

    #[test]
    fn test_fresh_shopper_on_base_item_list() {
        let store = HashMapSessionStore::default();

        let result =
            evaluate_page_view(PageRole::BaseItemList, &store, &PageQuery::default(), &targets());

        assert_eq!(result.decision, RedirectDecision::Proceed);
        assert_eq!(
            result.step_order.unwrap().leading(),
            StepKind::BaseItem
        );
    }
}
