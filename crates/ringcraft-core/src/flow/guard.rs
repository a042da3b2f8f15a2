//! The redirect gate.
//!
//! A two-state gate (configuration incomplete / complete) layered under the
//! five page roles. `decide` is a pure function of its inputs: it mutates
//! nothing and is safe to re-evaluate any number of times.

use ringcraft_types::config::RedirectTargets;
use ringcraft_types::page::{PageRole, RedirectDecision};
use ringcraft_types::selection::Selections;

/// Decide whether this page may be shown or must redirect.
///
/// Evaluated in order, first match wins:
/// 1. Both halves chosen anywhere but the complete page: the only valid
///    destination is the complete page.
/// 2. The complete page without a base item: back to the base-item list.
/// 3. The complete page without a variant: to the variant list.
/// 4. Otherwise: show the page.
///
/// An unconfigured redirect target must never produce a navigation to an
/// undefined location: the gate warns and shows the page instead.
pub fn decide(
    page_role: PageRole,
    selections: &Selections,
    targets: &RedirectTargets,
) -> RedirectDecision {
    if page_role != PageRole::CompletePage && selections.is_complete() {
        return redirect_or_warn(targets.complete_page.as_deref(), "complete-page");
    }

    if page_role == PageRole::CompletePage {
        if selections.base_item_id.is_none() {
            return redirect_or_warn(targets.base_item_list.as_deref(), "base-item-list");
        }
        if selections.variant_id.is_none() {
            return redirect_or_warn(targets.variant_list.as_deref(), "variant-list");
        }
    }

    RedirectDecision::Proceed
}

fn redirect_or_warn(target: Option<&str>, feature: &str) -> RedirectDecision {
    match target {
        Some(path) => RedirectDecision::redirect_to(path),
        None => {
            tracing::warn!(feature, "redirect target not configured, showing page instead");
            RedirectDecision::Proceed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets() -> RedirectTargets {
        RedirectTargets {
            complete_page: Some("/pages/complete-your-ring".to_string()),
            base_item_list: Some("/collections/engagement-rings".to_string()),
            variant_list: Some("/pages/start-with-a-diamond".to_string()),
        }
    }

    fn complete_pair() -> Selections {
        Selections {
            base_item_id: Some("R1".to_string()),
            variant_id: Some("D9".to_string()),
            size: None,
        }
    }

    #[test]
    fn test_completion_gate_from_every_non_complete_role() {
        for role in [
            PageRole::BaseItemList,
            PageRole::BaseItemDetail,
            PageRole::VariantList,
            PageRole::VariantDetail,
        ] {
            let decision = decide(role, &complete_pair(), &targets());
            assert_eq!(
                decision,
                RedirectDecision::redirect_to("/pages/complete-your-ring"),
                "role {role}"
            );
        }
    }

    #[test]
    fn test_complete_page_with_pair_proceeds() {
        let decision = decide(PageRole::CompletePage, &complete_pair(), &targets());
        assert_eq!(decision, RedirectDecision::Proceed);
    }

    #[test]
    fn test_reverse_gate_missing_base_item() {
        // Base item missing wins over variant, regardless of the variant.
        for variant in [None, Some("D9".to_string())] {
            let selections = Selections {
                base_item_id: None,
                variant_id: variant,
                size: None,
            };
            let decision = decide(PageRole::CompletePage, &selections, &targets());
            assert_eq!(
                decision,
                RedirectDecision::redirect_to("/collections/engagement-rings")
            );
        }
    }

    #[test]
    fn test_reverse_gate_missing_variant() {
        let selections = Selections {
            base_item_id: Some("R1".to_string()),
            variant_id: None,
            size: None,
        };
        let decision = decide(PageRole::CompletePage, &selections, &targets());
        assert_eq!(
            decision,
            RedirectDecision::redirect_to("/pages/start-with-a-diamond")
        );
    }

    #[test]
    fn test_incomplete_selections_proceed() {
        let decision = decide(PageRole::BaseItemList, &Selections::default(), &targets());
        assert_eq!(decision, RedirectDecision::Proceed);

        let one_half = Selections {
            base_item_id: Some("R1".to_string()),
            ..Default::default()
        };
        let decision = decide(PageRole::BaseItemDetail, &one_half, &targets());
        assert_eq!(decision, RedirectDecision::Proceed);
    }

    #[test]
    fn test_missing_target_degrades_to_proceed() {
        let decision = decide(
            PageRole::VariantDetail,
            &complete_pair(),
            &RedirectTargets::default(),
        );
        assert_eq!(decision, RedirectDecision::Proceed);

        let decision = decide(
            PageRole::CompletePage,
            &Selections::default(),
            &RedirectTargets::default(),
        );
        assert_eq!(decision, RedirectDecision::Proceed);
    }

    #[test]
    fn test_decide_is_idempotent() {
        let selections = complete_pair();
        let targets = targets();
        let first = decide(PageRole::VariantDetail, &selections, &targets);
        let second = decide(PageRole::VariantDetail, &selections, &targets);
        assert_eq!(first, second);
    }
}
