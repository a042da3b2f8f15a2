//! Effective-selection resolution.
//!
//! Runs as a strict two-phase pipeline: first the page-role-driven session
//! cleanup (writes), then a single read that merges the surviving stored
//! values with the incoming query parameters. The phases never interleave,
//! which keeps every downstream decision a pure function of the resolved
//! value.

use ringcraft_types::page::PageRole;
use ringcraft_types::selection::{Selections, VARIANT_ID_PARAM};

use crate::session::{SessionSelections, SessionStore};

/// Query parameters carried by the incoming page URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    /// A variant id arriving from outside the flow, e.g. a catalog link.
    pub variant_id: Option<String>,
}

impl PageQuery {
    /// Extract the recognized parameters from decoded key/value pairs.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut query = PageQuery::default();
        for (key, value) in pairs {
            if key == VARIANT_ID_PARAM && !value.is_empty() {
                query.variant_id = Some(value.to_string());
            }
        }
        query
    }
}

/// Derive the effective selections for this page view.
///
/// Cleanup first: entering the variant flow resets an in-progress base-item
/// flow, and leaving the variant flow abandons an in-progress variant
/// choice. A stored pair that is already complete is exempt -- a finished
/// configuration is never dismantled by navigation; the guard redirects it
/// to the complete page instead.
///
/// Then read: a query-carried `variant_id` is a fresh, authoritative choice
/// and takes precedence over the stored one; everything else comes from the
/// store.
pub fn resolve<S>(page_role: PageRole, store: &S, query: &PageQuery) -> Selections
where
    S: SessionStore + ?Sized,
{
    apply_cleanup(page_role, store);

    let stored = store.selections();
    Selections {
        base_item_id: stored.base_item_id,
        variant_id: query.variant_id.clone().or(stored.variant_id),
        size: stored.size,
    }
    .normalized()
}

fn apply_cleanup<S>(page_role: PageRole, store: &S)
where
    S: SessionStore + ?Sized,
{
    if store.selections().is_complete() {
        return;
    }

    match page_role {
        PageRole::VariantDetail => store.clear_base_item_selection(),
        PageRole::CompletePage => {}
        _ => store.clear_variant_selection(),
    }
}
