//! Step-order derivation.

use ringcraft_types::page::{PageRole, StepOrder};
use ringcraft_types::selection::Selections;

/// Left-to-right order of the builder steps for this page view.
///
/// The variant step leads when the shopper entered via the variant-first
/// path and has no base item yet, or once a variant is chosen. Otherwise
/// the base-item step leads. Purely presentational: this never feeds back
/// into the redirect decision and never touches the selections.
pub fn order(page_role: PageRole, selections: &Selections) -> StepOrder {
    let variant_first = (page_role.is_variant_entry() && selections.base_item_id.is_none())
        || selections.variant_id.is_some();

    if variant_first {
        StepOrder::variant_first()
    } else {
        StepOrder::base_item_first()
    }
}
