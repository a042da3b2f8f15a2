//! Shopper selections and the session keys they are stored under.

use serde::{Deserialize, Serialize};

/// Session storage keys for in-progress selections.
///
/// These are the wire-level key names the hosting pages read and write;
/// absence of a key means "unset".
pub mod keys {
    /// The chosen base product (a ring).
    pub const BASE_ITEM_ID: &str = "baseItemId";
    /// The chosen complementary item (a gem).
    pub const VARIANT_ID: &str = "variantId";
    /// The chosen sizing attribute. Only meaningful with a base item.
    pub const SIZE: &str = "size";
}

/// Query parameter a hosting page may carry to seed the variant selection.
pub const VARIANT_ID_PARAM: &str = "variant_id";

/// The shopper's effective selections for one page-view evaluation.
///
/// Immutable per evaluation: the controller derives a fresh value on every
/// page view and never holds one across views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selections {
    /// The chosen base product, if any.
    pub base_item_id: Option<String>,
    /// The chosen complementary item, if any.
    pub variant_id: Option<String>,
    /// The chosen size, if any. Never meaningful without `base_item_id`.
    pub size: Option<String>,
}

impl Selections {
    /// Both halves of the configuration are chosen.
    pub fn is_complete(&self) -> bool {
        self.base_item_id.is_some() && self.variant_id.is_some()
    }

    /// Drop a size that has no base item to belong to.
    ///
    /// A stray size can be left behind by out-of-band storage edits; it is
    /// normalized away silently rather than surfaced as an error.
    pub fn normalized(mut self) -> Self {
        if self.base_item_id.is_none() {
            self.size = None;
        }
        self
    }
}
