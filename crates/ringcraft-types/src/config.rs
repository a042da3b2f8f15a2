//! Storefront configuration: the admin-managed mapping from configurator
//! features to store collections/pages.
//!
//! The admin screen writes the whole blob at once; the controller only ever
//! reads the five resolved values. Handles are store-native slugs -- the
//! base-item list is a collection, every other feature is a page, which is
//! why the derived paths differ in prefix.

use serde::{Deserialize, Serialize};

/// Settings key the configuration blob is stored under.
pub const CONFIG_KEY: &str = "ringbuilderconfig";

/// The five feature-to-handle mappings, in their wire spelling.
///
/// Every field is optional: a freshly installed store has nothing mapped,
/// and the flow must degrade gracefully until the admin fills these in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Collection listing the base items (rings).
    #[serde(rename = "base-item-list", skip_serializing_if = "Option::is_none")]
    pub base_item_list: Option<String>,
    /// Collection whose product pages host the base-item detail step.
    #[serde(rename = "base-item-detail", skip_serializing_if = "Option::is_none")]
    pub base_item_detail: Option<String>,
    /// Page listing the variants (gems).
    #[serde(rename = "variant-list", skip_serializing_if = "Option::is_none")]
    pub variant_list: Option<String>,
    /// Page hosting the variant detail step.
    #[serde(rename = "variant-detail", skip_serializing_if = "Option::is_none")]
    pub variant_detail: Option<String>,
    /// Page hosting the completed configuration.
    #[serde(rename = "complete-page", skip_serializing_if = "Option::is_none")]
    pub complete_page: Option<String>,
}

impl StorefrontConfig {
    /// Path of the completion page, if mapped.
    pub fn complete_page_path(&self) -> Option<String> {
        self.complete_page.as_deref().map(page_path)
    }

    /// Path of the base-item listing, if mapped.
    pub fn base_item_list_path(&self) -> Option<String> {
        self.base_item_list.as_deref().map(collection_path)
    }

    /// Path of the variant listing, if mapped.
    pub fn variant_list_path(&self) -> Option<String> {
        self.variant_list.as_deref().map(page_path)
    }

    /// The three redirect targets the flow guard needs.
    pub fn redirect_targets(&self) -> RedirectTargets {
        RedirectTargets {
            complete_page: self.complete_page_path(),
            base_item_list: self.base_item_list_path(),
            variant_list: self.variant_list_path(),
        }
    }
}

fn page_path(handle: &str) -> String {
    format!("/pages/{handle}")
}

fn collection_path(handle: &str) -> String {
    format!("/collections/{handle}")
}

/// Resolved redirect targets for one evaluation.
///
/// `None` means the feature is not configured; the guard must then show the
/// page rather than navigate to an undefined location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectTargets {
    pub complete_page: Option<String>,
    pub base_item_list: Option<String>,
    pub variant_list: Option<String>,
}
