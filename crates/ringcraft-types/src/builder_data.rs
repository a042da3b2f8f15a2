//! Builder-data payloads and the fetch lifecycle observed by the
//! presentation layer.

use serde::{Deserialize, Serialize};

/// Combined/priced summary for a base item + variant pairing.
///
/// The payload is opaque to the controller: the remote endpoint owns its
/// shape, the steps render it. Keyed by the pair of ids it was fetched for
/// so a consumer can tell which selections a payload belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_item_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,
    /// The remote endpoint's `result` payload, verbatim.
    pub payload: serde_json::Value,
}

/// Observable state of the builder-data fetch for one page view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FetchState {
    /// Fetch in flight (or not yet started).
    Loading,
    /// Fetch completed; payload ready to render.
    Ready { data: BuilderData },
    /// Fetch failed. Non-fatal: the page renders without priced data.
    Failed { reason: String },
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, FetchState::Ready { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchState::Failed { .. })
    }
}
