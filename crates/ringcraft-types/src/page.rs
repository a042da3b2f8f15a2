//! Page roles, step ordering, and redirect decisions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which stage of the wizard the current page represents.
///
/// Declared by the hosting page, never inferred by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageRole {
    BaseItemList,
    BaseItemDetail,
    VariantList,
    VariantDetail,
    CompletePage,
}

impl PageRole {
    /// Pages reached via the variant-first path (browsing or viewing gems
    /// before a ring has been chosen).
    pub fn is_variant_entry(self) -> bool {
        matches!(self, PageRole::VariantList | PageRole::VariantDetail)
    }
}

impl fmt::Display for PageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageRole::BaseItemList => write!(f, "base_item_list"),
            PageRole::BaseItemDetail => write!(f, "base_item_detail"),
            PageRole::VariantList => write!(f, "variant_list"),
            PageRole::VariantDetail => write!(f, "variant_detail"),
            PageRole::CompletePage => write!(f, "complete_page"),
        }
    }
}

impl FromStr for PageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "base_item_list" => Ok(PageRole::BaseItemList),
            "base_item_detail" => Ok(PageRole::BaseItemDetail),
            "variant_list" => Ok(PageRole::VariantList),
            "variant_detail" => Ok(PageRole::VariantDetail),
            "complete_page" => Ok(PageRole::CompletePage),
            other => Err(format!("invalid page role: '{other}'")),
        }
    }
}

/// One step of the builder strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    BaseItem,
    Variant,
    Complete,
}

/// Left-to-right presentation order of the builder steps.
///
/// The complete step is always last; only the two selectable steps swap.
/// Recomputed on every evaluation, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepOrder {
    steps: [StepKind; 3],
}

impl StepOrder {
    /// Base item first, then variant.
    pub fn base_item_first() -> Self {
        Self {
            steps: [StepKind::BaseItem, StepKind::Variant, StepKind::Complete],
        }
    }

    /// Variant first, then base item.
    pub fn variant_first() -> Self {
        Self {
            steps: [StepKind::Variant, StepKind::BaseItem, StepKind::Complete],
        }
    }

    /// The steps in presentation order.
    pub fn steps(&self) -> &[StepKind; 3] {
        &self.steps
    }

    /// Which selectable step leads.
    pub fn leading(&self) -> StepKind {
        self.steps[0]
    }
}

/// Outcome of the flow guard for one page view.
///
/// Produced fresh on every evaluation; never cached across page loads.
/// The hosting environment performs the actual navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RedirectDecision {
    /// Show the page as-is.
    Proceed,
    /// Navigate away before painting any step UI.
    RedirectTo { target: String },
}

impl RedirectDecision {
    pub fn redirect_to(target: impl Into<String>) -> Self {
        RedirectDecision::RedirectTo {
            target: target.into(),
        }
    }

    pub fn is_proceed(&self) -> bool {
        matches!(self, RedirectDecision::Proceed)
    }
}
