//! Per-tab session storage for in-progress shopper selections.

pub mod store;

pub use store::{SessionSelections, SessionStore};
