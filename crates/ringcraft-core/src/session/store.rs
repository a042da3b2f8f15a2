//! Session store trait and typed selection accessors.
//!
//! The raw `SessionStore` trait mirrors browser sessionStorage: string
//! keys, string values, absence means "unset", no error conditions. The
//! `SessionSelections` extension trait layers the selection semantics on
//! top so callers never touch raw keys.
//!
//! Reads and writes are synchronous: the storage survives page navigation
//! within a tab but has a single logical writer, so there is nothing to
//! await and nothing to lock around at this level.

use ringcraft_types::selection::{Selections, keys};

/// Raw key-value accessor over ephemeral per-session storage.
///
/// Implementations live in ringcraft-infra.
pub trait SessionStore: Send + Sync {
    /// Read a value. `None` if the key was never set or has been cleared.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value (upsert).
    fn set(&self, key: &str, value: &str);

    /// Remove a key. No-op if the key does not exist.
    fn clear(&self, key: &str);
}

/// Typed selection operations over any [`SessionStore`].
pub trait SessionSelections {
    /// The stored selections, with an orphaned size normalized away.
    fn selections(&self) -> Selections;

    /// Record the chosen base item. Any previously chosen size belonged to
    /// the previous base item, so it is removed in the same operation.
    fn select_base_item(&self, base_item_id: &str);

    /// Record the chosen variant.
    fn select_variant(&self, variant_id: &str);

    /// Record the chosen size.
    fn select_size(&self, size: &str);

    /// Remove the base item and its size together. The two are never
    /// cleared independently: a size without its base item is meaningless.
    fn clear_base_item_selection(&self);

    /// Remove the variant alone.
    fn clear_variant_selection(&self);
}

impl<S: SessionStore + ?Sized> SessionSelections for S {
    fn selections(&self) -> Selections {
        Selections {
            base_item_id: self.get(keys::BASE_ITEM_ID),
            variant_id: self.get(keys::VARIANT_ID),
            size: self.get(keys::SIZE),
        }
        .normalized()
    }

    fn select_base_item(&self, base_item_id: &str) {
        self.clear(keys::SIZE);
        self.set(keys::BASE_ITEM_ID, base_item_id);
    }

    fn select_variant(&self, variant_id: &str) {
        self.set(keys::VARIANT_ID, variant_id);
    }

    fn select_size(&self, size: &str) {
        self.set(keys::SIZE, size);
    }

    fn clear_base_item_selection(&self) {
        self.clear(keys::BASE_ITEM_ID);
        self.clear(keys::SIZE);
    }

    fn clear_variant_selection(&self) {
        self.clear(keys::VARIANT_ID);
    }
}
