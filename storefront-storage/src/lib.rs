//! Storefront Storage - Session Key/Value Backends
//!
//! Defines the `SessionStorage` abstraction the cart persists through, with
//! two implementations:
//! - `MemorySessionStorage`: per-process map, cleared when dropped
//! - `FileSessionStorage`: a JSON object on disk, re-read on every access so
//!   separate stores over the same file observe each other's writes

mod file;
mod memory;

pub use file::FileSessionStorage;
pub use memory::MemorySessionStorage;

use std::sync::Arc;
use storefront_core::StorefrontResult;

/// String key/value storage scoped to one browsing session.
///
/// Mirrors the browser `sessionStorage` surface. Values are opaque strings;
/// callers own serialization.
pub trait SessionStorage: Send + Sync {
    /// Get the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> StorefrontResult<Option<String>>;

    /// Overwrite the value stored under `key`.
    fn set_item(&self, key: &str, value: &str) -> StorefrontResult<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> StorefrontResult<()>;

    /// Drop every key. This is the only way the cart is ever emptied wholesale.
    fn clear(&self) -> StorefrontResult<()>;

    /// Stored keys in sorted order.
    fn keys(&self) -> StorefrontResult<Vec<String>>;
}

impl<S: SessionStorage + ?Sized> SessionStorage for Arc<S> {
    fn get_item(&self, key: &str) -> StorefrontResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorefrontResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StorefrontResult<()> {
        (**self).remove_item(key)
    }

    fn clear(&self) -> StorefrontResult<()> {
        (**self).clear()
    }

    fn keys(&self) -> StorefrontResult<Vec<String>> {
        (**self).keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_storage_shares_state() {
        let storage = Arc::new(MemorySessionStorage::new());
        let other = Arc::clone(&storage);
        storage.set_item("cartCount", "3").unwrap();
        assert_eq!(other.get_item("cartCount").unwrap().as_deref(), Some("3"));
    }

    #[test]
    fn test_dyn_storage_behind_arc() {
        let storage: Arc<dyn SessionStorage> = Arc::new(MemorySessionStorage::new());
        storage.set_item("k", "v").unwrap();
        assert_eq!(storage.keys().unwrap(), vec!["k".to_string()]);
    }
}
