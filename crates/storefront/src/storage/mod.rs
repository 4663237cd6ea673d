//! Visitor key-value storage.
//!
//! Everything a visitor does (cart, filters, simulated login) is kept in a
//! small string-to-string store shaped like the browser's `localStorage`.
//! [`LocalStore`] layers JSON encoding on top of any [`Storage`] and turns
//! every missing or unreadable record into the caller's default.
//!
//! The HTTP layer keeps one [`MemoryStorage`] per visitor inside their
//! session (see [`crate::middleware::visitor`]); the state managers in
//! [`crate::services`] only ever see a [`LocalStore`].

mod memory;

pub use memory::MemoryStorage;

use serde::{Serialize, de::DeserializeOwned};

/// Keys of the three persisted records.
pub mod keys {
    /// Ordered list of `{id, qty}` cart lines.
    pub const CART: &str = "cr_cart";

    /// `{brand, min, max}` catalog filter.
    pub const FILTERS: &str = "cr_filters";

    /// `{isLogged, userEmail}` simulated login.
    pub const SESSION: &str = "cr_session";
}

/// Raw string storage with the `localStorage` contract.
///
/// Implementations are synchronous and infallible from the caller's
/// point of view.
pub trait Storage {
    /// Returns the raw value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: String);

    /// Removes `key`. Removing a missing key is a no-op.
    fn remove_item(&mut self, key: &str);
}

/// JSON adapter over a [`Storage`].
///
/// Tracks whether anything was written so callers can skip persisting an
/// untouched snapshot.
#[derive(Debug, Clone, Default)]
pub struct LocalStore<S> {
    storage: S,
    dirty: bool,
}

impl<S: Storage> LocalStore<S> {
    /// Wrap a storage backend.
    #[must_use]
    pub const fn new(storage: S) -> Self {
        Self {
            storage,
            dirty: false,
        }
    }

    /// Read and decode the record under `key`.
    ///
    /// Returns `default` when the key is absent, empty, or does not decode
    /// as `T`. Never fails.
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let Some(raw) = self.storage.get_item(key) else {
            return default;
        };
        if raw.is_empty() {
            return default;
        }

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(key, error = %e, "Stored record unreadable, using default");
                default
            }
        }
    }

    /// Encode `value` and store it under `key`.
    pub fn write<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => {
                self.storage.set_item(key, raw);
                self.dirty = true;
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to encode record, keeping previous value");
            }
        }
    }

    /// Remove the record under `key`.
    pub fn remove(&mut self, key: &str) {
        self.storage.remove_item(key);
        self.dirty = true;
    }

    /// Whether any write happened since this store was created.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Borrow the underlying storage.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Mutably borrow the underlying storage, bypassing JSON encoding.
    pub const fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Unwrap the underlying storage.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.storage
    }
}
