//! Persistent key-value storage port.
//!
//! The state root mirrors session, cart, and wishlist snapshots to a
//! string-keyed, string-valued store after every mutation. In the browser
//! that store is local storage; in tests and native hosts it is
//! [`MemoryStorage`]. There is no schema versioning: a stored value that no
//! longer decodes is treated as absent and the state falls back to empty
//! defaults.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use tracing::warn;

/// Storage keys for persisted state, composed with the configured prefix
/// (e.g. `localmart_cart`).
pub mod keys {
    /// Key suffix for the session snapshot.
    pub const SESSION: &str = "session";

    /// Key suffix for the cart snapshot.
    pub const CART: &str = "cart";

    /// Key suffix for the wishlist snapshot.
    pub const WISHLIST: &str = "wishlist";
}

/// Compose a storage key from the configured prefix and a key suffix.
#[must_use]
pub fn scoped_key(prefix: &str, suffix: &str) -> String {
    format!("{prefix}_{suffix}")
}

/// A string key-value store the state root persists through.
///
/// Implementations wrap whatever the host offers (browser local storage, a
/// file, plain memory). Reads are infallible by contract: a backend that
/// cannot produce a value reports absence, and decode problems are handled
/// one level up.
pub trait StorageAdapter {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String);

    /// Remove the value stored under `key`, if any.
    fn remove(&mut self, key: &str);
}

/// In-memory [`StorageAdapter`] for tests and native hosts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageAdapter for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Decode a stored JSON snapshot, treating malformed data as absent.
pub(crate) fn load_json<T: DeserializeOwned, S: StorageAdapter + ?Sized>(
    storage: &S,
    key: &str,
) -> Option<T> {
    let raw = storage.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "discarding undecodable stored value");
            None
        }
    }
}
