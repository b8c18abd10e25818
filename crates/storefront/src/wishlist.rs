//! Saved-business wishlist.
//!
//! A set of business snapshots keyed by business identifier. Membership is
//! decided by identifier equality alone - the snapshot exists so the
//! wishlist view can render without a catalog lookup, not for comparison.

use serde::{Deserialize, Serialize};

use localmart_core::BusinessId;

use crate::catalog::Business;

/// Outcome of a [`Wishlist::toggle`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistToggle {
    /// The business was not present and has been added.
    Added,
    /// The business was present and has been removed.
    Removed,
}

/// A saved business snapshot, keyed by business identifier.
pub type WishlistEntry = Business;

/// The wishlist collection.
///
/// Invariant: at most one entry per business identifier, in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wishlist {
    entries: Vec<WishlistEntry>,
}

impl Wishlist {
    /// Create an empty wishlist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a wishlist from a persisted snapshot, dropping duplicate
    /// identifiers to re-establish the set invariant.
    #[must_use]
    pub fn from_entries(entries: Vec<WishlistEntry>) -> Self {
        let mut wishlist = Self::new();
        for entry in entries {
            if !wishlist.contains(&entry.id) {
                wishlist.entries.push(entry);
            }
        }
        wishlist
    }

    /// Toggle membership: remove the business if present, otherwise insert
    /// a snapshot of it.
    ///
    /// The same handler serves "add to wishlist" and "remove from wishlist";
    /// calling it twice with the same business leaves membership unchanged.
    pub fn toggle(&mut self, business: &Business) -> WishlistToggle {
        if self.contains(&business.id) {
            self.entries.retain(|entry| entry.id != business.id);
            WishlistToggle::Removed
        } else {
            self.entries.push(business.clone());
            WishlistToggle::Added
        }
    }

    /// Whether a business is on the wishlist.
    #[must_use]
    pub fn contains(&self, id: &BusinessId) -> bool {
        self.entries.iter().any(|entry| &entry.id == id)
    }

    /// All saved entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }

    /// Number of saved businesses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the wishlist is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empty the collection unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
