//! Shopping cart aggregation.
//!
//! The cart is an insertion-ordered collection of [`CartLine`]s with at most
//! one line per item identifier. Adding an item that is already present
//! increments its quantity; everything else is plain collection surgery.
//! Persistence is the state root's job - this module only owns the
//! collection invariant.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use localmart_core::{BusinessId, ItemId};

/// Snapshot of the business an item was ordered from.
///
/// Items can reach the cart without a business attached (e.g. from a search
/// result row); those lines carry the sentinel reference instead of inventing
/// per-field fallbacks at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessRef {
    pub id: BusinessId,
    pub name: String,
}

impl BusinessRef {
    /// Create a business reference.
    pub fn new(id: impl Into<BusinessId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Sentinel reference for items with no known business.
    #[must_use]
    pub fn unknown() -> Self {
        Self::new("unknown", "Unknown Business")
    }
}

/// An item being added to the cart.
#[derive(Debug, Clone)]
pub struct CartLineInput {
    pub item_id: ItemId,
    pub name: String,
    pub unit_price: Decimal,
    /// Owning business, if known at the call site.
    pub business: Option<BusinessRef>,
}

/// One aggregated entry in the shopping cart, keyed by item identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: ItemId,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub business: BusinessRef,
}

/// The shopping cart collection.
///
/// Invariant: at most one [`CartLine`] per item identifier, in insertion
/// order.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from a persisted snapshot.
    ///
    /// Duplicate item identifiers in the snapshot are merged by summing
    /// quantities, re-establishing the collection invariant.
    #[must_use]
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            if let Some(existing) = cart.line_mut(&line.item_id) {
                existing.quantity = existing.quantity.saturating_add(line.quantity);
            } else {
                cart.lines.push(line);
            }
        }
        cart
    }

    /// Add an item: increment its quantity if a line exists, otherwise
    /// insert a new line with quantity 1.
    ///
    /// A missing business reference defaults to the
    /// [`BusinessRef::unknown`] sentinel.
    pub fn add(&mut self, input: CartLineInput) {
        if let Some(line) = self.line_mut(&input.item_id) {
            line.quantity = line.quantity.saturating_add(1);
            return;
        }

        self.lines.push(CartLine {
            item_id: input.item_id,
            name: input.name,
            unit_price: input.unit_price,
            quantity: 1,
            business: input.business.unwrap_or_else(BusinessRef::unknown),
        });
    }

    /// Replace the quantity of the matching line verbatim.
    ///
    /// This deliberately does not treat zero as removal: callers that want a
    /// line gone must call [`Cart::remove`], keeping deletes explicit instead
    /// of a side effect of a generic setter. Returns `false` if no line
    /// matches.
    pub fn set_quantity(&mut self, item_id: &ItemId, quantity: u32) -> bool {
        match self.line_mut(item_id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Delete the matching line. No-op if absent.
    pub fn remove(&mut self, item_id: &ItemId) {
        self.lines.retain(|line| &line.item_id != item_id);
    }

    /// Empty the collection unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// All cart lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Look up a line by item identifier.
    #[must_use]
    pub fn line(&self, item_id: &ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.item_id == item_id)
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines
            .iter()
            .fold(0, |sum, line| sum.saturating_add(line.quantity))
    }

    fn line_mut(&mut self, item_id: &ItemId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| &line.item_id == item_id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn pizza() -> CartLineInput {
        CartLineInput {
            item_id: ItemId::new("101"),
            name: "Margherita Pizza".to_string(),
            unit_price: Decimal::new(1899, 2),
            business: Some(BusinessRef::new("1", "Mario's Italian Kitchen")),
        }
    }

    fn tiramisu() -> CartLineInput {
        CartLineInput {
            item_id: ItemId::new("103"),
            name: "Tiramisu".to_string(),
            unit_price: Decimal::new(899, 2),
            business: Some(BusinessRef::new("1", "Mario's Italian Kitchen")),
        }
    }

    #[test]
    fn test_repeated_add_increments_single_line() {
        let mut cart = Cart::new();
        for _ in 0..4 {
            cart.add(pizza());
        }

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.line(&ItemId::new("101")).unwrap().quantity, 4);
    }

    #[test]
    fn test_remove_then_add_starts_fresh() {
        let mut cart = Cart::new();
        cart.add(pizza());
        cart.add(pizza());
        cart.remove(&ItemId::new("101"));
        cart.add(pizza());

        assert_eq!(cart.line(&ItemId::new("101")).unwrap().quantity, 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(pizza());
        cart.remove(&ItemId::new("999"));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_missing_business_defaults_to_sentinel() {
        let mut cart = Cart::new();
        cart.add(CartLineInput {
            business: None,
            ..pizza()
        });

        let line = cart.line(&ItemId::new("101")).unwrap();
        assert_eq!(line.business.id.as_str(), "unknown");
        assert_eq!(line.business.name, "Unknown Business");
    }

    #[test]
    fn test_set_quantity_stores_verbatim() {
        let mut cart = Cart::new();
        cart.add(pizza());

        assert!(cart.set_quantity(&ItemId::new("101"), 7));
        assert_eq!(cart.line(&ItemId::new("101")).unwrap().quantity, 7);

        // Zero is stored, not turned into a removal.
        assert!(cart.set_quantity(&ItemId::new("101"), 0));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.line(&ItemId::new("101")).unwrap().quantity, 0);

        assert!(!cart.set_quantity(&ItemId::new("999"), 3));
    }

    #[test]
    fn test_clear_empties_collection() {
        let mut cart = Cart::new();
        cart.add(pizza());
        cart.add(tiramisu());
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add(pizza());
        cart.add(tiramisu());
        cart.add(pizza());

        let ids: Vec<_> = cart.lines().iter().map(|l| l.item_id.as_str()).collect();
        assert_eq!(ids, vec!["101", "103"]);
    }

    #[test]
    fn test_total_quantity_sums_lines() {
        let mut cart = Cart::new();
        cart.add(pizza());
        cart.add(pizza());
        cart.add(tiramisu());
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_from_lines_merges_duplicates() {
        let line = |qty| CartLine {
            item_id: ItemId::new("101"),
            name: "Margherita Pizza".to_string(),
            unit_price: Decimal::new(1899, 2),
            quantity: qty,
            business: BusinessRef::unknown(),
        };

        let cart = Cart::from_lines(vec![line(2), line(3)]);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.line(&ItemId::new("101")).unwrap().quantity, 5);
    }
}
