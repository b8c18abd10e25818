//! Business catalog reference data and filtering.
//!
//! The catalog is read-only: businesses and their menus come from platform
//! data the client never mutates. Filtering is a pure function so list views
//! can recompute on every keystroke.

use serde::{Deserialize, Serialize};

use localmart_core::{CategoryId, ItemId, Price};

use crate::cart::{BusinessRef, CartLineInput};

/// A platform category (restaurants, grocery, beauty, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// An orderable item or bookable service on a business's menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    pub price: Price,
    pub image: String,
}

/// A business listed on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub id: localmart_core::BusinessId,
    pub name: String,
    pub category: CategoryId,
    pub description: String,
    pub rating: f32,
    pub review_count: u32,
    /// Human-readable price band, e.g. "$15-30".
    pub price_range: String,
    /// Delivery estimate or booking hint, e.g. "30-45 min".
    pub delivery_time: String,
    pub address: String,
    pub image: String,
    pub is_open: bool,
    /// Service tags, e.g. "Delivery" or "Hair Cut".
    pub services: Vec<String>,
    /// Cuisine or trade label, where applicable.
    pub cuisine: Option<String>,
    pub featured: bool,
    pub items: Vec<MenuItem>,
}

impl Business {
    /// Build a cart input for one of this business's menu items, carrying
    /// the business reference along.
    #[must_use]
    pub fn cart_input(&self, item: &MenuItem) -> CartLineInput {
        CartLineInput {
            item_id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.price.amount,
            business: Some(BusinessRef::new(self.id.clone(), self.name.clone())),
        }
    }

    /// Case-insensitive substring match over name, description, cuisine,
    /// and service tags.
    fn matches_query(&self, needle: &str) -> bool {
        let contains = |haystack: &str| haystack.to_lowercase().contains(needle);

        contains(&self.name)
            || contains(&self.description)
            || self.cuisine.as_deref().is_some_and(contains)
            || self.services.iter().any(|service| contains(service))
    }
}

/// Filter a business list by category and free-text query.
///
/// - Category filters by exact identifier match; `None` disables the axis.
/// - The query matches case-insensitively against name, description,
///   cuisine, and any service tag; `None` or a blank string disables the
///   axis.
/// - Both axes compose with logical AND.
#[must_use]
pub fn filter_businesses<'a>(
    businesses: &'a [Business],
    category: Option<&CategoryId>,
    query: Option<&str>,
) -> Vec<&'a Business> {
    let needle = query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);

    businesses
        .iter()
        .filter(|business| category.is_none_or(|c| &business.category == c))
        .filter(|business| {
            needle
                .as_deref()
                .is_none_or(|needle| business.matches_query(needle))
        })
        .collect()
}

/// Businesses highlighted on the home view.
#[must_use]
pub fn featured(businesses: &[Business]) -> Vec<&Business> {
    businesses.iter().filter(|b| b.featured).collect()
}

/// The platform's built-in top-level categories.
#[must_use]
pub fn default_categories() -> Vec<Category> {
    [
        ("restaurants", "Restaurants"),
        ("grocery", "Grocery"),
        ("beauty", "Beauty & Spa"),
        ("fitness", "Fitness"),
        ("pharmacy", "Pharmacy"),
        ("automotive", "Auto Services"),
        ("electronics", "Electronics"),
        ("home-services", "Home Services"),
    ]
    .into_iter()
    .map(|(id, name)| Category {
        id: CategoryId::new(id),
        name: name.to_string(),
    })
    .collect()
}
