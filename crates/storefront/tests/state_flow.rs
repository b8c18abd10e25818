//! End-to-end tests for the storefront state core.
//!
//! These drive the state root the way a view layer would: restore from
//! storage, browse the catalog, mutate the cart and wishlist, price the
//! order, and log out. The storage port is a shared in-memory adapter so a
//! "reload" is simulated by building a fresh state over the same store. No
//! test talks to a real network; the API endpoint points at a closed port.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use rust_decimal::Decimal;

use localmart_core::{CategoryId, ItemId, Price};
use localmart_storefront::catalog::{Business, MenuItem};
use localmart_storefront::config::{AccountApiConfig, StorefrontConfig};
use localmart_storefront::error::AppError;
use localmart_storefront::models::session::SessionSnapshot;
use localmart_storefront::models::user::Account;
use localmart_storefront::services::auth::{AuthError, RegisterProfile};
use localmart_storefront::state::StorefrontState;
use localmart_storefront::storage::StorageAdapter;

/// In-memory storage whose contents survive the state that owns it, so a
/// second state can be built over the same data like a page reload.
#[derive(Clone, Default)]
struct SharedStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl SharedStorage {
    fn new() -> Self {
        Self::default()
    }

    fn raw(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn insert(&self, key: &str, value: String) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value);
    }
}

impl StorageAdapter for SharedStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.raw(key)
    }

    fn set(&mut self, key: &str, value: String) {
        self.insert(key, value);
    }

    fn remove(&mut self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "localmart_storefront=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

fn config() -> StorefrontConfig {
    StorefrontConfig {
        api: AccountApiConfig {
            // Closed port: remote calls fail fast without a network.
            endpoint: "http://127.0.0.1:9/graphql".to_string(),
            timeout: Duration::from_millis(200),
        },
        pricing: localmart_storefront::pricing::PricingConfig::default(),
        storage_prefix: "localmart".to_string(),
    }
}

fn catalog() -> Vec<Business> {
    vec![
        Business {
            id: "1".into(),
            name: "Mario's Italian Kitchen".to_string(),
            category: CategoryId::new("restaurants"),
            description: "Authentic Italian cuisine with fresh ingredients".to_string(),
            rating: 4.5,
            review_count: 324,
            price_range: "$15-30".to_string(),
            delivery_time: "30-45 min".to_string(),
            address: "123 Main St, Downtown".to_string(),
            image: String::new(),
            is_open: true,
            services: vec![
                "Dine-in".to_string(),
                "Takeout".to_string(),
                "Delivery".to_string(),
            ],
            cuisine: Some("Italian".to_string()),
            featured: true,
            items: vec![
                MenuItem {
                    id: ItemId::new("101"),
                    name: "Margherita Pizza".to_string(),
                    price: Price::usd(Decimal::new(1899, 2)),
                    image: String::new(),
                },
                MenuItem {
                    id: ItemId::new("103"),
                    name: "Tiramisu".to_string(),
                    price: Price::usd(Decimal::new(899, 2)),
                    image: String::new(),
                },
            ],
        },
        Business {
            id: "4".into(),
            name: "Fresh Market Express".to_string(),
            category: CategoryId::new("grocery"),
            description: "Fresh groceries delivered to your door".to_string(),
            rating: 4.2,
            review_count: 456,
            price_range: "$5-50".to_string(),
            delivery_time: "15-30 min".to_string(),
            address: "321 Market Street, Downtown".to_string(),
            image: String::new(),
            is_open: true,
            services: vec!["Fresh Produce".to_string(), "Bakery".to_string()],
            cuisine: None,
            featured: false,
            items: vec![],
        },
    ]
}

fn session_json() -> String {
    let account: Account = serde_json::from_value(serde_json::json!({
        "id": "acct-1",
        "email": "maria@example.com",
        "full_name": "Maria Lopez",
        "phone": null,
        "user_type": "CUSTOMER",
        "customer_category": "general",
        "admin_role": null,
        "seller_type": null,
        "is_active": true,
        "business_name": null,
        "business_address": null,
        "business_description": null,
        "created_at": "2025-11-02T09:15:00Z"
    }))
    .expect("account fixture");

    serde_json::to_string(&SessionSnapshot {
        account,
        token: "jwt-abc".to_string(),
    })
    .expect("session fixture")
}

fn authenticated_state(storage: &SharedStorage) -> StorefrontState {
    storage.insert("localmart_session", session_json());
    let state = StorefrontState::new(config(), Box::new(storage.clone()), catalog());
    state.load();
    state
}

#[test]
fn shopping_flow_survives_reload() {
    init_tracing();
    let storage = SharedStorage::new();
    let state = authenticated_state(&storage);
    assert!(state.is_authenticated());

    // Browse: category + query filtering composes.
    let hits = state.filter_catalog(Some(&CategoryId::new("restaurants")), Some("PIZZA"));
    assert_eq!(hits.len(), 1);
    let mario = hits.first().copied().cloned().expect("restaurant hit");

    // Order two pizzas and one tiramisu.
    let pizza = mario.items.first().cloned().expect("pizza");
    let tiramisu = mario.items.get(1).cloned().expect("tiramisu");
    state.add_to_cart(mario.cart_input(&pizza)).expect("add");
    state.add_to_cart(mario.cart_input(&pizza)).expect("add");
    state.add_to_cart(mario.cart_input(&tiramisu)).expect("add");

    // Reference pricing scenario: 2 x 18.99 + 8.99 = 46.97, free delivery,
    // 8% tax, display total 50.73.
    let quote = state.pricing();
    assert_eq!(quote.subtotal, Decimal::new(4697, 2));
    assert_eq!(quote.delivery_fee, Decimal::ZERO);
    assert_eq!(quote.tax, Decimal::new(37_576, 4));
    assert_eq!(quote.display_total(), Decimal::new(5073, 2));

    // Wishlist the restaurant.
    state.toggle_wishlist(&mario).expect("toggle");

    // Reload: a fresh state over the same storage sees everything.
    let reloaded = StorefrontState::new(config(), Box::new(storage.clone()), catalog());
    reloaded.load();

    assert!(reloaded.is_authenticated());
    let lines = reloaded.cart_lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines.first().expect("line").quantity, 2);
    assert_eq!(
        lines.first().expect("line").business.name,
        "Mario's Italian Kitchen"
    );
    assert!(reloaded.wishlist_contains(&"1".into()));
    assert_eq!(reloaded.pricing().display_total(), Decimal::new(5073, 2));
}

#[tokio::test]
async fn logout_clears_state_and_storage_despite_dead_endpoint() {
    init_tracing();
    let storage = SharedStorage::new();
    let state = authenticated_state(&storage);

    let mario = state.catalog().first().cloned().expect("business");
    let pizza = mario.items.first().cloned().expect("pizza");
    state.add_to_cart(mario.cart_input(&pizza)).expect("add");
    state.toggle_wishlist(&mario).expect("toggle");

    state.logout().await;

    assert!(!state.is_authenticated());
    assert!(state.cart_lines().is_empty());
    assert!(state.wishlist_entries().is_empty());

    // Simulated reload after logout yields the all-default state.
    let reloaded = StorefrontState::new(config(), Box::new(storage.clone()), catalog());
    reloaded.load();
    assert!(!reloaded.is_authenticated());
    assert!(reloaded.cart_lines().is_empty());
    assert!(reloaded.wishlist_entries().is_empty());
    assert!(storage.raw("localmart_session").is_none());
}

#[tokio::test]
async fn register_validation_fires_before_network() {
    init_tracing();
    let storage = SharedStorage::new();
    let state = StorefrontState::new(config(), Box::new(storage.clone()), catalog());

    let mut profile = RegisterProfile {
        full_name: "New User".to_string(),
        email: "new@example.com".to_string(),
        phone: None,
        password: "longenough".to_string(),
        confirm_password: "different".to_string(),
        user_type: None,
        customer_category: None,
    };

    // Mismatch wins over everything else.
    let err = state.register(&profile).await.unwrap_err();
    assert!(matches!(err, AppError::Auth(AuthError::PasswordMismatch)));

    profile.password = "short".to_string();
    profile.confirm_password = "short".to_string();
    let err = state.register(&profile).await.unwrap_err();
    assert!(matches!(err, AppError::Auth(AuthError::WeakPassword(_))));

    // Valid input reaches the (dead) endpoint and fails as a transport
    // error, with the state untouched.
    profile.password = "longenough".to_string();
    profile.confirm_password = "longenough".to_string();
    let err = state.register(&profile).await.unwrap_err();
    assert!(matches!(err, AppError::Auth(AuthError::Api(_))));
    assert!(!state.is_authenticated());
    assert!(storage.raw("localmart_session").is_none());
}

#[tokio::test]
async fn failed_login_leaves_state_untouched() {
    init_tracing();
    let storage = SharedStorage::new();
    let state = StorefrontState::new(config(), Box::new(storage.clone()), catalog());

    // Email validation fails before the network.
    let err = state.login("not-an-email", "whatever-long").await.unwrap_err();
    assert!(matches!(err, AppError::Auth(AuthError::InvalidEmail(_))));

    // A well-formed attempt dies on transport against the closed port.
    let err = state
        .login("maria@example.com", "hunter2hunter2")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Auth(AuthError::Api(_))));

    assert!(!state.is_authenticated());
    assert!(state.cart_lines().is_empty());
}

#[test]
fn corrupted_storage_falls_back_to_defaults() {
    init_tracing();
    let storage = SharedStorage::new();
    storage.insert("localmart_session", "{broken".to_string());
    storage.insert("localmart_cart", "not even json".to_string());

    let state = StorefrontState::new(config(), Box::new(storage.clone()), catalog());
    state.load();

    assert!(!state.is_authenticated());
    assert!(state.cart_lines().is_empty());
    assert!(state.wishlist_entries().is_empty());
}
