//! Application state shared across views.
//!
//! [`StorefrontState`] is the single root owning the session, cart, and
//! wishlist. Views hold a cheap clone and mutate only through the operations
//! here; no descendant touches the collections directly. Every mutation
//! immediately re-serializes the affected snapshot to the storage port, so a
//! reload restores exactly what the user last saw.
//!
//! # Concurrency
//!
//! Mutation happens under short-lived `Mutex` guards that are never held
//! across an await point. The only genuinely concurrent hazard is a user
//! firing overlapping login/register submissions; those are serialized with
//! explicit request tickets - a response only commits while it is still the
//! newest dispatched auth request, and stale responses resolve to
//! [`AuthError::Superseded`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use localmart_core::{CategoryId, ItemId};

use crate::api::AccountClient;
use crate::api::types::AccountUpdateInput;
use crate::cart::{Cart, CartLine, CartLineInput};
use crate::catalog::{self, Business};
use crate::config::StorefrontConfig;
use crate::error::{AppError, Result};
use crate::models::session::{AuthSession, SessionSnapshot};
use crate::models::user::Account;
use crate::pricing::{self, PricingConfig, PricingSnapshot};
use crate::services::auth::{AuthError, AuthService, RegisterProfile};
use crate::storage::{StorageAdapter, keys, load_json, scoped_key};
use crate::wishlist::{Wishlist, WishlistEntry, WishlistToggle};

/// Session holder plus the ticket that serializes auth requests.
#[derive(Default)]
struct SessionSlot {
    session: Option<AuthSession>,
    auth_seq: u64,
}

/// Application state shared across all views.
///
/// Cheaply cloneable via `Arc`; all clones observe the same state.
#[derive(Clone)]
pub struct StorefrontState {
    inner: Arc<StateInner>,
}

struct StateInner {
    pricing: PricingConfig,
    storage_prefix: String,
    auth: AuthService,
    catalog: Vec<Business>,
    session: Mutex<SessionSlot>,
    cart: Mutex<Cart>,
    wishlist: Mutex<Wishlist>,
    storage: Mutex<Box<dyn StorageAdapter + Send>>,
}

impl StorefrontState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `storage` - Persistence port (browser local storage, memory, ...)
    /// * `catalog` - Read-only business catalog
    #[must_use]
    pub fn new(
        config: StorefrontConfig,
        storage: Box<dyn StorageAdapter + Send>,
        catalog: Vec<Business>,
    ) -> Self {
        let client = AccountClient::new(&config.api);

        Self {
            inner: Arc::new(StateInner {
                pricing: config.pricing,
                storage_prefix: config.storage_prefix,
                auth: AuthService::new(client),
                catalog,
                session: Mutex::default(),
                cart: Mutex::default(),
                wishlist: Mutex::default(),
                storage: Mutex::new(storage),
            }),
        }
    }

    /// Restore session, cart, and wishlist from persistent storage.
    ///
    /// Called once at startup. A stored value that fails to decode is
    /// treated as absent and the corresponding collection stays at its
    /// empty default.
    pub fn load(&self) {
        let (session, cart_lines, wishlist_entries) = {
            let storage = self.storage_guard();
            (
                load_json::<SessionSnapshot, _>(&**storage, &self.key(keys::SESSION)),
                load_json::<Vec<CartLine>, _>(&**storage, &self.key(keys::CART)),
                load_json::<Vec<WishlistEntry>, _>(&**storage, &self.key(keys::WISHLIST)),
            )
        };

        if let Some(snapshot) = session {
            debug!("restored session from storage");
            self.session_slot().session = Some(snapshot.into());
        }

        if let Some(lines) = cart_lines {
            *self.cart_guard() = Cart::from_lines(lines);
        }

        if let Some(entries) = wishlist_entries {
            *self.wishlist_guard() = Wishlist::from_entries(entries);
        }
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Log in with email and password.
    ///
    /// On success the account and token are committed and persisted. On any
    /// failure the state is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] variants wrapped in [`AppError::Auth`],
    /// including [`AuthError::Superseded`] when a newer auth request was
    /// dispatched while this one was in flight.
    pub async fn login(&self, email: &str, password: &str) -> Result<Account> {
        let ticket = self.begin_auth_request();
        let outcome = self.inner.auth.login(email, password).await?;
        self.commit_auth(ticket, outcome.account, outcome.token)
    }

    /// Register a new account and log it in.
    ///
    /// Client-side validation (confirmation match, password length, email
    /// shape) happens before any network call.
    ///
    /// # Errors
    ///
    /// Same as [`StorefrontState::login`], plus the validation variants of
    /// [`AuthError`].
    pub async fn register(&self, profile: &RegisterProfile) -> Result<Account> {
        let ticket = self.begin_auth_request();
        let outcome = self.inner.auth.register(profile).await?;
        self.commit_auth(ticket, outcome.account, outcome.token)
    }

    /// Log out: best-effort remote notification, guaranteed local clearing.
    ///
    /// The user, token, cart, and wishlist are removed from memory and from
    /// persistent storage even when the remote call fails. Also invalidates
    /// any in-flight auth request so a late login response cannot resurrect
    /// the session. Idempotent.
    pub async fn logout(&self) {
        let token = {
            let mut slot = self.session_slot();
            slot.auth_seq += 1;
            slot.session.as_ref().map(|s| s.token.clone())
        };

        if let Some(token) = token
            && let Err(e) = self.inner.auth.logout(&token).await
        {
            warn!(error = %e, "remote logout failed; clearing local state anyway");
        }

        self.clear_local_state();
    }

    /// Re-fetch the authenticated account's profile and update the session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AuthRequired`] when no session exists, and
    /// [`AuthError::Superseded`] when the session changed while the request
    /// was in flight.
    pub async fn refresh_account(&self) -> Result<Account> {
        let token = self
            .session_slot()
            .session
            .as_ref()
            .map(|s| s.token.clone())
            .ok_or(AppError::AuthRequired)?;

        let account = self.inner.auth.current_account(&token).await?;

        {
            let mut slot = self.session_slot();
            match slot.session.as_mut() {
                Some(session) if session.token == token => {
                    session.account = account.clone();
                }
                _ => return Err(AuthError::Superseded.into()),
            }
        }

        self.persist_session();
        Ok(account)
    }

    /// Update profile fields of the authenticated account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AuthRequired`] when no session exists, and
    /// [`AuthError::Superseded`] when the session changed while the request
    /// was in flight.
    pub async fn update_profile(&self, input: &AccountUpdateInput) -> Result<Account> {
        let token = self
            .session_slot()
            .session
            .as_ref()
            .map(|s| s.token.clone())
            .ok_or(AppError::AuthRequired)?;

        let account = self.inner.auth.update_account(&token, input).await?;

        {
            let mut slot = self.session_slot();
            match slot.session.as_mut() {
                Some(session) if session.token == token => {
                    session.account = account.clone();
                }
                _ => return Err(AuthError::Superseded.into()),
            }
        }

        self.persist_session();
        Ok(account)
    }

    /// The logged-in account, if any.
    #[must_use]
    pub fn current_account(&self) -> Option<Account> {
        self.session_slot()
            .session
            .as_ref()
            .map(|s| s.account.clone())
    }

    /// Whether a session is active.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session_slot().session.is_some()
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add an item to the cart (increment-or-insert).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AuthRequired`] when no session is active; the
    /// caller should prompt for login and drop the action.
    pub fn add_to_cart(&self, input: CartLineInput) -> Result<()> {
        self.require_auth()?;
        self.cart_guard().add(input);
        self.persist_cart();
        Ok(())
    }

    /// Replace the quantity of a cart line verbatim.
    ///
    /// Quantities of zero or less are the caller's cue to call
    /// [`StorefrontState::remove_from_cart`] instead; this setter never
    /// deletes. Returns `false` if no line matches.
    pub fn update_cart_quantity(&self, item_id: &ItemId, quantity: u32) -> bool {
        let changed = self.cart_guard().set_quantity(item_id, quantity);
        if changed {
            self.persist_cart();
        }
        changed
    }

    /// Remove a cart line. No-op if absent.
    pub fn remove_from_cart(&self, item_id: &ItemId) {
        self.cart_guard().remove(item_id);
        self.persist_cart();
    }

    /// Empty the cart.
    pub fn clear_cart(&self) {
        self.cart_guard().clear();
        self.persist_cart();
    }

    /// Snapshot of the cart lines in insertion order.
    #[must_use]
    pub fn cart_lines(&self) -> Vec<CartLine> {
        self.cart_guard().lines().to_vec()
    }

    /// Number of distinct cart lines.
    #[must_use]
    pub fn cart_len(&self) -> usize {
        self.cart_guard().len()
    }

    /// Order totals for the current cart with no discount applied.
    #[must_use]
    pub fn pricing(&self) -> PricingSnapshot {
        self.pricing_with_discount(Decimal::ZERO)
    }

    /// Order totals for the current cart with a promotional discount.
    #[must_use]
    pub fn pricing_with_discount(&self, discount: Decimal) -> PricingSnapshot {
        pricing::quote(&self.cart_guard(), discount, &self.inner.pricing)
    }

    /// The active pricing constants.
    #[must_use]
    pub fn pricing_config(&self) -> &PricingConfig {
        &self.inner.pricing
    }

    // =========================================================================
    // Wishlist
    // =========================================================================

    /// Toggle a business on the wishlist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AuthRequired`] when no session is active.
    pub fn toggle_wishlist(&self, business: &Business) -> Result<WishlistToggle> {
        self.require_auth()?;
        let toggle = self.wishlist_guard().toggle(business);
        self.persist_wishlist();
        Ok(toggle)
    }

    /// Whether a business is on the wishlist.
    #[must_use]
    pub fn wishlist_contains(&self, id: &localmart_core::BusinessId) -> bool {
        self.wishlist_guard().contains(id)
    }

    /// Snapshot of the wishlist entries in insertion order.
    #[must_use]
    pub fn wishlist_entries(&self) -> Vec<WishlistEntry> {
        self.wishlist_guard().entries().to_vec()
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// The full business catalog.
    #[must_use]
    pub fn catalog(&self) -> &[Business] {
        &self.inner.catalog
    }

    /// Filter the catalog by category and free-text query.
    #[must_use]
    pub fn filter_catalog(
        &self,
        category: Option<&CategoryId>,
        query: Option<&str>,
    ) -> Vec<&Business> {
        catalog::filter_businesses(&self.inner.catalog, category, query)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Take an auth request ticket, invalidating all earlier ones.
    fn begin_auth_request(&self) -> u64 {
        let mut slot = self.session_slot();
        slot.auth_seq += 1;
        slot.auth_seq
    }

    /// Commit an auth outcome if its ticket is still the newest.
    fn commit_auth(
        &self,
        ticket: u64,
        account: Account,
        token: localmart_core::BearerToken,
    ) -> Result<Account> {
        {
            let mut slot = self.session_slot();
            if slot.auth_seq != ticket {
                debug!("discarding superseded auth response");
                return Err(AuthError::Superseded.into());
            }
            slot.session = Some(AuthSession {
                account: account.clone(),
                token,
            });
        }

        self.persist_session();
        Ok(account)
    }

    fn require_auth(&self) -> Result<()> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(AppError::AuthRequired)
        }
    }

    fn clear_local_state(&self) {
        self.session_slot().session = None;
        self.cart_guard().clear();
        self.wishlist_guard().clear();

        let mut storage = self.storage_guard();
        storage.remove(&self.key(keys::SESSION));
        storage.remove(&self.key(keys::CART));
        storage.remove(&self.key(keys::WISHLIST));
    }

    fn persist_session(&self) {
        let snapshot = self
            .session_slot()
            .session
            .as_ref()
            .map(SessionSnapshot::from);

        match snapshot {
            Some(snapshot) => self.write_json(keys::SESSION, &snapshot),
            None => self.storage_guard().remove(&self.key(keys::SESSION)),
        }
    }

    fn persist_cart(&self) {
        let lines = self.cart_guard().lines().to_vec();
        self.write_json(keys::CART, &lines);
    }

    fn persist_wishlist(&self) {
        let entries = self.wishlist_guard().entries().to_vec();
        self.write_json(keys::WISHLIST, &entries);
    }

    fn write_json<T: Serialize>(&self, suffix: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.storage_guard().set(&self.key(suffix), json),
            Err(e) => warn!(suffix, error = %e, "failed to serialize state snapshot"),
        }
    }

    fn key(&self, suffix: &str) -> String {
        scoped_key(&self.inner.storage_prefix, suffix)
    }

    fn session_slot(&self) -> MutexGuard<'_, SessionSlot> {
        self.inner
            .session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn cart_guard(&self) -> MutexGuard<'_, Cart> {
        self.inner
            .cart
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn wishlist_guard(&self) -> MutexGuard<'_, Wishlist> {
        self.inner
            .wishlist
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn storage_guard(&self) -> MutexGuard<'_, Box<dyn StorageAdapter + Send>> {
        self.inner
            .storage
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
