//! Authentication service.
//!
//! Wraps the account API with the client-side contract: registration input
//! is validated before any network call, and a rejected login (empty token)
//! surfaces as a typed error instead of a half-committed session.

mod error;

pub use error::AuthError;

use tracing::instrument;

use localmart_core::{BearerToken, CustomerCategory, Email, UserType};

use crate::api::types::{AccountUpdateInput, AuthPayload, RegisterInput};
use crate::api::AccountClient;
use crate::models::user::Account;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// A successful authentication: the typed account, the issued bearer token,
/// and the API's confirmation message.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    pub account: Account,
    pub token: BearerToken,
    pub message: String,
}

/// Registration form data as collected from the user.
#[derive(Debug, Clone)]
pub struct RegisterProfile {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub confirm_password: String,
    /// Defaults to [`UserType::Customer`] when not chosen explicitly.
    pub user_type: Option<UserType>,
    /// Defaults to [`CustomerCategory::General`] when not chosen explicitly.
    pub customer_category: Option<CustomerCategory>,
}

/// Authentication service.
///
/// Handles login, registration, logout notification, and profile reads.
#[derive(Clone)]
pub struct AuthService {
    client: AccountClient,
}

impl AuthService {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(client: AccountClient) -> Self {
        Self { client }
    }

    /// Log in with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email is malformed (checked
    /// before any network call), `AuthError::Rejected` if the API refuses
    /// the credentials, or `AuthError::Api` on transport failure.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthOutcome, AuthError> {
        Email::parse(email)?;

        let payload = self.client.account_login(email, password).await?;
        accept(payload)
    }

    /// Register a new account.
    ///
    /// Client-side invariants are checked in form order before any network
    /// call: confirmation match first, then password length, then email
    /// shape.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::PasswordMismatch`, `AuthError::WeakPassword`, or
    /// `AuthError::InvalidEmail` on validation failure;
    /// `AuthError::Rejected` if the API refuses the registration;
    /// `AuthError::Api` on transport failure.
    #[instrument(skip(self, profile), fields(email = %profile.email))]
    pub async fn register(&self, profile: &RegisterProfile) -> Result<AuthOutcome, AuthError> {
        if profile.password != profile.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        validate_password(&profile.password)?;
        Email::parse(&profile.email)?;

        let input = RegisterInput {
            email: profile.email.clone(),
            password: profile.password.clone(),
            full_name: profile.full_name.clone(),
            phone: profile.phone.clone(),
            user_type: profile.user_type.unwrap_or_default(),
            customer_category: profile.customer_category.unwrap_or_default(),
        };

        let payload = self.client.account_register(&input).await?;
        accept(payload)
    }

    /// Notify the API of a logout.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Api` on transport failure. Callers treat this as
    /// best-effort and clear local state regardless.
    pub async fn logout(&self, token: &BearerToken) -> Result<(), AuthError> {
        self.client.account_logout(token).await?;
        Ok(())
    }

    /// Fetch the authenticated account's current profile.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Api` on transport failure or
    /// `AuthError::InvalidAccount` if the record cannot be typed.
    pub async fn current_account(&self, token: &BearerToken) -> Result<Account, AuthError> {
        let payload = self.client.account_get(token).await?;
        Ok(Account::try_from(payload)?)
    }

    /// Update profile fields of the authenticated account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Api` on transport failure or
    /// `AuthError::InvalidAccount` if the returned record cannot be typed.
    pub async fn update_account(
        &self,
        token: &BearerToken,
        input: &AccountUpdateInput,
    ) -> Result<Account, AuthError> {
        let payload = self.client.account_update(token, input).await?;
        Ok(Account::try_from(payload)?)
    }
}

/// Turn an auth payload into a typed outcome, treating an empty token as
/// rejection.
fn accept(payload: AuthPayload) -> Result<AuthOutcome, AuthError> {
    if payload.token.is_empty() {
        return Err(AuthError::Rejected(payload.message));
    }

    let account = Account::try_from(payload.user)?;

    Ok(AuthOutcome {
        account,
        token: BearerToken::new(payload.token),
        message: payload.message,
    })
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}
