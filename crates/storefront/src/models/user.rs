//! User domain types.
//!
//! These are the validated domain objects, separate from the loose wire
//! types in [`crate::api::types`]. Construction happens through a fallible
//! conversion rather than ad hoc field merging, so every `Account` in the
//! system carries a parsed email, typed roles, and a real timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use localmart_core::{
    AccountId, AdminRole, CustomerCategory, Email, EmailError, SellerType, UserType,
};

use crate::api::types::AccountPayload;

/// Errors converting an API payload into a typed [`Account`].
#[derive(Debug, Error)]
pub enum AccountConversionError {
    /// Email field failed structural validation.
    #[error("invalid email in account payload: {0}")]
    InvalidEmail(#[from] EmailError),

    /// A role field carried an unknown wire value.
    #[error("invalid role in account payload: {0}")]
    InvalidRole(String),

    /// The creation timestamp was not RFC 3339.
    #[error("invalid createdAt in account payload: {0}")]
    InvalidTimestamp(String),
}

/// An authenticated marketplace account.
///
/// Owned exclusively by the session holder; destroyed on logout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Opaque identifier issued by the account API.
    pub id: AccountId,
    /// Validated email address.
    pub email: Email,
    /// Display name.
    pub full_name: String,
    /// Optional contact phone.
    pub phone: Option<String>,
    /// Primary account kind.
    pub user_type: UserType,
    /// Shopping profile (customer accounts).
    pub customer_category: Option<CustomerCategory>,
    /// Console permission scope (admin accounts).
    pub admin_role: Option<AdminRole>,
    /// Business kind (seller accounts).
    pub seller_type: Option<SellerType>,
    /// Whether the account is active on the platform.
    pub is_active: bool,
    /// Seller storefront name.
    pub business_name: Option<String>,
    /// Seller storefront address.
    pub business_address: Option<String>,
    /// Seller storefront description.
    pub business_description: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl TryFrom<AccountPayload> for Account {
    type Error = AccountConversionError;

    fn try_from(payload: AccountPayload) -> Result<Self, Self::Error> {
        let email = Email::parse(&payload.email)?;

        let user_type = payload
            .user_type
            .parse::<UserType>()
            .map_err(AccountConversionError::InvalidRole)?;

        let customer_category = payload
            .customer_category
            .as_deref()
            .map(str::parse::<CustomerCategory>)
            .transpose()
            .map_err(AccountConversionError::InvalidRole)?;

        let admin_role = payload
            .admin_role
            .as_deref()
            .map(str::parse::<AdminRole>)
            .transpose()
            .map_err(AccountConversionError::InvalidRole)?;

        let seller_type = payload
            .seller_type
            .as_deref()
            .map(str::parse::<SellerType>)
            .transpose()
            .map_err(AccountConversionError::InvalidRole)?;

        let created_at = DateTime::parse_from_rfc3339(&payload.created_at)
            .map_err(|e| AccountConversionError::InvalidTimestamp(e.to_string()))?
            .with_timezone(&Utc);

        Ok(Self {
            id: AccountId::new(payload.id),
            email,
            full_name: payload.full_name,
            phone: payload.phone,
            user_type,
            customer_category,
            admin_role,
            seller_type,
            is_active: payload.is_active,
            business_name: payload.business_name,
            business_address: payload.business_address,
            business_description: payload.business_description,
            created_at,
        })
    }
}
