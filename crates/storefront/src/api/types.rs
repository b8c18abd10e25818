//! Account API wire types.
//!
//! These mirror the GraphQL schema shapes exactly and stay deliberately
//! loose: the API reports a rejected login as HTTP 200 with an empty token
//! and an all-empty user record, so enum-like fields are plain strings here.
//! The typed domain [`Account`](crate::models::user::Account) is built from
//! an [`AccountPayload`] only after a token was actually issued.

use serde::{Deserialize, Serialize};

use localmart_core::{CustomerCategory, UserType};

// =============================================================================
// Outputs
// =============================================================================

/// User record as returned by the account API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountPayload {
    pub id: String,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub user_type: String,
    #[serde(default)]
    pub customer_category: Option<String>,
    #[serde(default)]
    pub admin_role: Option<String>,
    #[serde(default)]
    pub seller_type: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub business_address: Option<String>,
    #[serde(default)]
    pub business_description: Option<String>,
    pub created_at: String,
}

/// Result of `accountLogin` and `accountRegister`.
///
/// An empty `token` means the request was rejected; `message` then carries
/// the human-readable reason.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    pub message: String,
    pub user: AccountPayload,
}

/// Result of `accountLogout`.
#[derive(Debug, Clone, Deserialize)]
pub struct LogoutPayload {
    pub success: bool,
    pub message: String,
}

// =============================================================================
// Inputs
// =============================================================================

/// Input for the `accountRegister` mutation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub user_type: UserType,
    pub customer_category: CustomerCategory,
}

/// Input for the `accountUpdate` mutation. All fields optional.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_description: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_account_payload_parses_full_record() {
        let json = r#"{
            "id": "acct-1",
            "email": "maria@example.com",
            "fullName": "Maria Lopez",
            "phone": "+1 555 0100",
            "userType": "CUSTOMER",
            "customerCategory": "food_buyer",
            "adminRole": null,
            "sellerType": null,
            "isActive": true,
            "businessName": null,
            "businessAddress": null,
            "businessDescription": null,
            "createdAt": "2025-11-02T09:15:00+00:00"
        }"#;
        let payload: AccountPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.full_name, "Maria Lopez");
        assert_eq!(payload.customer_category.as_deref(), Some("food_buyer"));
    }

    #[test]
    fn test_rejected_login_user_parses() {
        // The API fills every field with empty values when rejecting
        // credentials; the wire type must accept that shape.
        let json = r#"{
            "token": "",
            "message": "Invalid credentials",
            "user": {
                "id": "",
                "email": "",
                "fullName": "",
                "phone": null,
                "userType": "",
                "customerCategory": null,
                "adminRole": null,
                "sellerType": null,
                "isActive": false,
                "businessName": null,
                "businessAddress": null,
                "businessDescription": null,
                "createdAt": ""
            }
        }"#;
        let payload: AuthPayload = serde_json::from_str(json).unwrap();
        assert!(payload.token.is_empty());
        assert_eq!(payload.message, "Invalid credentials");
    }

    #[test]
    fn test_register_input_wire_casing() {
        let input = RegisterInput {
            email: "new@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
            full_name: "New User".to_string(),
            phone: None,
            user_type: UserType::Customer,
            customer_category: CustomerCategory::General,
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["fullName"], "New User");
        assert_eq!(value["userType"], "CUSTOMER");
        assert_eq!(value["customerCategory"], "general");
        assert!(value.get("phone").is_none());
    }

    #[test]
    fn test_update_input_skips_unset_fields() {
        let input = AccountUpdateInput {
            phone: Some("+1 555 0199".to_string()),
            ..AccountUpdateInput::default()
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["phone"], "+1 555 0199");
        assert!(value.get("fullName").is_none());
    }
}
