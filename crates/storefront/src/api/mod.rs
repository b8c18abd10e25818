//! GraphQL account API client.
//!
//! The account API is the only remote collaborator of the storefront: it
//! authenticates users and serves their profile. Queries are hand-rolled
//! serde documents rather than codegen - the API publishes no SDL schema,
//! and the handful of operations here does not justify one.
//!
//! The stored bearer token is attached as an `Authorization: Bearer` header
//! on every call once present.
//!
//! # Example
//!
//! ```rust,ignore
//! use localmart_storefront::api::AccountClient;
//!
//! let client = AccountClient::new(&config.api);
//! let auth = client.account_login("maria@example.com", "hunter2hunter2").await?;
//! let profile = client.account_get(&auth.token.into()).await?;
//! ```

pub mod types;

pub use types::*;

use std::sync::Arc;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::instrument;

use localmart_core::BearerToken;

use crate::config::AccountApiConfig;

/// Errors that can occur when talking to the account API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (network error, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status code.
    #[error("API returned HTTP {0}: {1}")]
    Status(u16, String),

    /// GraphQL layer returned errors.
    #[error("GraphQL errors: {0}")]
    GraphQL(String),

    /// Response body was not valid JSON for the expected shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Response carried neither data nor errors.
    #[error("no data in response")]
    NoData,
}

// =============================================================================
// GraphQL plumbing
// =============================================================================

#[derive(Debug, Serialize)]
struct GraphQLRequest {
    query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQLErrorResponse>>,
}

#[derive(Debug, Deserialize)]
struct GraphQLErrorResponse {
    message: String,
}

impl<T> GraphQLResponse<T> {
    fn into_result(self) -> Result<T, ApiError> {
        if let Some(errors) = self.errors
            && !errors.is_empty()
        {
            let messages: Vec<_> = errors.iter().map(|e| e.message.as_str()).collect();
            return Err(ApiError::GraphQL(messages.join("; ")));
        }

        self.data.ok_or(ApiError::NoData)
    }
}

// =============================================================================
// AccountClient
// =============================================================================

/// Client for the remote GraphQL account API.
#[derive(Clone)]
pub struct AccountClient {
    inner: Arc<AccountClientInner>,
}

struct AccountClientInner {
    client: reqwest::Client,
    endpoint: String,
}

impl AccountClient {
    /// Create a new account API client.
    #[must_use]
    pub fn new(config: &AccountApiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            inner: Arc::new(AccountClientInner {
                client,
                endpoint: config.endpoint.clone(),
            }),
        }
    }

    /// Execute a GraphQL operation against the account API.
    async fn execute<T: DeserializeOwned>(
        &self,
        token: Option<&BearerToken>,
        query: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let request = GraphQLRequest {
            query: query.to_string(),
            variables,
        };

        let mut builder = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .header("Content-Type", "application/json")
            .json(&request);

        if let Some(token) = token {
            builder = builder.bearer_auth(token.reveal());
        }

        let response = builder.send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status(
                status.as_u16(),
                body.chars().take(200).collect(),
            ));
        }

        let gql_response: GraphQLResponse<T> = serde_json::from_str(&body)?;
        gql_response.into_result()
    }

    // =========================================================================
    // Account Operations
    // =========================================================================

    /// Log in with email and password.
    ///
    /// A rejected login is NOT an error at this layer: the API answers with
    /// an empty token and a message, which callers inspect.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn account_login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthPayload, ApiError> {
        #[derive(Deserialize)]
        struct Response {
            #[serde(rename = "accountLogin")]
            account_login: AuthPayload,
        }

        const QUERY: &str = r"
            mutation AccountLogin($input: UserLoginInput!) {
                accountLogin(input: $input) {
                    token
                    message
                    user {
                        id
                        email
                        fullName
                        phone
                        userType
                        customerCategory
                        adminRole
                        sellerType
                        isActive
                        businessName
                        businessAddress
                        businessDescription
                        createdAt
                    }
                }
            }
        ";

        let variables = serde_json::json!({
            "input": { "email": email, "password": password }
        });

        let response: Response = self.execute(None, QUERY, Some(variables)).await?;
        Ok(response.account_login)
    }

    /// Register a new account.
    ///
    /// Like login, a rejected registration comes back with an empty token
    /// and a message rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn account_register(&self, input: &RegisterInput) -> Result<AuthPayload, ApiError> {
        #[derive(Deserialize)]
        struct Response {
            #[serde(rename = "accountRegister")]
            account_register: AuthPayload,
        }

        const QUERY: &str = r"
            mutation AccountRegister($input: UserRegisterInput!) {
                accountRegister(input: $input) {
                    token
                    message
                    user {
                        id
                        email
                        fullName
                        phone
                        userType
                        customerCategory
                        adminRole
                        sellerType
                        isActive
                        businessName
                        businessAddress
                        businessDescription
                        createdAt
                    }
                }
            }
        ";

        let variables = serde_json::json!({ "input": input });

        let response: Response = self.execute(None, QUERY, Some(variables)).await?;
        Ok(response.account_register)
    }

    /// Notify the API that the current session is over.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails. Callers treat logout as
    /// best-effort: local state is cleared regardless of this result.
    #[instrument(skip(self, token))]
    pub async fn account_logout(&self, token: &BearerToken) -> Result<LogoutPayload, ApiError> {
        #[derive(Deserialize)]
        struct Response {
            #[serde(rename = "accountLogout")]
            account_logout: LogoutPayload,
        }

        const QUERY: &str = r"
            mutation AccountLogout {
                accountLogout {
                    success
                    message
                }
            }
        ";

        let response: Response = self.execute(Some(token), QUERY, None).await?;
        Ok(response.account_logout)
    }

    /// Fetch the profile of the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the token is not accepted.
    #[instrument(skip(self, token))]
    pub async fn account_get(&self, token: &BearerToken) -> Result<AccountPayload, ApiError> {
        #[derive(Deserialize)]
        struct Response {
            #[serde(rename = "accountGet")]
            account_get: AccountPayload,
        }

        const QUERY: &str = r"
            query GetCurrentUser {
                accountGet {
                    id
                    email
                    fullName
                    phone
                    userType
                    customerCategory
                    adminRole
                    sellerType
                    isActive
                    businessName
                    businessAddress
                    businessDescription
                    createdAt
                }
            }
        ";

        let response: Response = self.execute(Some(token), QUERY, None).await?;
        Ok(response.account_get)
    }

    /// Update profile fields of the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the token is not accepted.
    #[instrument(skip(self, token, input))]
    pub async fn account_update(
        &self,
        token: &BearerToken,
        input: &AccountUpdateInput,
    ) -> Result<AccountPayload, ApiError> {
        #[derive(Deserialize)]
        struct Response {
            #[serde(rename = "accountUpdate")]
            account_update: AccountPayload,
        }

        const QUERY: &str = r"
            mutation AccountUpdate($input: UserUpdateInput!) {
                accountUpdate(input: $input) {
                    id
                    email
                    fullName
                    phone
                    userType
                    customerCategory
                    adminRole
                    sellerType
                    isActive
                    businessName
                    businessAddress
                    businessDescription
                    createdAt
                }
            }
        ";

        let variables = serde_json::json!({ "input": input });

        let response: Response = self.execute(Some(token), QUERY, Some(variables)).await?;
        Ok(response.account_update)
    }
}
