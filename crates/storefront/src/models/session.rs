//! Session-related types.
//!
//! The in-memory session keeps the bearer token behind
//! [`BearerToken`]; the snapshot written to persistent storage is a plain
//! serde struct, since the storage port only speaks strings.

use serde::{Deserialize, Serialize};

use localmart_core::BearerToken;

use crate::models::user::Account;

/// The authenticated session held by the state root.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// The logged-in account.
    pub account: Account,
    /// Bearer credential for account API calls.
    pub token: BearerToken,
}

/// Persisted mirror of [`AuthSession`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub account: Account,
    pub token: String,
}

impl From<&AuthSession> for SessionSnapshot {
    fn from(session: &AuthSession) -> Self {
        Self {
            account: session.account.clone(),
            token: session.token.reveal().to_owned(),
        }
    }
}

impl From<SessionSnapshot> for AuthSession {
    fn from(snapshot: SessionSnapshot) -> Self {
        Self {
            account: snapshot.account,
            token: BearerToken::new(snapshot.token),
        }
    }
}
