//! Bearer token type.

use core::fmt;

use secrecy::{ExposeSecret, SecretString};

/// An opaque bearer credential attached to outgoing account API requests.
///
/// Wraps [`SecretString`] so the token never leaks through `Debug` output or
/// log lines. The raw value is only reachable through [`BearerToken::reveal`],
/// which call sites use when building the `Authorization` header or writing
/// the session snapshot to persistent storage.
#[derive(Clone)]
pub struct BearerToken(SecretString);

impl BearerToken {
    /// Wrap a raw token string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(SecretString::from(raw.into()))
    }

    /// Expose the raw token value.
    #[must_use]
    pub fn reveal(&self) -> &str {
        self.0.expose_secret()
    }

    /// Whether the token is the empty string.
    ///
    /// The account API signals a rejected login by returning an empty token,
    /// so emptiness doubles as the "no credential issued" marker.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BearerToken").field(&"[REDACTED]").finish()
    }
}

impl PartialEq for BearerToken {
    fn eq(&self, other: &Self) -> bool {
        self.reveal() == other.reveal()
    }
}

impl Eq for BearerToken {}

impl From<String> for BearerToken {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for BearerToken {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
