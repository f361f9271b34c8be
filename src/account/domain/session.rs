//! Session value objects issued at sign-in.

use super::ProfileId;
use serde::{Deserialize, Serialize};

/// Opaque session token handed to clients at sign-in.
///
/// The token has no structure the core may rely on; it is only ever echoed
/// back to the auth provider for resolution. It is kept out of `Display`
/// output so it does not leak into logs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wraps a provider-issued token value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the token as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Authenticated session binding a token to a profile identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: SessionToken,
    profile_id: ProfileId,
}

impl Session {
    /// Creates a session from an issued token and the profile it resolves to.
    #[must_use]
    pub const fn new(token: SessionToken, profile_id: ProfileId) -> Self {
        Self { token, profile_id }
    }

    /// Returns the session token.
    #[must_use]
    pub const fn token(&self) -> &SessionToken {
        &self.token
    }

    /// Returns the profile the session authenticates.
    #[must_use]
    pub const fn profile_id(&self) -> ProfileId {
        self.profile_id
    }
}
