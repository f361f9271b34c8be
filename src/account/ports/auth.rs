//! Authentication provider port.
//!
//! The provider owns credential verification and session issuance; the core
//! never sees stored secrets, only profile identities and opaque tokens.

use crate::account::domain::{Credentials, EmailAddress, ProfileId, Session, SessionToken};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for auth provider operations.
pub type AuthProviderResult<T> = Result<T, AuthProviderError>;

/// Authentication contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Registers new credentials and returns the issued profile identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AuthProviderError::EmailAlreadyRegistered`] when the email
    /// is taken.
    async fn sign_up(&self, credentials: &Credentials) -> AuthProviderResult<ProfileId>;

    /// Verifies credentials and opens a session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthProviderError::InvalidCredentials`] when the email is
    /// unknown or the password does not match.
    async fn sign_in(&self, credentials: &Credentials) -> AuthProviderResult<Session>;

    /// Resolves a session token to the profile it authenticates.
    ///
    /// Returns `None` for tokens the provider did not issue or no longer
    /// honours.
    async fn authenticate(&self, token: &SessionToken) -> AuthProviderResult<Option<ProfileId>>;
}

/// Errors returned by auth provider implementations.
#[derive(Debug, Clone, Error)]
pub enum AuthProviderError {
    /// The email address is already registered.
    #[error("email already registered: {0}")]
    EmailAlreadyRegistered(EmailAddress),

    /// The presented credentials do not match a registered account.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Provider-side failure, opaque to the caller.
    #[error("auth provider error: {0}")]
    Provider(Arc<dyn std::error::Error + Send + Sync>),
}

impl AuthProviderError {
    /// Wraps a provider-side error.
    pub fn provider(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Provider(Arc::new(err))
    }
}
