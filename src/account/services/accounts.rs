//! Service layer for sign-up, sign-in, and the developer directory.

use crate::account::{
    domain::{
        AccountDomainError, Credentials, DisplayName, EmailAddress, Password, Profile, ProfileId,
        Role, Session, SessionToken,
    },
    ports::{
        AuthProvider, AuthProviderError, ProfileRepository, ProfileRepositoryError,
    },
};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for registering a new account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterRequest {
    email: String,
    password: String,
    name: String,
    role: Role,
}

impl RegisterRequest {
    /// Creates a registration request with all required fields.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
            role,
        }
    }
}

/// Service-level errors for account operations.
#[derive(Debug, Error)]
pub enum AccountServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] AccountDomainError),
    /// Auth provider operation failed.
    #[error(transparent)]
    Auth(#[from] AuthProviderError),
    /// Profile repository operation failed.
    #[error(transparent)]
    Profile(#[from] ProfileRepositoryError),
    /// A session resolved to a profile that is no longer stored.
    #[error("no profile stored for authenticated user {0}")]
    MissingProfile(ProfileId),
    /// The directory listing was requested by a non-manager.
    #[error("profile {0} is not a manager")]
    ManagerRequired(ProfileId),
}

/// Result type for account service operations.
pub type AccountServiceResult<T> = Result<T, AccountServiceError>;

/// Account registration, session, and directory orchestration service.
#[derive(Clone)]
pub struct AccountService<P, A>
where
    P: ProfileRepository,
    A: AuthProvider,
{
    profiles: Arc<P>,
    auth: Arc<A>,
}

impl<P, A> AccountService<P, A>
where
    P: ProfileRepository,
    A: AuthProvider,
{
    /// Creates a new account service.
    #[must_use]
    pub const fn new(profiles: Arc<P>, auth: Arc<A>) -> Self {
        Self { profiles, auth }
    }

    /// Registers credentials with the auth provider and stores the profile
    /// under the issued identifier.
    ///
    /// The two writes are not atomic: when the profile store fails after the
    /// auth account was created, the auth account is left in place and the
    /// failure is surfaced as-is.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError`] when validation fails, the email is
    /// already registered, or the profile cannot be stored.
    pub async fn register(&self, request: RegisterRequest) -> AccountServiceResult<Profile> {
        let email = EmailAddress::new(request.email)?;
        let password = Password::new(request.password)?;
        let name = DisplayName::new(request.name)?;
        let credentials = Credentials::new(email, password);

        let profile_id = self.auth.sign_up(&credentials).await?;
        let profile = Profile::new(profile_id, name, request.role);
        if let Err(err) = self.profiles.store(&profile).await {
            tracing::warn!(
                profile_id = %profile_id,
                error = %err,
                "auth account created but profile store failed"
            );
            return Err(err.into());
        }
        Ok(profile)
    }

    /// Verifies credentials and opens a session.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError`] when validation fails or the provider
    /// rejects the credentials.
    pub async fn sign_in(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> AccountServiceResult<Session> {
        let credentials = Credentials::new(EmailAddress::new(email)?, Password::new(password)?);
        Ok(self.auth.sign_in(&credentials).await?)
    }

    /// Resolves a session token to its stored profile.
    ///
    /// Returns `Ok(None)` when the token does not resolve to a session.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError::MissingProfile`] when the session is
    /// valid but the profile row is gone.
    pub async fn current_profile(
        &self,
        token: &SessionToken,
    ) -> AccountServiceResult<Option<Profile>> {
        let Some(profile_id) = self.auth.authenticate(token).await? else {
            return Ok(None);
        };
        self.profiles
            .find_by_id(profile_id)
            .await?
            .map(Some)
            .ok_or(AccountServiceError::MissingProfile(profile_id))
    }

    /// Lists developer profiles for assignment, ordered by display name.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError::ManagerRequired`] when the caller is
    /// not a manager, before any read.
    pub async fn list_developers(&self, actor: &Profile) -> AccountServiceResult<Vec<Profile>> {
        if !actor.role().is_manager() {
            return Err(AccountServiceError::ManagerRequired(actor.id()));
        }
        Ok(self.profiles.list_by_role(Role::Developer).await?)
    }
}
