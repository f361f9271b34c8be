//! In-memory authentication provider.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::account::{
    domain::{Credentials, ProfileId, Session, SessionToken},
    ports::{AuthProvider, AuthProviderError, AuthProviderResult},
};

/// Thread-safe in-memory authentication provider.
///
/// Stores salted SHA-256 password digests and issues UUID session tokens.
/// Sessions never expire; expiry belongs to a managed provider.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuthProvider {
    state: Arc<RwLock<AuthState>>,
}

#[derive(Debug, Default)]
struct AuthState {
    accounts: HashMap<String, AccountRecord>,
    sessions: HashMap<String, ProfileId>,
}

#[derive(Debug, Clone)]
struct AccountRecord {
    profile_id: ProfileId,
    digest: Vec<u8>,
}

/// Computes the salted password digest for an account.
///
/// The email acts as the salt so equal passwords on different accounts do
/// not share a digest.
fn password_digest(credentials: &Credentials) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(credentials.email().as_str().as_bytes());
    hasher.update([0x1f]);
    hasher.update(credentials.password().as_str().as_bytes());
    hasher.finalize().to_vec()
}

impl InMemoryAuthProvider {
    /// Creates a provider with no registered accounts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuthProvider for InMemoryAuthProvider {
    async fn sign_up(&self, credentials: &Credentials) -> AuthProviderResult<ProfileId> {
        let mut state = self.state.write().map_err(|err| {
            AuthProviderError::provider(std::io::Error::other(err.to_string()))
        })?;
        let email = credentials.email().clone();
        if state.accounts.contains_key(email.as_str()) {
            return Err(AuthProviderError::EmailAlreadyRegistered(email));
        }

        let record = AccountRecord {
            profile_id: ProfileId::new(),
            digest: password_digest(credentials),
        };
        let profile_id = record.profile_id;
        state.accounts.insert(email.as_str().to_owned(), record);
        Ok(profile_id)
    }

    async fn sign_in(&self, credentials: &Credentials) -> AuthProviderResult<Session> {
        let mut state = self.state.write().map_err(|err| {
            AuthProviderError::provider(std::io::Error::other(err.to_string()))
        })?;
        let record = state
            .accounts
            .get(credentials.email().as_str())
            .cloned()
            .ok_or(AuthProviderError::InvalidCredentials)?;
        if record.digest != password_digest(credentials) {
            return Err(AuthProviderError::InvalidCredentials);
        }

        let token = SessionToken::new(Uuid::new_v4().to_string());
        state
            .sessions
            .insert(token.as_str().to_owned(), record.profile_id);
        Ok(Session::new(token, record.profile_id))
    }

    async fn authenticate(&self, token: &SessionToken) -> AuthProviderResult<Option<ProfileId>> {
        let state = self.state.read().map_err(|err| {
            AuthProviderError::provider(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.sessions.get(token.as_str()).copied())
    }
}
