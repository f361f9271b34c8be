//! In-memory profile repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::account::{
    domain::{Profile, ProfileId, Role},
    ports::{ProfileRepository, ProfileRepositoryError, ProfileRepositoryResult},
};

/// Thread-safe in-memory profile repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    state: Arc<RwLock<HashMap<ProfileId, Profile>>>,
}

impl InMemoryProfileRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn store(&self, profile: &Profile) -> ProfileRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ProfileRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.contains_key(&profile.id()) {
            return Err(ProfileRepositoryError::DuplicateProfile(profile.id()));
        }
        state.insert(profile.id(), profile.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ProfileId) -> ProfileRepositoryResult<Option<Profile>> {
        let state = self.state.read().map_err(|err| {
            ProfileRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&id).cloned())
    }

    async fn list_by_role(&self, role: Role) -> ProfileRepositoryResult<Vec<Profile>> {
        let state = self.state.read().map_err(|err| {
            ProfileRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut profiles: Vec<Profile> = state
            .values()
            .filter(|profile| profile.role() == role)
            .cloned()
            .collect();
        profiles.sort_by(|left, right| {
            left.name()
                .as_str()
                .cmp(right.name().as_str())
                .then_with(|| left.id().into_inner().cmp(&right.id().into_inner()))
        });
        Ok(profiles)
    }
}
