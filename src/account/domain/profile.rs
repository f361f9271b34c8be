//! Profile aggregate root.

use super::{AccountDomainError, ProfileId, Role};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated human-readable profile name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayName(String);

impl DisplayName {
    /// Creates a validated display name.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::EmptyDisplayName`] if the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, AccountDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(AccountDomainError::EmptyDisplayName);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the display name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Profile aggregate root.
///
/// Carries the identity, display name, and role under which every workflow
/// operation is authorized. The role is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    id: ProfileId,
    name: DisplayName,
    role: Role,
}

impl Profile {
    /// Creates a profile under an identifier issued by the auth provider.
    #[must_use]
    pub const fn new(id: ProfileId, name: DisplayName, role: Role) -> Self {
        Self { id, name, role }
    }

    /// Returns the profile identifier.
    #[must_use]
    pub const fn id(&self) -> ProfileId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &DisplayName {
        &self.name
    }

    /// Returns the profile role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }
}
