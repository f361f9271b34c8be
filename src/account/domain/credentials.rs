//! Credential value objects exchanged with the authentication provider.

use super::AccountDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated email address in `local@domain` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// Validation is intentionally shallow: a single `@` separating
    /// non-empty, whitespace-free local and domain parts. Deliverability is
    /// the auth provider's concern.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::InvalidEmail`] when the value does not
    /// have that shape.
    pub fn new(value: impl Into<String>) -> Result<Self, AccountDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        let mut segments = normalized.split('@');
        let local = segments.next().unwrap_or_default();
        let domain = segments.next().unwrap_or_default();
        let has_more_segments = segments.next().is_some();
        let is_valid = !local.is_empty()
            && !domain.is_empty()
            && !has_more_segments
            && !normalized.chars().any(char::is_whitespace);

        if !is_valid {
            return Err(AccountDomainError::InvalidEmail(raw));
        }

        Ok(Self(normalized.to_ascii_lowercase()))
    }

    /// Returns the email address as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated sign-up/sign-in password.
///
/// The value is kept out of `Debug` output and never serialized.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Minimum accepted password length, in characters.
    pub const MIN_LENGTH: usize = 8;

    /// Creates a validated password.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::PasswordTooShort`] when the value has
    /// fewer than [`Self::MIN_LENGTH`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, AccountDomainError> {
        let raw = value.into();
        if raw.chars().count() < Self::MIN_LENGTH {
            return Err(AccountDomainError::PasswordTooShort {
                minimum: Self::MIN_LENGTH,
            });
        }
        Ok(Self(raw))
    }

    /// Returns the password as `str` for digest computation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(redacted)")
    }
}

/// Email and password pair presented to the auth provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    email: EmailAddress,
    password: Password,
}

impl Credentials {
    /// Creates a credential pair from validated values.
    #[must_use]
    pub const fn new(email: EmailAddress, password: Password) -> Self {
        Self { email, password }
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the password.
    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }
}
