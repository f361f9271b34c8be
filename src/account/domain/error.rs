//! Error types for account domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain account values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountDomainError {
    /// The display name is empty after trimming.
    #[error("display name must not be empty")]
    EmptyDisplayName,

    /// The email address is not in a usable `local@domain` form.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The password is shorter than the enforced minimum.
    #[error("password must be at least {minimum} characters")]
    PasswordTooShort {
        /// Minimum accepted password length.
        minimum: usize,
    },
}

/// Error returned while parsing roles from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);
