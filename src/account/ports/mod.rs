//! Port contracts for account management.
//!
//! Ports define infrastructure-agnostic interfaces used by account services.

pub mod auth;
pub mod repository;

pub use auth::{AuthProvider, AuthProviderError, AuthProviderResult};
pub use repository::{ProfileRepository, ProfileRepositoryError, ProfileRepositoryResult};
