//! Account management for Niemeyer.
//!
//! This module owns user identity: profile records with their immutable
//! roles, sign-up and sign-in credentials, and the session tokens issued by
//! the authentication provider. The ticket workflow consumes profiles from
//! here as its acting principals. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
