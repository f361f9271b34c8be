//! Niemeyer: role-gated ticket tracking backend.
//!
//! This crate provides the core functionality for a ticket tracker in which
//! managers raise and assign tickets, developers work them or propose
//! changes, and managers review those proposals.
//!
//! # Architecture
//!
//! Niemeyer follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, auth, etc.)
//!
//! # Modules
//!
//! - [`account`]: Profiles, roles, credentials, and sessions
//! - [`ticket`]: Ticket lifecycle and the suggestion review workflow

pub mod account;
pub mod ticket;
