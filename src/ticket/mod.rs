//! Ticket lifecycle management for Niemeyer.
//!
//! This module implements the ticket state machine and the suggestion review
//! workflow: managers raise and assign tickets, the assigned developer
//! accepts and finishes them or proposes changes as suggestions, and
//! managers accept or deny those suggestions. Every mutating operation is
//! authorized against the acting profile before any write. The module
//! follows hexagonal architecture:
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
