//! Port contracts for ticket lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by ticket services.

pub mod comments;
pub mod tickets;

pub use comments::{CommentRepository, CommentRepositoryError, CommentRepositoryResult};
pub use tickets::{TicketRepository, TicketRepositoryError, TicketRepositoryResult};
