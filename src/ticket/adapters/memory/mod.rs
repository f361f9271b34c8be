//! In-memory adapters for ticket ports.

mod comments;
mod tickets;

pub use comments::InMemoryCommentRepository;
pub use tickets::InMemoryTicketRepository;
