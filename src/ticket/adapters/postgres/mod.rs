//! `PostgreSQL` adapters for ticket and comment persistence.

mod comments;
mod helpers;
mod models;
mod schema;
mod tickets;

pub use comments::PostgresCommentRepository;
pub use helpers::TicketPgPool;
pub use tickets::PostgresTicketRepository;
