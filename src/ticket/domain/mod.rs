//! Domain model for ticket lifecycle management.
//!
//! The ticket domain models ticket creation, validated status transitions,
//! and suggestion comments with their resolution outcomes, keeping all
//! infrastructure concerns outside of the domain boundary.

mod comment;
mod error;
mod ids;
mod status;
mod ticket;

pub use comment::{Comment, PersistedCommentData, SuggestionContent, SuggestionResolution};
pub use error::{ParseSuggestionResolutionError, ParseTicketStatusError, TicketDomainError};
pub use ids::{CommentId, TicketId};
pub use status::TicketStatus;
pub use ticket::{PersistedTicketData, Ticket, TicketChangeSet, TicketDraft, TicketTitle};
