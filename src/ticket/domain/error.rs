//! Error types for ticket domain validation and parsing.

use super::{CommentId, SuggestionResolution, TicketId, TicketStatus};
use thiserror::Error;

/// Errors returned while constructing and mutating domain ticket values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TicketDomainError {
    /// The ticket title is empty after trimming.
    #[error("ticket title must not be empty")]
    EmptyTitle,

    /// The suggestion content is empty after trimming.
    #[error("suggestion content must not be empty")]
    EmptySuggestion,

    /// The requested status transition is not permitted.
    #[error("ticket {ticket_id} cannot move from {from} to {to}")]
    InvalidStatusTransition {
        /// Ticket whose transition was rejected.
        ticket_id: TicketId,
        /// Status the ticket currently holds.
        from: TicketStatus,
        /// Status the transition targeted.
        to: TicketStatus,
    },

    /// The suggestion has already been accepted or denied.
    #[error("suggestion {comment_id} is already {resolution}")]
    SuggestionAlreadyResolved {
        /// Comment whose resolution was attempted again.
        comment_id: CommentId,
        /// Resolution the comment already carries.
        resolution: SuggestionResolution,
    },
}

/// Error returned while parsing ticket statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown ticket status: {0}")]
pub struct ParseTicketStatusError(pub String);

/// Error returned while parsing suggestion resolutions from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown suggestion resolution: {0}")]
pub struct ParseSuggestionResolutionError(pub String);
