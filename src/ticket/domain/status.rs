//! Ticket lifecycle status and transition rules.

use super::ParseTicketStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ticket lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// Ticket is raised and waiting for the assigned developer.
    Open,
    /// The assigned developer has accepted the ticket and is working it.
    InProgress,
    /// The assigned developer proposed a change awaiting manager review.
    NeedsReview,
    /// The assigned developer finished the ticket.
    Completed,
}

impl TicketStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::NeedsReview => "needs_review",
            Self::Completed => "completed",
        }
    }

    /// Returns `true` when no further transitions are permitted.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Returns `true` when the lifecycle permits moving to `target`.
    ///
    /// A manager edit bypasses this table and force-resets the status to
    /// [`Self::Open`]; see `Ticket::apply_edit`.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Open, Self::InProgress | Self::NeedsReview)
                | (Self::InProgress, Self::NeedsReview | Self::Completed)
                | (Self::NeedsReview, Self::Open | Self::InProgress)
        )
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TicketStatus {
    type Error = ParseTicketStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "open" => Ok(Self::Open),
            "in_progress" => Ok(Self::InProgress),
            "needs_review" => Ok(Self::NeedsReview),
            // Earlier deployments stored the terminal state as `returned`.
            "completed" | "returned" => Ok(Self::Completed),
            _ => Err(ParseTicketStatusError(value.to_owned())),
        }
    }
}
