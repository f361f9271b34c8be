//! Suggestion comments and their resolution outcomes.

use super::{CommentId, ParseSuggestionResolutionError, TicketDomainError, TicketId};
use crate::account::domain::ProfileId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated suggestion text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuggestionContent(String);

impl SuggestionContent {
    /// Creates validated suggestion content.
    ///
    /// # Errors
    ///
    /// Returns [`TicketDomainError::EmptySuggestion`] if the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TicketDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TicketDomainError::EmptySuggestion);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the content as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SuggestionContent {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SuggestionContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Review outcome recorded on a suggestion comment.
///
/// Resolved comments stay stored as the audit trail of the review; only
/// pending comments appear in review listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionResolution {
    /// Awaiting a manager decision.
    Pending,
    /// A manager accepted the suggestion and will apply it via an edit.
    Accepted,
    /// A manager denied the suggestion and reopened the ticket.
    Denied,
}

impl SuggestionResolution {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Denied => "denied",
        }
    }
}

impl fmt::Display for SuggestionResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for SuggestionResolution {
    type Error = ParseSuggestionResolutionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "denied" => Ok(Self::Denied),
            _ => Err(ParseSuggestionResolutionError(value.to_owned())),
        }
    }
}

/// Suggestion comment aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    ticket_id: TicketId,
    author: ProfileId,
    content: SuggestionContent,
    resolution: SuggestionResolution,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted comment aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedCommentData {
    /// Persisted comment identifier.
    pub id: CommentId,
    /// Persisted owning ticket.
    pub ticket_id: TicketId,
    /// Persisted author.
    pub author: ProfileId,
    /// Persisted suggestion content.
    pub content: SuggestionContent,
    /// Persisted review outcome.
    pub resolution: SuggestionResolution,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Creates a new pending suggestion on a ticket.
    #[must_use]
    pub fn new(
        ticket_id: TicketId,
        author: ProfileId,
        content: SuggestionContent,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: CommentId::new(),
            ticket_id,
            author,
            content,
            resolution: SuggestionResolution::Pending,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a comment from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedCommentData) -> Self {
        Self {
            id: data.id,
            ticket_id: data.ticket_id,
            author: data.author,
            content: data.content,
            resolution: data.resolution,
            created_at: data.created_at,
        }
    }

    /// Returns the comment identifier.
    #[must_use]
    pub const fn id(&self) -> CommentId {
        self.id
    }

    /// Returns the owning ticket.
    #[must_use]
    pub const fn ticket_id(&self) -> TicketId {
        self.ticket_id
    }

    /// Returns the suggesting developer.
    #[must_use]
    pub const fn author(&self) -> ProfileId {
        self.author
    }

    /// Returns the suggestion content.
    #[must_use]
    pub const fn content(&self) -> &SuggestionContent {
        &self.content
    }

    /// Returns the review outcome.
    #[must_use]
    pub const fn resolution(&self) -> SuggestionResolution {
        self.resolution
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns `true` when the comment awaits review.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.resolution, SuggestionResolution::Pending)
    }

    /// Records a manager's acceptance.
    ///
    /// # Errors
    ///
    /// Returns [`TicketDomainError::SuggestionAlreadyResolved`] when the
    /// comment is no longer pending.
    pub fn accept(&mut self) -> Result<(), TicketDomainError> {
        self.resolve(SuggestionResolution::Accepted)
    }

    /// Records a manager's denial.
    ///
    /// # Errors
    ///
    /// Returns [`TicketDomainError::SuggestionAlreadyResolved`] when the
    /// comment is no longer pending.
    pub fn deny(&mut self) -> Result<(), TicketDomainError> {
        self.resolve(SuggestionResolution::Denied)
    }

    fn resolve(&mut self, outcome: SuggestionResolution) -> Result<(), TicketDomainError> {
        if !self.is_pending() {
            return Err(TicketDomainError::SuggestionAlreadyResolved {
                comment_id: self.id,
                resolution: self.resolution,
            });
        }
        self.resolution = outcome;
        Ok(())
    }
}
