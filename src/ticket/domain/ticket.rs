//! Ticket aggregate root and related lifecycle types.

use super::{TicketDomainError, TicketId, TicketStatus};
use crate::account::domain::ProfileId;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated ticket title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketTitle(String);

impl TicketTitle {
    /// Creates a validated ticket title.
    ///
    /// # Errors
    ///
    /// Returns [`TicketDomainError::EmptyTitle`] if the value is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TicketDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TicketDomainError::EmptyTitle);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TicketTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TicketTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated payload for raising a new ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDraft {
    title: TicketTitle,
    description: String,
    deadline: Option<NaiveDate>,
    assigned_to: ProfileId,
}

impl TicketDraft {
    /// Creates a draft with the required title and assignee.
    ///
    /// # Errors
    ///
    /// Returns [`TicketDomainError::EmptyTitle`] if the title is empty.
    pub fn new(
        title: impl Into<String>,
        assigned_to: ProfileId,
    ) -> Result<Self, TicketDomainError> {
        Ok(Self {
            title: TicketTitle::new(title)?,
            description: String::new(),
            deadline: None,
            assigned_to,
        })
    }

    /// Sets the ticket description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the ticket deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Returns the developer the ticket will be assigned to.
    #[must_use]
    pub const fn assigned_to(&self) -> ProfileId {
        self.assigned_to
    }
}

/// Validated field updates applied by a manager edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketChangeSet {
    title: TicketTitle,
    description: String,
    deadline: Option<NaiveDate>,
    assigned_to: Option<ProfileId>,
}

impl TicketChangeSet {
    /// Creates a change set with the required replacement title.
    ///
    /// Every edit replaces the full editable field set; omitted builder
    /// calls clear the corresponding field.
    ///
    /// # Errors
    ///
    /// Returns [`TicketDomainError::EmptyTitle`] if the title is empty.
    pub fn new(title: impl Into<String>) -> Result<Self, TicketDomainError> {
        Ok(Self {
            title: TicketTitle::new(title)?,
            description: String::new(),
            deadline: None,
            assigned_to: None,
        })
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the replacement deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets the replacement assignee.
    #[must_use]
    pub const fn with_assignee(mut self, assigned_to: ProfileId) -> Self {
        self.assigned_to = Some(assigned_to);
        self
    }

    /// Returns the replacement assignee, if any.
    #[must_use]
    pub const fn assigned_to(&self) -> Option<ProfileId> {
        self.assigned_to
    }
}

/// Ticket aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    id: TicketId,
    title: TicketTitle,
    description: String,
    deadline: Option<NaiveDate>,
    status: TicketStatus,
    raised_by: ProfileId,
    assigned_to: Option<ProfileId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted ticket aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTicketData {
    /// Persisted ticket identifier.
    pub id: TicketId,
    /// Persisted title.
    pub title: TicketTitle,
    /// Persisted description.
    pub description: String,
    /// Persisted deadline, if any.
    pub deadline: Option<NaiveDate>,
    /// Persisted lifecycle status.
    pub status: TicketStatus,
    /// Persisted raising manager.
    pub raised_by: ProfileId,
    /// Persisted assignee, if any.
    pub assigned_to: Option<ProfileId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    /// Creates a new open ticket from a validated draft.
    #[must_use]
    pub fn new(draft: TicketDraft, raised_by: ProfileId, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TicketId::new(),
            title: draft.title,
            description: draft.description,
            deadline: draft.deadline,
            status: TicketStatus::Open,
            raised_by,
            assigned_to: Some(draft.assigned_to),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a ticket from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTicketData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            deadline: data.deadline,
            status: data.status,
            raised_by: data.raised_by,
            assigned_to: data.assigned_to,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the ticket identifier.
    #[must_use]
    pub const fn id(&self) -> TicketId {
        self.id
    }

    /// Returns the ticket title.
    #[must_use]
    pub const fn title(&self) -> &TicketTitle {
        &self.title
    }

    /// Returns the ticket description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the ticket deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    /// Returns the ticket lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TicketStatus {
        self.status
    }

    /// Returns the manager who raised the ticket.
    #[must_use]
    pub const fn raised_by(&self) -> ProfileId {
        self.raised_by
    }

    /// Returns the assigned developer, if any.
    #[must_use]
    pub const fn assigned_to(&self) -> Option<ProfileId> {
        self.assigned_to
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` when the given profile is the assigned developer.
    #[must_use]
    pub fn is_assigned_to(&self, profile_id: ProfileId) -> bool {
        self.assigned_to == Some(profile_id)
    }

    /// Moves the ticket into progress when the assigned developer accepts it.
    ///
    /// # Errors
    ///
    /// Returns [`TicketDomainError::InvalidStatusTransition`] unless the
    /// ticket is open.
    pub fn start_progress(&mut self, clock: &impl Clock) -> Result<(), TicketDomainError> {
        self.transition_to(TicketStatus::InProgress, clock)
    }

    /// Moves the ticket to its terminal completed status.
    ///
    /// # Errors
    ///
    /// Returns [`TicketDomainError::InvalidStatusTransition`] unless the
    /// ticket is in progress.
    pub fn complete(&mut self, clock: &impl Clock) -> Result<(), TicketDomainError> {
        self.transition_to(TicketStatus::Completed, clock)
    }

    /// Moves the ticket into review when a suggestion is submitted.
    ///
    /// # Errors
    ///
    /// Returns [`TicketDomainError::InvalidStatusTransition`] unless the
    /// ticket is open or in progress.
    pub fn request_review(&mut self, clock: &impl Clock) -> Result<(), TicketDomainError> {
        self.transition_to(TicketStatus::NeedsReview, clock)
    }

    /// Returns the ticket to open when a suggestion is denied.
    ///
    /// Already-open tickets are left untouched so a repeated denial stays
    /// observable as a success.
    ///
    /// # Errors
    ///
    /// Returns [`TicketDomainError::InvalidStatusTransition`] when the
    /// ticket is neither under review nor already open.
    pub fn reopen(&mut self, clock: &impl Clock) -> Result<(), TicketDomainError> {
        if self.status == TicketStatus::Open {
            return Ok(());
        }
        self.transition_to(TicketStatus::Open, clock)
    }

    /// Applies a manager edit and force-resets the status to open.
    ///
    /// This is the one transition that ignores the lifecycle table: a saved
    /// edit reopens the ticket from any prior status, which is also how an
    /// accepted suggestion's changes are finalised.
    pub fn apply_edit(&mut self, changes: TicketChangeSet, clock: &impl Clock) {
        self.title = changes.title;
        self.description = changes.description;
        self.deadline = changes.deadline;
        self.assigned_to = changes.assigned_to;
        self.status = TicketStatus::Open;
        self.touch(clock);
    }

    /// Applies a validated lifecycle transition.
    fn transition_to(
        &mut self,
        target: TicketStatus,
        clock: &impl Clock,
    ) -> Result<(), TicketDomainError> {
        if !self.status.can_transition_to(target) {
            return Err(TicketDomainError::InvalidStatusTransition {
                ticket_id: self.id,
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        self.touch(clock);
        Ok(())
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
