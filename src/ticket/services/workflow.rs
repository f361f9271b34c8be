//! Service layer orchestrating the ticket lifecycle and suggestion review.

use super::authorization::{AccessError, require_assignee, require_manager};
use crate::account::{
    domain::{Profile, ProfileId, Role},
    ports::{ProfileRepository, ProfileRepositoryError},
};
use crate::ticket::{
    domain::{
        Comment, CommentId, SuggestionContent, Ticket, TicketChangeSet, TicketDomainError,
        TicketDraft, TicketId,
    },
    ports::{
        CommentRepository, CommentRepositoryError, TicketRepository, TicketRepositoryError,
    },
};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for raising a new ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTicketRequest {
    title: String,
    description: String,
    deadline: Option<NaiveDate>,
    assigned_to: ProfileId,
}

impl CreateTicketRequest {
    /// Creates a request with the required title and assignee.
    #[must_use]
    pub fn new(title: impl Into<String>, assigned_to: ProfileId) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            deadline: None,
            assigned_to,
        }
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
}

/// Request payload for a manager edit.
///
/// An edit replaces the full editable field set; omitted builder calls
/// clear the corresponding field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTicketRequest {
    title: String,
    description: String,
    deadline: Option<NaiveDate>,
    assigned_to: Option<ProfileId>,
}

impl EditTicketRequest {
    /// Creates a request with the required replacement title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            deadline: None,
            assigned_to: None,
        }
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
}

/// A pending suggestion prepared for manager review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionView {
    /// Suggestion identifier.
    pub id: CommentId,
    /// Author display name, or the raw profile id when the profile row is
    /// missing.
    pub author: String,
    /// Suggestion text.
    pub content: String,
    /// Submission timestamp.
    pub created_at: DateTime<Utc>,
}

/// Edit intent returned when a manager accepts a suggestion.
///
/// Carries the suggestion content for the manager to fold into a subsequent
/// [`TicketWorkflowService::edit_ticket`] call; accepting on its own changes
/// neither ticket fields nor status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionEdit {
    /// Ticket the suggestion belongs to.
    pub ticket_id: TicketId,
    /// Accepted suggestion.
    pub suggestion_id: CommentId,
    /// Accepted suggestion content.
    pub content: SuggestionContent,
}

/// Service-level errors for ticket workflow operations.
#[derive(Debug, Error)]
pub enum TicketWorkflowError {
    /// Domain validation or transition failed.
    #[error(transparent)]
    Domain(#[from] TicketDomainError),
    /// The authorization guard rejected the caller.
    #[error(transparent)]
    Access(#[from] AccessError),
    /// Ticket repository operation failed.
    #[error(transparent)]
    Tickets(#[from] TicketRepositoryError),
    /// Comment repository operation failed.
    #[error(transparent)]
    Comments(#[from] CommentRepositoryError),
    /// Profile repository operation failed.
    #[error(transparent)]
    Profiles(#[from] ProfileRepositoryError),
    /// The targeted ticket does not exist.
    #[error("ticket not found: {0}")]
    TicketNotFound(TicketId),
    /// The targeted suggestion does not exist on the ticket.
    #[error("suggestion not found: {0}")]
    SuggestionNotFound(CommentId),
    /// The requested assignee is not a registered developer.
    #[error("assignee {0} is not a registered developer")]
    AssigneeNotDeveloper(ProfileId),
    /// A denial reopened the ticket but failed to record the outcome on the
    /// suggestion, leaving it pending.
    #[error("ticket {ticket_id} reopened but suggestion {suggestion_id} is still pending: {source}")]
    SuggestionResolutionIncomplete {
        /// Ticket that was reopened.
        ticket_id: TicketId,
        /// Suggestion left unresolved.
        suggestion_id: CommentId,
        /// Failure reported by the comment repository.
        source: CommentRepositoryError,
    },
}

/// Result type for ticket workflow operations.
pub type TicketWorkflowResult<T> = Result<T, TicketWorkflowError>;

/// Ticket lifecycle and suggestion review orchestration service.
///
/// Every operation takes the acting profile explicitly; there is no ambient
/// session state. Multi-record writes are applied in a fixed order and any
/// partial failure is surfaced as a typed error rather than hidden.
#[derive(Clone)]
pub struct TicketWorkflowService<R, S, P, C>
where
    R: TicketRepository,
    S: CommentRepository,
    P: ProfileRepository,
    C: Clock + Send + Sync,
{
    tickets: Arc<R>,
    comments: Arc<S>,
    profiles: Arc<P>,
    clock: Arc<C>,
}

impl<R, S, P, C> TicketWorkflowService<R, S, P, C>
where
    R: TicketRepository,
    S: CommentRepository,
    P: ProfileRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new workflow service.
    #[must_use]
    pub const fn new(tickets: Arc<R>, comments: Arc<S>, profiles: Arc<P>, clock: Arc<C>) -> Self {
        Self {
            tickets,
            comments,
            profiles,
            clock,
        }
    }

    /// Raises a new ticket assigned to a developer.
    ///
    /// # Errors
    ///
    /// Returns [`TicketWorkflowError`] when the caller is not a manager, the
    /// title is empty, the assignee is not a registered developer, or
    /// persistence fails.
    pub async fn create_ticket(
        &self,
        request: CreateTicketRequest,
        actor: &Profile,
    ) -> TicketWorkflowResult<Ticket> {
        require_manager(actor)?;

        let mut draft = TicketDraft::new(request.title, request.assigned_to)?
            .with_description(request.description);
        if let Some(deadline) = request.deadline {
            draft = draft.with_deadline(deadline);
        }
        self.ensure_developer(draft.assigned_to()).await?;

        let ticket = Ticket::new(draft, actor.id(), &*self.clock);
        self.tickets.store(&ticket).await?;
        tracing::debug!(ticket_id = %ticket.id(), assignee = %request.assigned_to, "ticket raised");
        Ok(ticket)
    }

    /// Accepts an open ticket, moving it into progress.
    ///
    /// # Errors
    ///
    /// Returns [`TicketWorkflowError`] when the caller is not the assigned
    /// developer, the ticket is not open, or persistence fails.
    pub async fn accept_ticket(
        &self,
        ticket_id: TicketId,
        actor: &Profile,
    ) -> TicketWorkflowResult<Ticket> {
        let mut ticket = self.load_ticket(ticket_id).await?;
        require_assignee(actor, &ticket)?;
        ticket.start_progress(&*self.clock)?;
        self.tickets.update(&ticket).await?;
        Ok(ticket)
    }

    /// Finishes an in-progress ticket, moving it to its terminal status.
    ///
    /// # Errors
    ///
    /// Returns [`TicketWorkflowError`] when the caller is not the assigned
    /// developer, the ticket is not in progress, or persistence fails.
    pub async fn finish_ticket(
        &self,
        ticket_id: TicketId,
        actor: &Profile,
    ) -> TicketWorkflowResult<Ticket> {
        let mut ticket = self.load_ticket(ticket_id).await?;
        require_assignee(actor, &ticket)?;
        ticket.complete(&*self.clock)?;
        self.tickets.update(&ticket).await?;
        Ok(ticket)
    }

    /// Submits a change suggestion on an open or in-progress ticket, moving
    /// it into review.
    ///
    /// The comment is stored before the status update so a ticket is never
    /// under review without a backing suggestion. When the status update
    /// fails, the stored comment is deleted again; a failed back-out is
    /// logged and the original failure surfaced.
    ///
    /// # Errors
    ///
    /// Returns [`TicketWorkflowError`] when the caller is not the assigned
    /// developer, the content is empty, the ticket status does not permit
    /// review, or persistence fails.
    pub async fn submit_suggestion(
        &self,
        ticket_id: TicketId,
        actor: &Profile,
        content: impl Into<String> + Send,
    ) -> TicketWorkflowResult<Comment> {
        let mut ticket = self.load_ticket(ticket_id).await?;
        require_assignee(actor, &ticket)?;
        let suggestion = SuggestionContent::new(content)?;
        ticket.request_review(&*self.clock)?;

        let comment = Comment::new(ticket_id, actor.id(), suggestion, &*self.clock);
        self.comments.store(&comment).await?;
        if let Err(update_err) = self.tickets.update(&ticket).await {
            if let Err(delete_err) = self.comments.delete(comment.id()).await {
                tracing::warn!(
                    ticket_id = %ticket_id,
                    suggestion_id = %comment.id(),
                    error = %delete_err,
                    "failed to back out suggestion after status update failure"
                );
            }
            return Err(update_err.into());
        }
        tracing::debug!(ticket_id = %ticket_id, suggestion_id = %comment.id(), "suggestion submitted");
        Ok(comment)
    }

    /// Lists a ticket's pending suggestions for manager review.
    ///
    /// Suggestions are returned in ascending submission order, each carrying
    /// the author's display name. A missing author profile falls back to the
    /// raw profile id rather than failing the listing.
    ///
    /// # Errors
    ///
    /// Returns [`TicketWorkflowError`] when the caller is not a manager, the
    /// ticket does not exist, or persistence fails.
    pub async fn list_suggestions(
        &self,
        ticket_id: TicketId,
        actor: &Profile,
    ) -> TicketWorkflowResult<Vec<SuggestionView>> {
        require_manager(actor)?;
        self.load_ticket(ticket_id).await?;

        let pending = self.comments.list_pending_for_ticket(ticket_id).await?;
        let mut views = Vec::with_capacity(pending.len());
        for comment in pending {
            let author = self.author_label(comment.author()).await?;
            views.push(SuggestionView {
                id: comment.id(),
                author,
                content: comment.content().as_str().to_owned(),
                created_at: comment.created_at(),
            });
        }
        Ok(views)
    }

    /// Accepts a pending suggestion and returns the edit intent for the
    /// manager to apply.
    ///
    /// The ticket itself is untouched: it stays under review until a
    /// subsequent [`Self::edit_ticket`] resets it to open.
    ///
    /// # Errors
    ///
    /// Returns [`TicketWorkflowError`] when the caller is not a manager, the
    /// ticket or suggestion does not exist, the suggestion is already
    /// resolved, or persistence fails.
    pub async fn accept_suggestion(
        &self,
        ticket_id: TicketId,
        suggestion_id: CommentId,
        actor: &Profile,
    ) -> TicketWorkflowResult<SuggestionEdit> {
        require_manager(actor)?;
        let ticket = self.load_ticket(ticket_id).await?;
        let mut comment = self.load_suggestion(&ticket, suggestion_id).await?;

        comment.accept()?;
        self.comments.update(&comment).await?;
        tracing::debug!(ticket_id = %ticket_id, suggestion_id = %suggestion_id, "suggestion accepted");
        Ok(SuggestionEdit {
            ticket_id,
            suggestion_id,
            content: comment.content().clone(),
        })
    }

    /// Denies a pending suggestion and reopens the ticket.
    ///
    /// The reopen is written first. When recording the denial on the
    /// suggestion fails afterwards, the reopen is deliberately not rolled
    /// back; the divergence is logged and surfaced as
    /// [`TicketWorkflowError::SuggestionResolutionIncomplete`].
    ///
    /// # Errors
    ///
    /// Returns [`TicketWorkflowError`] when the caller is not a manager, the
    /// ticket or suggestion does not exist, the suggestion is already
    /// resolved, or persistence fails.
    pub async fn deny_suggestion(
        &self,
        ticket_id: TicketId,
        suggestion_id: CommentId,
        actor: &Profile,
    ) -> TicketWorkflowResult<Ticket> {
        require_manager(actor)?;
        let mut ticket = self.load_ticket(ticket_id).await?;
        let mut comment = self.load_suggestion(&ticket, suggestion_id).await?;

        comment.deny()?;
        ticket.reopen(&*self.clock)?;
        self.tickets.update(&ticket).await?;
        if let Err(err) = self.comments.update(&comment).await {
            tracing::warn!(
                ticket_id = %ticket_id,
                suggestion_id = %suggestion_id,
                error = %err,
                "ticket reopened but suggestion denial was not recorded"
            );
            return Err(TicketWorkflowError::SuggestionResolutionIncomplete {
                ticket_id,
                suggestion_id,
                source: err,
            });
        }
        tracing::debug!(ticket_id = %ticket_id, suggestion_id = %suggestion_id, "suggestion denied");
        Ok(ticket)
    }

    /// Applies a manager edit to a ticket, resetting its status to open
    /// regardless of the prior status.
    ///
    /// # Errors
    ///
    /// Returns [`TicketWorkflowError`] when the caller is not a manager, the
    /// title is empty, the replacement assignee is not a registered
    /// developer, the ticket does not exist, or persistence fails.
    pub async fn edit_ticket(
        &self,
        ticket_id: TicketId,
        request: EditTicketRequest,
        actor: &Profile,
    ) -> TicketWorkflowResult<Ticket> {
        require_manager(actor)?;
        let mut ticket = self.load_ticket(ticket_id).await?;

        let mut changes =
            TicketChangeSet::new(request.title)?.with_description(request.description);
        if let Some(deadline) = request.deadline {
            changes = changes.with_deadline(deadline);
        }
        if let Some(assignee) = request.assigned_to {
            self.ensure_developer(assignee).await?;
            changes = changes.with_assignee(assignee);
        }

        ticket.apply_edit(changes, &*self.clock);
        self.tickets.update(&ticket).await?;
        tracing::debug!(ticket_id = %ticket_id, "ticket edited and reopened");
        Ok(ticket)
    }

    /// Lists tickets scoped to the acting role: managers see tickets they
    /// raised, developers see tickets assigned to them.
    ///
    /// # Errors
    ///
    /// Returns [`TicketWorkflowError`] when persistence fails.
    pub async fn list_tickets(&self, actor: &Profile) -> TicketWorkflowResult<Vec<Ticket>> {
        let tickets = match actor.role() {
            Role::Manager => self.tickets.list_by_raised_by(actor.id()).await?,
            Role::Developer => self.tickets.list_by_assignee(actor.id()).await?,
        };
        Ok(tickets)
    }

    /// Retrieves a ticket by identifier.
    ///
    /// Returns `Ok(None)` when the ticket does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TicketWorkflowError`] when persistence fails.
    pub async fn find_ticket(&self, ticket_id: TicketId) -> TicketWorkflowResult<Option<Ticket>> {
        Ok(self.tickets.find_by_id(ticket_id).await?)
    }

    async fn load_ticket(&self, ticket_id: TicketId) -> TicketWorkflowResult<Ticket> {
        self.tickets
            .find_by_id(ticket_id)
            .await?
            .ok_or(TicketWorkflowError::TicketNotFound(ticket_id))
    }

    /// Loads a suggestion and checks it belongs to the given ticket.
    async fn load_suggestion(
        &self,
        ticket: &Ticket,
        suggestion_id: CommentId,
    ) -> TicketWorkflowResult<Comment> {
        let comment = self
            .comments
            .find_by_id(suggestion_id)
            .await?
            .ok_or(TicketWorkflowError::SuggestionNotFound(suggestion_id))?;
        if comment.ticket_id() != ticket.id() {
            return Err(TicketWorkflowError::SuggestionNotFound(suggestion_id));
        }
        Ok(comment)
    }

    /// Resolves an author id to a display label, falling back to the raw id.
    async fn author_label(&self, author: ProfileId) -> TicketWorkflowResult<String> {
        let label = self
            .profiles
            .find_by_id(author)
            .await?
            .map_or_else(|| author.to_string(), |profile| {
                profile.name().as_str().to_owned()
            });
        Ok(label)
    }

    /// Checks that the profile exists and holds the developer role.
    async fn ensure_developer(&self, assignee: ProfileId) -> TicketWorkflowResult<()> {
        let profile = self
            .profiles
            .find_by_id(assignee)
            .await?
            .ok_or(TicketWorkflowError::AssigneeNotDeveloper(assignee))?;
        if profile.role() == Role::Developer {
            return Ok(());
        }
        Err(TicketWorkflowError::AssigneeNotDeveloper(assignee))
    }
}
