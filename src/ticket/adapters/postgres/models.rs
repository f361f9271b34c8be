//! Diesel row models for ticket and comment persistence.

use super::schema::{comments, tickets};
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for ticket records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tickets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TicketRow {
    /// Ticket identifier.
    pub id: uuid::Uuid,
    /// Ticket title.
    pub title: String,
    /// Ticket description.
    pub description: String,
    /// Lifecycle status string.
    pub status: String,
    /// Optional due date.
    pub deadline: Option<NaiveDate>,
    /// Raising manager.
    pub raised_by: uuid::Uuid,
    /// Assigned developer, if any.
    pub assigned_to: Option<uuid::Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for ticket records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tickets)]
pub struct NewTicketRow {
    /// Ticket identifier.
    pub id: uuid::Uuid,
    /// Ticket title.
    pub title: String,
    /// Ticket description.
    pub description: String,
    /// Lifecycle status string.
    pub status: String,
    /// Optional due date.
    pub deadline: Option<NaiveDate>,
    /// Raising manager.
    pub raised_by: uuid::Uuid,
    /// Assigned developer, if any.
    pub assigned_to: Option<uuid::Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query result row for comment records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CommentRow {
    /// Comment identifier.
    pub id: uuid::Uuid,
    /// Owning ticket.
    pub ticket_id: uuid::Uuid,
    /// Suggesting developer.
    pub author_id: uuid::Uuid,
    /// Suggestion text.
    pub content: String,
    /// Review outcome string.
    pub resolution: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for comment records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comments)]
pub struct NewCommentRow {
    /// Comment identifier.
    pub id: uuid::Uuid,
    /// Owning ticket.
    pub ticket_id: uuid::Uuid,
    /// Suggesting developer.
    pub author_id: uuid::Uuid,
    /// Suggestion text.
    pub content: String,
    /// Review outcome string.
    pub resolution: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
