//! `PostgreSQL` repository implementation for suggestion comment storage.

use super::{
    helpers::{TicketPgPool, run_blocking},
    models::{CommentRow, NewCommentRow},
    schema::comments,
};
use crate::account::domain::ProfileId;
use crate::ticket::{
    domain::{
        Comment, CommentId, PersistedCommentData, SuggestionContent, SuggestionResolution,
        TicketId,
    },
    ports::{CommentRepository, CommentRepositoryError, CommentRepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed suggestion comment repository.
#[derive(Debug, Clone)]
pub struct PostgresCommentRepository {
    pool: TicketPgPool,
}

impl PostgresCommentRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TicketPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn store(&self, comment: &Comment) -> CommentRepositoryResult<()> {
        let comment_id = comment.id();
        let new_row = to_new_row(comment);

        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(comments::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        CommentRepositoryError::DuplicateComment(comment_id)
                    }
                    _ => CommentRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, comment: &Comment) -> CommentRepositoryResult<()> {
        let comment_id = comment.id();
        let resolution = comment.resolution().as_str().to_owned();

        run_blocking(&self.pool, move |connection| {
            let affected = diesel::update(
                comments::table.filter(comments::id.eq(comment_id.into_inner())),
            )
            .set(comments::resolution.eq(resolution))
            .execute(connection)
            .map_err(CommentRepositoryError::persistence)?;

            if affected == 0 {
                return Err(CommentRepositoryError::NotFound(comment_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: CommentId) -> CommentRepositoryResult<Option<Comment>> {
        run_blocking(&self.pool, move |connection| {
            let row = comments::table
                .filter(comments::id.eq(id.into_inner()))
                .select(CommentRow::as_select())
                .first::<CommentRow>(connection)
                .optional()
                .map_err(CommentRepositoryError::persistence)?;
            row.map(row_to_comment).transpose()
        })
        .await
    }

    async fn list_pending_for_ticket(
        &self,
        ticket_id: TicketId,
    ) -> CommentRepositoryResult<Vec<Comment>> {
        run_blocking(&self.pool, move |connection| {
            let rows = comments::table
                .filter(comments::ticket_id.eq(ticket_id.into_inner()))
                .filter(comments::resolution.eq(SuggestionResolution::Pending.as_str()))
                .order(comments::created_at.asc())
                .select(CommentRow::as_select())
                .load::<CommentRow>(connection)
                .map_err(CommentRepositoryError::persistence)?;
            rows.into_iter().map(row_to_comment).collect()
        })
        .await
    }

    async fn delete(&self, id: CommentId) -> CommentRepositoryResult<()> {
        run_blocking(&self.pool, move |connection| {
            let affected =
                diesel::delete(comments::table.filter(comments::id.eq(id.into_inner())))
                    .execute(connection)
                    .map_err(CommentRepositoryError::persistence)?;
            if affected == 0 {
                return Err(CommentRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_new_row(comment: &Comment) -> NewCommentRow {
    NewCommentRow {
        id: comment.id().into_inner(),
        ticket_id: comment.ticket_id().into_inner(),
        author_id: comment.author().into_inner(),
        content: comment.content().as_str().to_owned(),
        resolution: comment.resolution().as_str().to_owned(),
        created_at: comment.created_at(),
    }
}

fn row_to_comment(row: CommentRow) -> CommentRepositoryResult<Comment> {
    let CommentRow {
        id,
        ticket_id,
        author_id,
        content: persisted_content,
        resolution: persisted_resolution,
        created_at,
    } = row;

    let content =
        SuggestionContent::new(persisted_content).map_err(CommentRepositoryError::persistence)?;
    let resolution = SuggestionResolution::try_from(persisted_resolution.as_str())
        .map_err(CommentRepositoryError::persistence)?;

    let data = PersistedCommentData {
        id: CommentId::from_uuid(id),
        ticket_id: TicketId::from_uuid(ticket_id),
        author: ProfileId::from_uuid(author_id),
        content,
        resolution,
        created_at,
    };
    Ok(Comment::from_persisted(data))
}
