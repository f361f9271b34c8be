//! In-memory suggestion comment repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::ticket::{
    domain::{Comment, CommentId, TicketId},
    ports::{CommentRepository, CommentRepositoryError, CommentRepositoryResult},
};

/// Thread-safe in-memory comment repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCommentRepository {
    state: Arc<RwLock<InMemoryCommentState>>,
}

#[derive(Debug, Default)]
struct InMemoryCommentState {
    comments: HashMap<CommentId, StoredComment>,
    next_sequence: u64,
}

/// Comment plus its insertion sequence, used as the creation-time tie-break.
#[derive(Debug, Clone)]
struct StoredComment {
    sequence: u64,
    comment: Comment,
}

impl InMemoryCommentRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn store(&self, comment: &Comment) -> CommentRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            CommentRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.comments.contains_key(&comment.id()) {
            return Err(CommentRepositoryError::DuplicateComment(comment.id()));
        }
        let sequence = state.next_sequence;
        state.next_sequence += 1;
        state.comments.insert(
            comment.id(),
            StoredComment {
                sequence,
                comment: comment.clone(),
            },
        );
        Ok(())
    }

    async fn update(&self, comment: &Comment) -> CommentRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            CommentRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let stored = state
            .comments
            .get_mut(&comment.id())
            .ok_or(CommentRepositoryError::NotFound(comment.id()))?;
        stored.comment = comment.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: CommentId) -> CommentRepositoryResult<Option<Comment>> {
        let state = self.state.read().map_err(|err| {
            CommentRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.comments.get(&id).map(|stored| stored.comment.clone()))
    }

    async fn list_pending_for_ticket(
        &self,
        ticket_id: TicketId,
    ) -> CommentRepositoryResult<Vec<Comment>> {
        let state = self.state.read().map_err(|err| {
            CommentRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut pending: Vec<&StoredComment> = state
            .comments
            .values()
            .filter(|stored| {
                stored.comment.ticket_id() == ticket_id && stored.comment.is_pending()
            })
            .collect();
        pending.sort_by_key(|stored| (stored.comment.created_at(), stored.sequence));
        Ok(pending
            .into_iter()
            .map(|stored| stored.comment.clone())
            .collect())
    }

    async fn delete(&self, id: CommentId) -> CommentRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            CommentRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state
            .comments
            .remove(&id)
            .map(|_| ())
            .ok_or(CommentRepositoryError::NotFound(id))
    }
}
