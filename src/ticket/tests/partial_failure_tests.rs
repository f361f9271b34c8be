//! Tests for the documented partial-failure semantics of multi-record
//! writes.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for assertion clarity"
)]

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::rstest;

use super::fixtures::profile;
use crate::account::{
    adapters::memory::InMemoryProfileRepository,
    domain::Role,
    ports::ProfileRepository,
};
use crate::ticket::{
    adapters::memory::{InMemoryCommentRepository, InMemoryTicketRepository},
    domain::{Comment, SuggestionContent, Ticket, TicketDraft, TicketStatus},
    ports::{
        CommentRepository, CommentRepositoryError, TicketRepository, TicketRepositoryError,
        comments::MockCommentRepository, tickets::MockTicketRepository,
    },
    services::{TicketWorkflowError, TicketWorkflowService},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn submit_suggestion_backs_out_the_comment_when_the_status_update_fails() {
    let clock = DefaultClock;
    let developer = profile("Dana Flores", Role::Developer);
    let draft =
        TicketDraft::new("Fix login flow", developer.id()).expect("valid draft");
    let ticket = Ticket::new(draft, profile("Morgan Hale", Role::Manager).id(), &clock);
    let ticket_id = ticket.id();

    let mut tickets = MockTicketRepository::new();
    tickets
        .expect_find_by_id()
        .returning(move |_| Ok(Some(ticket.clone())));
    tickets.expect_update().returning(|_| {
        Err(TicketRepositoryError::persistence(std::io::Error::other(
            "status update failed",
        )))
    });

    let comments = Arc::new(InMemoryCommentRepository::new());
    let service = TicketWorkflowService::new(
        Arc::new(tickets),
        Arc::clone(&comments),
        Arc::new(InMemoryProfileRepository::new()),
        Arc::new(DefaultClock),
    );

    let result = service
        .submit_suggestion(ticket_id, &developer, "Use the new session API")
        .await;

    assert!(matches!(
        result,
        Err(TicketWorkflowError::Tickets(
            TicketRepositoryError::Persistence(_)
        ))
    ));

    // The stored comment was backed out, so nothing is left pending review.
    let pending = comments
        .list_pending_for_ticket(ticket_id)
        .await
        .expect("listing should succeed");
    assert!(pending.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deny_suggestion_keeps_the_reopen_when_recording_the_denial_fails() {
    let clock = DefaultClock;
    let manager = profile("Morgan Hale", Role::Manager);
    let developer = profile("Dana Flores", Role::Developer);

    let draft =
        TicketDraft::new("Fix login flow", developer.id()).expect("valid draft");
    let mut ticket = Ticket::new(draft, manager.id(), &clock);
    ticket.request_review(&clock).expect("move into review");
    let ticket_id = ticket.id();

    let tickets = Arc::new(InMemoryTicketRepository::new());
    tickets.store(&ticket).await.expect("store ticket");

    let comment = Comment::new(
        ticket_id,
        developer.id(),
        SuggestionContent::new("fix X").expect("valid content"),
        &clock,
    );
    let comment_id = comment.id();

    let mut comments = MockCommentRepository::new();
    comments
        .expect_find_by_id()
        .returning(move |_| Ok(Some(comment.clone())));
    comments.expect_update().returning(|_| {
        Err(CommentRepositoryError::persistence(std::io::Error::other(
            "resolution write failed",
        )))
    });

    let profiles = Arc::new(InMemoryProfileRepository::new());
    profiles.store(&manager).await.expect("store manager");
    let service = TicketWorkflowService::new(
        Arc::clone(&tickets),
        Arc::new(comments),
        Arc::clone(&profiles),
        Arc::new(DefaultClock),
    );

    let result = service
        .deny_suggestion(ticket_id, comment_id, &manager)
        .await;

    assert!(matches!(
        result,
        Err(TicketWorkflowError::SuggestionResolutionIncomplete {
            ticket_id: failed_ticket,
            suggestion_id: failed_suggestion,
            ..
        }) if failed_ticket == ticket_id && failed_suggestion == comment_id
    ));

    // The reopen is deliberately not rolled back; callers detect the
    // divergence from the error and a re-read.
    let stored = tickets
        .find_by_id(ticket_id)
        .await
        .expect("lookup should succeed")
        .expect("ticket exists");
    assert_eq!(stored.status(), TicketStatus::Open);
}
