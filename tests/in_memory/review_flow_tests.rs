//! In-memory integration tests for the suggestion review workflow.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for assertion clarity"
)]

use niemeyer::account::domain::Role;
use niemeyer::ticket::{
    domain::TicketStatus,
    services::{CreateTicketRequest, EditTicketRequest},
};
use rstest::rstest;

use super::helpers::{Stack, register, stack};

/// Registers a manager and developer and raises one ticket between them.
async fn review_setup(services: &Stack) -> ReviewSetup {
    let manager = register(services, "morgan@example.com", "Morgan Hale", Role::Manager).await;
    let developer = register(services, "dana@example.com", "Dana Flores", Role::Developer).await;
    let ticket = services
        .workflow
        .create_ticket(
            CreateTicketRequest::new("Fix login flow", developer.id()),
            &manager,
        )
        .await
        .expect("ticket creation should succeed");
    ReviewSetup {
        manager,
        developer,
        ticket,
    }
}

struct ReviewSetup {
    manager: niemeyer::account::domain::Profile,
    developer: niemeyer::account::domain::Profile,
    ticket: niemeyer::ticket::domain::Ticket,
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn denied_suggestion_reopens_the_ticket_and_leaves_no_pending_review() {
    let services = stack();
    let setup = review_setup(&services).await;

    let comment = services
        .workflow
        .submit_suggestion(setup.ticket.id(), &setup.developer, "fix X")
        .await
        .expect("suggestion should be accepted");

    let under_review = services
        .workflow
        .find_ticket(setup.ticket.id())
        .await
        .expect("lookup should succeed")
        .expect("ticket exists");
    assert_eq!(under_review.status(), TicketStatus::NeedsReview);

    let pending = services
        .workflow
        .list_suggestions(setup.ticket.id(), &setup.manager)
        .await
        .expect("listing should succeed");
    assert_eq!(pending.len(), 1);
    let view = pending.first().expect("one pending suggestion");
    assert_eq!(view.content, "fix X");
    assert_eq!(view.author, "Dana Flores");

    let denied = services
        .workflow
        .deny_suggestion(setup.ticket.id(), comment.id(), &setup.manager)
        .await
        .expect("denial should succeed");
    assert_eq!(denied.status(), TicketStatus::Open);

    let after = services
        .workflow
        .list_suggestions(setup.ticket.id(), &setup.manager)
        .await
        .expect("listing should succeed");
    assert!(after.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn accepted_suggestion_is_finalised_by_the_manager_edit() {
    let services = stack();
    let setup = review_setup(&services).await;

    let comment = services
        .workflow
        .submit_suggestion(
            setup.ticket.id(),
            &setup.developer,
            "Use the new session API",
        )
        .await
        .expect("suggestion should be accepted");

    let edit = services
        .workflow
        .accept_suggestion(setup.ticket.id(), comment.id(), &setup.manager)
        .await
        .expect("acceptance should succeed");
    assert_eq!(edit.content.as_str(), "Use the new session API");

    // Accepting alone leaves the ticket under review.
    let still_reviewing = services
        .workflow
        .find_ticket(setup.ticket.id())
        .await
        .expect("lookup should succeed")
        .expect("ticket exists");
    assert_eq!(still_reviewing.status(), TicketStatus::NeedsReview);

    let edited = services
        .workflow
        .edit_ticket(
            edit.ticket_id,
            EditTicketRequest::new("Fix login flow with session API")
                .with_description(edit.content.as_str())
                .with_assignee(setup.developer.id()),
            &setup.manager,
        )
        .await
        .expect("edit should succeed");

    assert_eq!(edited.status(), TicketStatus::Open);
    assert_eq!(edited.title().as_str(), "Fix login flow with session API");
}
