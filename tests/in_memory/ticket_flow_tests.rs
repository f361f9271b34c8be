//! In-memory integration tests for the ticket lifecycle.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for assertion clarity"
)]

use niemeyer::account::domain::Role;
use niemeyer::ticket::{
    domain::{Ticket, TicketStatus},
    services::{AccessError, CreateTicketRequest, TicketWorkflowError},
};
use rstest::rstest;

use super::helpers::{register, stack};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assigned_developer_accepts_and_finishes_a_ticket() {
    let services = stack();
    let manager = register(&services, "morgan@example.com", "Morgan Hale", Role::Manager).await;
    let developer = register(&services, "dana@example.com", "Dana Flores", Role::Developer).await;

    let ticket = services
        .workflow
        .create_ticket(
            CreateTicketRequest::new("Fix login flow", developer.id()),
            &manager,
        )
        .await
        .expect("ticket creation should succeed");
    assert_eq!(ticket.status(), TicketStatus::Open);

    let accepted = services
        .workflow
        .accept_ticket(ticket.id(), &developer)
        .await
        .expect("accept should succeed");
    assert_eq!(accepted.status(), TicketStatus::InProgress);

    let finished = services
        .workflow
        .finish_ticket(ticket.id(), &developer)
        .await
        .expect("finish should succeed");
    assert_eq!(finished.status(), TicketStatus::Completed);
    assert!(finished.status().is_terminal());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn developers_cannot_raise_tickets() {
    let services = stack();
    register(&services, "morgan@example.com", "Morgan Hale", Role::Manager).await;
    let developer = register(&services, "dana@example.com", "Dana Flores", Role::Developer).await;

    let result = services
        .workflow
        .create_ticket(
            CreateTicketRequest::new("Self-assigned work", developer.id()),
            &developer,
        )
        .await;

    assert!(matches!(
        result,
        Err(TicketWorkflowError::Access(AccessError::ManagerRequired { .. }))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dashboards_are_scoped_to_the_acting_role() {
    let services = stack();
    let manager = register(&services, "morgan@example.com", "Morgan Hale", Role::Manager).await;
    let other_manager =
        register(&services, "jesse@example.com", "Jesse Park", Role::Manager).await;
    let dana = register(&services, "dana@example.com", "Dana Flores", Role::Developer).await;
    let riley = register(&services, "riley@example.com", "Riley Chen", Role::Developer).await;

    let first = services
        .workflow
        .create_ticket(CreateTicketRequest::new("Fix login flow", dana.id()), &manager)
        .await
        .expect("ticket creation should succeed");
    let second = services
        .workflow
        .create_ticket(
            CreateTicketRequest::new("Tune dashboard queries", riley.id()),
            &manager,
        )
        .await
        .expect("ticket creation should succeed");

    let manager_view = services
        .workflow
        .list_tickets(&manager)
        .await
        .expect("manager listing should succeed");
    assert_eq!(
        manager_view.iter().map(Ticket::id).collect::<Vec<_>>(),
        vec![first.id(), second.id()]
    );

    let empty_view = services
        .workflow
        .list_tickets(&other_manager)
        .await
        .expect("other manager listing should succeed");
    assert!(empty_view.is_empty());

    let dana_view = services
        .workflow
        .list_tickets(&dana)
        .await
        .expect("developer listing should succeed");
    assert_eq!(
        dana_view.iter().map(Ticket::id).collect::<Vec<_>>(),
        vec![first.id()]
    );
}
