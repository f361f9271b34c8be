//! Shared helpers for in-memory integration tests.
#![expect(
    clippy::expect_used,
    reason = "test helpers use expect for assertion clarity"
)]

use std::sync::Arc;

use mockable::DefaultClock;
use niemeyer::account::{
    adapters::memory::{InMemoryAuthProvider, InMemoryProfileRepository},
    domain::{Profile, Role},
    services::{AccountService, RegisterRequest},
};
use niemeyer::ticket::{
    adapters::memory::{InMemoryCommentRepository, InMemoryTicketRepository},
    services::TicketWorkflowService,
};

/// Account service wired to in-memory adapters.
pub type Accounts = AccountService<InMemoryProfileRepository, InMemoryAuthProvider>;

/// Workflow service wired to in-memory adapters.
pub type Workflow = TicketWorkflowService<
    InMemoryTicketRepository,
    InMemoryCommentRepository,
    InMemoryProfileRepository,
    DefaultClock,
>;

/// Both services sharing one profile store, mirroring a deployment where
/// the workflow authorizes against the same directory sign-up writes to.
pub struct Stack {
    /// Account registration and session service.
    pub accounts: Accounts,
    /// Ticket workflow service.
    pub workflow: Workflow,
}

/// Builds a fresh service stack over empty in-memory stores.
pub fn stack() -> Stack {
    let profiles = Arc::new(InMemoryProfileRepository::new());
    let accounts = AccountService::new(
        Arc::clone(&profiles),
        Arc::new(InMemoryAuthProvider::new()),
    );
    let workflow = TicketWorkflowService::new(
        Arc::new(InMemoryTicketRepository::new()),
        Arc::new(InMemoryCommentRepository::new()),
        profiles,
        Arc::new(DefaultClock),
    );
    Stack { accounts, workflow }
}

/// Registers a profile through the account service.
pub async fn register(stack: &Stack, email: &str, name: &str, role: Role) -> Profile {
    stack
        .accounts
        .register(RegisterRequest::new(
            email,
            "correct horse battery",
            name,
            role,
        ))
        .await
        .expect("registration should succeed")
}
