//! Shared world state for suggestion review BDD scenarios.
#![expect(
    clippy::expect_used,
    reason = "world construction uses expect for assertion clarity"
)]

use std::sync::Arc;

use mockable::DefaultClock;
use niemeyer::account::{
    adapters::memory::InMemoryProfileRepository,
    domain::{DisplayName, Profile, ProfileId, Role},
};
use niemeyer::ticket::{
    adapters::memory::{InMemoryCommentRepository, InMemoryTicketRepository},
    domain::{CommentId, Ticket},
    services::{SuggestionEdit, TicketWorkflowService},
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestWorkflow = TicketWorkflowService<
    InMemoryTicketRepository,
    InMemoryCommentRepository,
    InMemoryProfileRepository,
    DefaultClock,
>;

/// Scenario world for suggestion review behaviour tests.
pub struct SuggestionReviewWorld {
    pub service: TestWorkflow,
    pub profiles: Arc<InMemoryProfileRepository>,
    pub manager: Profile,
    pub developer: Profile,
    pub ticket: Option<Ticket>,
    pub suggestion_id: Option<CommentId>,
    pub edit: Option<SuggestionEdit>,
}

impl SuggestionReviewWorld {
    /// Creates a world with empty pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        let profiles = Arc::new(InMemoryProfileRepository::new());
        let service = TicketWorkflowService::new(
            Arc::new(InMemoryTicketRepository::new()),
            Arc::new(InMemoryCommentRepository::new()),
            Arc::clone(&profiles),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            profiles,
            manager: Profile::new(
                ProfileId::new(),
                DisplayName::new("Morgan Hale").expect("valid display name"),
                Role::Manager,
            ),
            developer: Profile::new(
                ProfileId::new(),
                DisplayName::new("Dana Flores").expect("valid display name"),
                Role::Developer,
            ),
            ticket: None,
            suggestion_id: None,
            edit: None,
        }
    }
}

impl Default for SuggestionReviewWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> SuggestionReviewWorld {
    SuggestionReviewWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
