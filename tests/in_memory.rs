//! In-memory integration tests for the ticket tracker.
//!
//! Tests are organized into modules by functionality:
//! - `account_flow_tests`: Registration, sessions, developer directory
//! - `ticket_flow_tests`: Lifecycle transitions and role-scoped listings
//! - `review_flow_tests`: Suggestion submission, review, and resolution

mod in_memory {
    pub mod helpers;

    mod account_flow_tests;
    mod review_flow_tests;
    mod ticket_flow_tests;
}
