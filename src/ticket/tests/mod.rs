//! Unit and service tests for the ticket workflow.


mod partial_failure_tests;
