//! Unit and service tests for account management.
