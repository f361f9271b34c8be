//! In-memory integration tests for registration and session flows.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for assertion clarity"
)]

use niemeyer::account::{
    domain::Role,
    ports::AuthProviderError,
    services::AccountServiceError,
};
use rstest::rstest;

use super::helpers::{register, stack};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn signup_sign_in_and_session_resolution_round_trip() {
    let services = stack();
    let registered = register(&services, "dana@example.com", "Dana Flores", Role::Developer).await;

    let session = services
        .accounts
        .sign_in("dana@example.com", "correct horse battery")
        .await
        .expect("sign-in should succeed");

    let current = services
        .accounts
        .current_profile(session.token())
        .await
        .expect("session resolution should succeed")
        .expect("profile exists");
    assert_eq!(current, registered);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_signup_is_rejected() {
    let services = stack();
    register(&services, "dana@example.com", "Dana Flores", Role::Developer).await;

    let duplicate = services
        .accounts
        .register(niemeyer::account::services::RegisterRequest::new(
            "dana@example.com",
            "another password",
            "Imposter",
            Role::Developer,
        ))
        .await;

    assert!(matches!(
        duplicate,
        Err(AccountServiceError::Auth(
            AuthProviderError::EmailAlreadyRegistered(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn developer_directory_backs_the_assignment_dropdown() {
    let services = stack();
    let manager = register(&services, "morgan@example.com", "Morgan Hale", Role::Manager).await;
    let riley = register(&services, "riley@example.com", "Riley Chen", Role::Developer).await;
    let dana = register(&services, "dana@example.com", "Dana Flores", Role::Developer).await;

    let developers = services
        .accounts
        .list_developers(&manager)
        .await
        .expect("directory listing should succeed");

    assert_eq!(developers, vec![dana.clone(), riley]);

    let denied = services.accounts.list_developers(&dana).await;
    assert!(matches!(
        denied,
        Err(AccountServiceError::ManagerRequired(_))
    ));
}
