// tests/support/mocks/security.rs
use article_desk::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::TokenManager,
};
use article_desk::domain::user::UserId;
use async_trait::async_trait;
use chrono::Duration;

/// Authenticates as user 1.
pub const TEST_TOKEN: &str = "test-token";
/// Authenticates as user 2.
pub const OTHER_TOKEN: &str = "other-token";

#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

fn user(id: i64, username: &str) -> AuthenticatedUser {
    let now = super::time::fixed_now();
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        username: username.into(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, _subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        Err(ApplicationError::infrastructure("not implemented"))
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            TEST_TOKEN => Ok(user(1, "reviewer")),
            OTHER_TOKEN => Ok(user(2, "author")),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}
