//! Port for bearer session validation.
//!
//! Session tokens are issued at sign-in by the account subsystem. This port
//! only answers which user, if any, a presented token belongs to.

use async_trait::async_trait;

use crate::domain::UserId;

use super::define_port_error;

define_port_error! {
    /// Errors raised by session repository adapters.
    pub enum SessionRepositoryError for "session repository";
}

/// Resolves bearer tokens to users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Return the owner of `token`, or `None` when no session matches.
    async fn find_user_by_token(
        &self,
        token: &str,
    ) -> Result<Option<UserId>, SessionRepositoryError>;
}

/// Fixture repository that knows no sessions.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSessionRepository;

#[async_trait]
impl SessionRepository for FixtureSessionRepository {
    async fn find_user_by_token(
        &self,
        _token: &str,
    ) -> Result<Option<UserId>, SessionRepositoryError> {
        Ok(None)
    }
}
