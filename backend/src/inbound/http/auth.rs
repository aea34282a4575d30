//! Bearer session authentication.
//!
//! [`AuthenticatedUser`] is an extractor: handlers that take it as an argument
//! only run once the `Authorization: Bearer <token>` header resolves to a
//! stored session. The token itself never reaches the domain.

use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;
use tracing::debug;

use crate::domain::ports::SessionRepositoryError;
use crate::domain::{Error, UserId};

use super::state::HttpState;

const BEARER_PREFIX: &str = "Bearer ";

/// The user owning the request's bearer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser(pub UserId);

impl AuthenticatedUser {
    /// Identifier of the authenticated user.
    #[must_use]
    pub fn user_id(self) -> UserId {
        self.0
    }
}

/// Pull the token out of an `Authorization` header value.
///
/// Returns `None` for a non-`Bearer` scheme or a blank token.
fn bearer_token(header: &str) -> Option<&str> {
    let token = header.strip_prefix(BEARER_PREFIX)?.trim();
    (!token.is_empty()).then_some(token)
}

fn map_session_error(error: SessionRepositoryError) -> Error {
    match error {
        SessionRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("session repository unavailable: {message}"))
        }
        SessionRepositoryError::Query { message } => {
            Error::internal(format!("session repository error: {message}"))
        }
    }
}

fn unauthorized() -> Error {
    Error::unauthorized("a valid bearer session is required")
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token)
            .map(str::to_owned);
        let state = req.app_data::<web::Data<HttpState>>().cloned();

        Box::pin(async move {
            let Some(token) = token else {
                debug!("request without bearer token");
                return Err(unauthorized());
            };
            let state =
                state.ok_or_else(|| Error::internal("HTTP state is not configured"))?;

            let user_id = state
                .sessions
                .find_user_by_token(&token)
                .await
                .map_err(map_session_error)?;
            match user_id {
                Some(user_id) => Ok(Self(user_id)),
                None => {
                    debug!("bearer token matches no session");
                    Err(unauthorized())
                }
            }
        })
    }
}
