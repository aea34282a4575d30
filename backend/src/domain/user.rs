//! Authenticated user identity.
//!
//! Users are owned by the account subsystem; this service only ever sees the
//! identifier resolved from a bearer session.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`UserId::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UserIdValidationError {
    /// Identifiers are database serial keys and start at one.
    #[error("user id must be a positive integer, got {0}")]
    NotPositive(i32),
}

/// Stable user identifier (relational serial key).
///
/// # Examples
/// ```
/// use hotels_backend::domain::UserId;
///
/// let id = UserId::new(7).expect("positive id");
/// assert_eq!(id.as_i32(), 7);
/// assert!(UserId::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct UserId(i32);

impl UserId {
    /// Validate and construct a [`UserId`].
    pub fn new(id: i32) -> Result<Self, UserIdValidationError> {
        if id <= 0 {
            return Err(UserIdValidationError::NotPositive(id));
        }
        Ok(Self(id))
    }

    /// Raw integer value as stored in the database.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<i32> for UserId {
    type Error = UserIdValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for i32 {
    fn from(value: UserId) -> Self {
        value.0
    }
}
