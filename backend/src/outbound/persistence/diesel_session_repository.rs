//! PostgreSQL-backed `SessionRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::UserId;
use crate::domain::ports::{SessionRepository, SessionRepositoryError};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::pool::{DbPool, PoolError};
use super::schema::sessions;

/// Diesel-backed bearer token lookup.
#[derive(Clone)]
pub struct DieselSessionRepository {
    pool: DbPool,
}

impl DieselSessionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> SessionRepositoryError {
    map_basic_pool_error(error, SessionRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> SessionRepositoryError {
    map_basic_diesel_error(
        error,
        SessionRepositoryError::query,
        SessionRepositoryError::connection,
    )
}

#[async_trait]
impl SessionRepository for DieselSessionRepository {
    async fn find_user_by_token(
        &self,
        token: &str,
    ) -> Result<Option<UserId>, SessionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let owner: Option<i32> = sessions::table
            .filter(sessions::token.eq(token))
            .select(sessions::user_id)
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(owner.and_then(|raw| match UserId::new(raw) {
            Ok(id) => Some(id),
            Err(err) => {
                warn!(error = %err, "session row references an invalid user id");
                None
            }
        }))
    }
}
