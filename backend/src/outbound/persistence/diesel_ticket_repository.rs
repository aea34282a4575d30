//! PostgreSQL-backed `TicketRepository` implementation.
//!
//! Resolves `user → enrollment → ticket (+ type)` in one joined query. When an
//! enrollment holds several tickets the highest id wins.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{TicketRepository, TicketRepositoryError};
use crate::domain::{Ticket, TicketStatus, TicketType, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{TicketRow, TicketTypeFlagsRow};
use super::pool::{DbPool, PoolError};
use super::schema::{enrollments, ticket_types, tickets};

/// Diesel-backed implementation of the ticket lookup port.
#[derive(Clone)]
pub struct DieselTicketRepository {
    pool: DbPool,
}

impl DieselTicketRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TicketRepositoryError {
    map_basic_pool_error(error, TicketRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> TicketRepositoryError {
    map_basic_diesel_error(
        error,
        TicketRepositoryError::query,
        TicketRepositoryError::connection,
    )
}

/// Decode a stored status.
///
/// Values outside the known set are treated as not paid so the gate fails
/// closed.
fn decode_status(ticket_id: i32, raw: &str) -> TicketStatus {
    raw.parse().unwrap_or_else(|err| {
        warn!(ticket_id, error = %err, "treating unknown ticket status as cancelled");
        TicketStatus::Cancelled
    })
}

fn row_to_ticket(row: TicketRow, flags: TicketTypeFlagsRow) -> Ticket {
    Ticket {
        id: row.id,
        status: decode_status(row.id, &row.status),
        ticket_type: TicketType {
            includes_hotel: flags.includes_hotel,
            is_remote: flags.is_remote,
        },
    }
}

#[async_trait]
impl TicketRepository for DieselTicketRepository {
    async fn find_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<Ticket>, TicketRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = tickets::table
            .inner_join(enrollments::table)
            .inner_join(ticket_types::table)
            .filter(enrollments::user_id.eq(user_id.as_i32()))
            .order(tickets::id.desc())
            .select((TicketRow::as_select(), TicketTypeFlagsRow::as_select()))
            .first::<(TicketRow, TicketTypeFlagsRow)>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(|(ticket, flags)| row_to_ticket(ticket, flags)))
    }
}
