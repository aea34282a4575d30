//! Hotel access domain service.
//!
//! Implements [`HotelsQuery`] by running the eligibility gate on the
//! requester's ticket before touching hotel data. The check is identical for
//! listing and detail reads because it depends only on the requester.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    HotelRepository, HotelRepositoryError, HotelsQuery, TicketRepository, TicketRepositoryError,
};
use crate::domain::{
    Error, Hotel, HotelEligibility, HotelId, HotelWithRooms, NOT_FOUND_MESSAGE, UserId,
};

fn map_ticket_error(error: TicketRepositoryError) -> Error {
    match error {
        TicketRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("ticket repository unavailable: {message}"))
        }
        TicketRepositoryError::Query { message } => {
            Error::internal(format!("ticket repository error: {message}"))
        }
    }
}

fn map_hotel_error(error: HotelRepositoryError) -> Error {
    match error {
        HotelRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("hotel repository unavailable: {message}"))
        }
        HotelRepositoryError::Query { message } => {
            Error::internal(format!("hotel repository error: {message}"))
        }
    }
}

/// Hotel listing and detail service.
#[derive(Clone)]
pub struct HotelAccessService<T, H> {
    ticket_repo: Arc<T>,
    hotel_repo: Arc<H>,
}

impl<T, H> HotelAccessService<T, H> {
    /// Create a new service over the ticket and hotel repositories.
    pub fn new(ticket_repo: Arc<T>, hotel_repo: Arc<H>) -> Self {
        Self {
            ticket_repo,
            hotel_repo,
        }
    }
}

impl<T, H> HotelAccessService<T, H>
where
    T: TicketRepository,
    H: HotelRepository,
{
    /// Look up the requester's ticket and apply the gate.
    ///
    /// Evaluated on every call; verdicts are never cached.
    async fn ensure_eligible(&self, user_id: UserId) -> Result<(), Error> {
        let ticket = self
            .ticket_repo
            .find_by_user_id(user_id)
            .await
            .map_err(map_ticket_error)?;

        let verdict = HotelEligibility::evaluate(ticket.as_ref());
        if verdict != HotelEligibility::Allowed {
            debug!(%user_id, ?verdict, "hotel access denied");
        }
        verdict.into_result()
    }
}

#[async_trait]
impl<T, H> HotelsQuery for HotelAccessService<T, H>
where
    T: TicketRepository,
    H: HotelRepository,
{
    async fn list_hotels(&self, user_id: UserId) -> Result<Vec<Hotel>, Error> {
        self.ensure_eligible(user_id).await?;

        self.hotel_repo.list_hotels().await.map_err(map_hotel_error)
    }

    async fn hotel_with_rooms(
        &self,
        user_id: UserId,
        hotel_id: HotelId,
    ) -> Result<HotelWithRooms, Error> {
        self.ensure_eligible(user_id).await?;

        self.hotel_repo
            .find_with_rooms(hotel_id)
            .await
            .map_err(map_hotel_error)?
            .ok_or_else(|| {
                debug!(%hotel_id, "hotel not found");
                Error::not_found(NOT_FOUND_MESSAGE)
            })
    }
}

#[cfg(test)]
#[path = "hotel_access_service_tests.rs"]
mod tests;
