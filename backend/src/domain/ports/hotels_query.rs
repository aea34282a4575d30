//! Driving port for hotel reads gated by ticket eligibility.
//!
//! HTTP handlers depend on this trait only; it is implemented by
//! [`crate::domain::HotelAccessService`].

use async_trait::async_trait;

use crate::domain::{Error, Hotel, HotelId, HotelWithRooms, UserId};

/// Domain use-case port for listing and inspecting hotels.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelsQuery: Send + Sync {
    /// List every hotel, without rooms, for an eligible user.
    ///
    /// Fails with `payment_required` for unpaid tickets and `not_found` when
    /// the user has no ticket or the ticket excludes lodging.
    async fn list_hotels(&self, user_id: UserId) -> Result<Vec<Hotel>, Error>;

    /// Fetch one hotel with its rooms for an eligible user.
    ///
    /// Applies the same eligibility failures as [`HotelsQuery::list_hotels`]
    /// and fails with `not_found` when the hotel does not exist.
    async fn hotel_with_rooms(
        &self,
        user_id: UserId,
        hotel_id: HotelId,
    ) -> Result<HotelWithRooms, Error>;
}
