//! Port for hotel and room reads.

use async_trait::async_trait;

use crate::domain::{Hotel, HotelId, HotelWithRooms};

use super::define_port_error;

define_port_error! {
    /// Errors raised by hotel repository adapters.
    pub enum HotelRepositoryError for "hotel repository";
}

/// Read access to hotels and their rooms.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// All hotels, in storage (insertion) order, without rooms.
    async fn list_hotels(&self) -> Result<Vec<Hotel>, HotelRepositoryError>;

    /// A single hotel with its complete room set, or `None` if no hotel has
    /// this id. Implementations must read the hotel and its rooms from one
    /// consistent snapshot.
    async fn find_with_rooms(
        &self,
        hotel_id: HotelId,
    ) -> Result<Option<HotelWithRooms>, HotelRepositoryError>;
}

/// Fixture repository with no hotels.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureHotelRepository;

#[async_trait]
impl HotelRepository for FixtureHotelRepository {
    async fn list_hotels(&self) -> Result<Vec<Hotel>, HotelRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_with_rooms(
        &self,
        _hotel_id: HotelId,
    ) -> Result<Option<HotelWithRooms>, HotelRepositoryError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_repository_is_empty() {
        let repo = FixtureHotelRepository;
        let hotel_id = HotelId::new(1).expect("valid hotel id");

        assert!(repo.list_hotels().await.expect("list").is_empty());
        assert!(repo.find_with_rooms(hotel_id).await.expect("find").is_none());
    }
}
