//! PostgreSQL-backed `HotelRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::AsyncConnection as _;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt as _;

use crate::domain::ports::{HotelRepository, HotelRepositoryError};
use crate::domain::{Hotel, HotelId, HotelWithRooms, Room};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{HotelRow, RoomRow};
use super::pool::{DbPool, PoolError};
use super::schema::{hotels, rooms};

/// Diesel-backed implementation of the hotel read port.
#[derive(Clone)]
pub struct DieselHotelRepository {
    pool: DbPool,
}

impl DieselHotelRepository {
    /// Create a new repository with the given connection pool.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/hotels")).await?;
    /// let repo = DieselHotelRepository::new(pool);
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> HotelRepositoryError {
    map_basic_pool_error(error, HotelRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> HotelRepositoryError {
    map_basic_diesel_error(
        error,
        HotelRepositoryError::query,
        HotelRepositoryError::connection,
    )
}

fn hotel_id(raw: i32) -> Result<HotelId, HotelRepositoryError> {
    HotelId::new(raw).map_err(|err| HotelRepositoryError::query(format!("hotel {raw}: {err}")))
}

fn row_to_hotel(row: HotelRow) -> Result<Hotel, HotelRepositoryError> {
    Ok(Hotel {
        id: hotel_id(row.id)?,
        name: row.name,
        image: row.image,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

fn row_to_room(row: RoomRow, owner: HotelId) -> Room {
    Room {
        id: row.id,
        name: row.name,
        capacity: row.capacity,
        hotel_id: owner,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

#[async_trait]
impl HotelRepository for DieselHotelRepository {
    async fn list_hotels(&self) -> Result<Vec<Hotel>, HotelRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<HotelRow> = hotels::table
            .select(HotelRow::as_select())
            .order_by(hotels::id)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_hotel).collect()
    }

    async fn find_with_rooms(
        &self,
        hotel_id: HotelId,
    ) -> Result<Option<HotelWithRooms>, HotelRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id = hotel_id.as_i32();

        // Hotel row and rooms come from one snapshot.
        let found = conn
            .transaction(|conn| {
                async move {
                    let hotel: Option<HotelRow> = hotels::table
                        .find(id)
                        .select(HotelRow::as_select())
                        .first(conn)
                        .await
                        .optional()?;
                    let Some(hotel) = hotel else {
                        return Ok(None);
                    };
                    let rooms: Vec<RoomRow> = rooms::table
                        .filter(rooms::hotel_id.eq(id))
                        .select(RoomRow::as_select())
                        .order_by(rooms::id)
                        .load(conn)
                        .await?;
                    Ok(Some((hotel, rooms)))
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        let Some((hotel_row, room_rows)) = found else {
            return Ok(None);
        };
        let hotel = row_to_hotel(hotel_row)?;
        let rooms = room_rows
            .into_iter()
            .map(|row| row_to_room(row, hotel.id))
            .collect();
        Ok(Some(HotelWithRooms { hotel, rooms }))
    }
}
