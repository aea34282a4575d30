//! Hotel HTTP handlers.
//!
//! ```text
//! GET /hotels
//! GET /hotels/{hotelId}
//! ```
//!
//! Both routes require a bearer session. Eligibility failures come back from
//! [`crate::domain::ports::HotelsQuery`] as domain errors and are mapped to
//! status codes by [`crate::inbound::http::error`].

use actix_web::{get, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, Hotel, HotelId, HotelIdValidationError, HotelWithRooms, Room};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::AuthenticatedUser;
use crate::inbound::http::state::HttpState;

/// Hotel as returned by the listing endpoint (no rooms).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Driven Resort")]
    pub name: String,
    #[schema(example = "https://images.example/driven-resort.png")]
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Hotel> for HotelResponse {
    fn from(value: Hotel) -> Self {
        Self {
            id: value.id.as_i32(),
            name: value.name,
            image: value.image,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Room nested in [`HotelWithRoomsResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: i32,
    #[schema(example = "101")]
    pub name: String,
    #[schema(example = 2)]
    pub capacity: i32,
    pub hotel_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        Self {
            id: value.id,
            name: value.name,
            capacity: value.capacity,
            hotel_id: value.hotel_id.as_i32(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Hotel detail with its rooms.
///
/// The room list is serialised under the capitalised `Rooms` key that
/// existing clients already consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HotelWithRoomsResponse {
    pub id: i32,
    pub name: String,
    pub image: String,
    #[serde(rename = "Rooms")]
    pub rooms: Vec<RoomResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<HotelWithRooms> for HotelWithRoomsResponse {
    fn from(value: HotelWithRooms) -> Self {
        let HotelWithRooms { hotel, rooms } = value;
        Self {
            id: hotel.id.as_i32(),
            name: hotel.name,
            image: hotel.image,
            rooms: rooms.into_iter().map(RoomResponse::from).collect(),
            created_at: hotel.created_at,
            updated_at: hotel.updated_at,
        }
    }
}

fn invalid_hotel_id(raw: &str, err: HotelIdValidationError) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": "hotelId",
        "value": raw,
        "code": "invalid_hotel_id",
    }))
}

fn parse_hotel_id(raw: &str) -> Result<HotelId, Error> {
    raw.parse::<HotelId>()
        .map_err(|err| invalid_hotel_id(raw, err))
}

/// List all hotels for a user whose ticket grants lodging.
#[utoipa::path(
    get,
    path = "/hotels",
    responses(
        (status = 200, description = "Hotels without rooms", body = [HotelResponse]),
        (status = 401, description = "Missing or unknown bearer session", body = Error),
        (status = 402, description = "Ticket not paid", body = Error),
        (status = 404, description = "No ticket, or ticket without lodging", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["hotels"],
    operation_id = "listHotels",
    security(("BearerAuth" = []))
)]
#[get("")]
pub async fn list_hotels(
    user: AuthenticatedUser,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<HotelResponse>>> {
    let hotels = state.hotels.list_hotels(user.user_id()).await?;
    Ok(web::Json(
        hotels.into_iter().map(HotelResponse::from).collect(),
    ))
}

/// Fetch one hotel and its rooms for a user whose ticket grants lodging.
#[utoipa::path(
    get,
    path = "/hotels/{hotelId}",
    params(
        ("hotelId" = i32, Path, description = "Positive hotel identifier")
    ),
    responses(
        (status = 200, description = "Hotel with rooms", body = HotelWithRoomsResponse),
        (status = 400, description = "Malformed hotel id", body = Error),
        (status = 401, description = "Missing or unknown bearer session", body = Error),
        (status = 402, description = "Ticket not paid", body = Error),
        (status = 404, description = "Hotel not found, no ticket, or ticket without lodging", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["hotels"],
    operation_id = "getHotelWithRooms",
    security(("BearerAuth" = []))
)]
#[get("/{hotelId}")]
pub async fn get_hotel(
    user: AuthenticatedUser,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<HotelWithRoomsResponse>> {
    let hotel_id = parse_hotel_id(&path.into_inner())?;
    let hotel = state
        .hotels
        .hotel_with_rooms(user.user_id(), hotel_id)
        .await?;
    Ok(web::Json(HotelWithRoomsResponse::from(hotel)))
}

/// `GET /hotels/` with an empty id segment: still authenticated, then
/// rejected as a missing `hotelId`.
#[get("/")]
pub async fn get_hotel_without_id(
    _user: AuthenticatedUser,
) -> ApiResult<web::Json<HotelWithRoomsResponse>> {
    Err(invalid_hotel_id("", HotelIdValidationError::Empty))
}

/// Register the hotel routes under `/hotels`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/hotels")
            .service(list_hotels)
            .service(get_hotel_without_id)
            .service(get_hotel),
    );
}

#[cfg(test)]
#[path = "hotels_tests.rs"]
mod tests;
