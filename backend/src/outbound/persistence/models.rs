//! Internal Diesel row structs for database reads.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{hotels, rooms, ticket_types, tickets};

/// Ticket columns needed by the eligibility gate.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tickets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TicketRow {
    pub id: i32,
    pub status: String,
}

/// Lodging flags of a ticket type.
#[derive(Debug, Clone, Copy, Queryable, Selectable)]
#[diesel(table_name = ticket_types)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TicketTypeFlagsRow {
    pub includes_hotel: bool,
    pub is_remote: bool,
}

/// Row struct for reading from the hotels table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = hotels)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct HotelRow {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row struct for reading from the rooms table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = rooms)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RoomRow {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
