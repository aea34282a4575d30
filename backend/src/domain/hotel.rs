//! Hotels and their rooms.
//!
//! A [`Hotel`] never carries rooms; lookups that need them return a
//! [`HotelWithRooms`] holding the complete current room set.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

/// Validation errors returned when parsing a [`HotelId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HotelIdValidationError {
    /// The input was empty or whitespace.
    #[error("hotel id must not be empty")]
    Empty,
    /// The input is not a base-10 integer in range.
    #[error("hotel id must be an integer")]
    NotANumber,
    /// The value is zero or negative.
    #[error("hotel id must be positive")]
    NotPositive,
}

/// Hotel primary key.
///
/// # Examples
/// ```
/// use hotels_backend::domain::HotelId;
///
/// let id: HotelId = "42".parse().expect("valid id");
/// assert_eq!(id.as_i32(), 42);
/// assert!("abc".parse::<HotelId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HotelId(i32);

impl HotelId {
    /// Validate and construct a [`HotelId`].
    pub fn new(id: i32) -> Result<Self, HotelIdValidationError> {
        if id <= 0 {
            return Err(HotelIdValidationError::NotPositive);
        }
        Ok(Self(id))
    }

    /// Raw integer value as stored in the database.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self.0
    }
}

impl FromStr for HotelId {
    type Err = HotelIdValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(HotelIdValidationError::Empty);
        }
        let raw: i32 = s.parse().map_err(|_| HotelIdValidationError::NotANumber)?;
        Self::new(raw)
    }
}

impl fmt::Display for HotelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A hotel in list form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A room belonging to exactly one hotel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A hotel together with its current rooms (possibly none).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelWithRooms {
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}
