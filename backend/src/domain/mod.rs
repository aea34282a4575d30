//! Domain primitives, services, and ports.
//!
//! Purpose: Define strongly typed entities shared by the HTTP and persistence
//! layers, and the eligibility rules deciding who may see hotel data. Keep
//! types immutable and document invariants in each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - Ticket / TicketStatus / TicketType: ticket snapshot read per request.
//! - Hotel / Room / HotelWithRooms: hotel read models.
//! - HotelEligibility: the ticket gate.
//! - HotelAccessService: implementation of [`ports::HotelsQuery`].

pub mod eligibility;
pub mod error;
pub mod hotel;
mod hotel_access_service;
pub mod ports;
pub mod ticket;
pub mod trace_id;
pub mod user;

pub use self::eligibility::{HotelEligibility, NOT_FOUND_MESSAGE, PAYMENT_REQUIRED_MESSAGE};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::hotel::{Hotel, HotelId, HotelIdValidationError, HotelWithRooms, Room};
pub use self::hotel_access_service::HotelAccessService;
pub use self::ticket::{Ticket, TicketStatus, TicketType, UnknownTicketStatus};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{UserId, UserIdValidationError};
