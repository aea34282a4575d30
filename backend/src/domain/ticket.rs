//! Event tickets as seen by the hotel access flow.
//!
//! Tickets are created and paid by the purchase flow; here they are a
//! read-only snapshot consulted once per request.

use std::fmt;
use std::str::FromStr;

/// Payment lifecycle of a ticket.
///
/// Only [`TicketStatus::Paid`] counts as paid; every other state, including
/// cancellation, is treated as outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketStatus {
    /// Ticket held but not yet paid.
    Reserved,
    /// Ticket fully paid.
    Paid,
    /// Ticket cancelled after reservation.
    Cancelled,
}

impl TicketStatus {
    /// Stored text form in the `tickets.status` column.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reserved => "RESERVED",
            Self::Paid => "PAID",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Whether the ticket has been paid.
    #[must_use]
    pub fn is_paid(self) -> bool {
        matches!(self, Self::Paid)
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a stored status string is not a known [`TicketStatus`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown ticket status: {0}")]
pub struct UnknownTicketStatus(pub String);

impl FromStr for TicketStatus {
    type Err = UnknownTicketStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RESERVED" => Ok(Self::Reserved),
            "PAID" => Ok(Self::Paid),
            "CANCELLED" => Ok(Self::Cancelled),
            other => Err(UnknownTicketStatus(other.to_owned())),
        }
    }
}

/// Category flags of a ticket relevant to lodging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketType {
    /// Ticket bundles a hotel stay.
    pub includes_hotel: bool,
    /// Ticket is for remote attendance.
    pub is_remote: bool,
}

impl TicketType {
    /// Whether holders of this type may book lodging.
    #[must_use]
    pub fn grants_hotel_access(self) -> bool {
        self.includes_hotel && !self.is_remote
    }
}

/// The user's current enrollment ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    /// Ticket primary key.
    pub id: i32,
    /// Payment state.
    pub status: TicketStatus,
    /// Ticket category flags.
    pub ticket_type: TicketType,
}
