//! Hotel eligibility gate.
//!
//! Decides from a ticket snapshot whether its holder may see hotel data.
//! Rules apply in order and the first match wins:
//!
//! 1. no ticket → [`HotelEligibility::NoTicket`]
//! 2. ticket not paid → [`HotelEligibility::PaymentRequired`]
//! 3. type without hotel, or remote → [`HotelEligibility::NotHotelEligible`]
//! 4. otherwise → [`HotelEligibility::Allowed`]

use super::{Error, Ticket};

/// Message returned for both "no ticket" and "ticket without hotel".
pub const NOT_FOUND_MESSAGE: &str = "No result for this search!";

/// Message returned while the ticket is unpaid.
pub const PAYMENT_REQUIRED_MESSAGE: &str = "You must pay your ticket to continue";

/// Verdict of the eligibility gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotelEligibility {
    /// The requester may list and inspect hotels.
    Allowed,
    /// The requester holds no ticket.
    NoTicket,
    /// The requester's ticket has not been paid.
    PaymentRequired,
    /// The ticket type excludes lodging or is for remote attendance.
    NotHotelEligible,
}

impl HotelEligibility {
    /// Apply the gate to the requester's ticket, if any.
    ///
    /// # Examples
    /// ```
    /// use hotels_backend::domain::{HotelEligibility, Ticket, TicketStatus, TicketType};
    ///
    /// assert_eq!(HotelEligibility::evaluate(None), HotelEligibility::NoTicket);
    ///
    /// let ticket = Ticket {
    ///     id: 1,
    ///     status: TicketStatus::Paid,
    ///     ticket_type: TicketType { includes_hotel: true, is_remote: false },
    /// };
    /// assert_eq!(HotelEligibility::evaluate(Some(&ticket)), HotelEligibility::Allowed);
    /// ```
    #[must_use]
    pub fn evaluate(ticket: Option<&Ticket>) -> Self {
        let Some(ticket) = ticket else {
            return Self::NoTicket;
        };
        if !ticket.status.is_paid() {
            return Self::PaymentRequired;
        }
        if !ticket.ticket_type.grants_hotel_access() {
            return Self::NotHotelEligible;
        }
        Self::Allowed
    }

    /// Convert the verdict into the error surfaced to callers.
    ///
    /// `NoTicket` and `NotHotelEligible` are indistinguishable to clients.
    pub fn into_result(self) -> Result<(), Error> {
        match self {
            Self::Allowed => Ok(()),
            Self::PaymentRequired => Err(Error::payment_required(PAYMENT_REQUIRED_MESSAGE)),
            Self::NoTicket | Self::NotHotelEligible => Err(Error::not_found(NOT_FOUND_MESSAGE)),
        }
    }
}
