//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod hotel_repository;
mod hotels_query;
mod session_repository;
mod ticket_repository;

#[cfg(test)]
pub use hotel_repository::MockHotelRepository;
pub use hotel_repository::{FixtureHotelRepository, HotelRepository, HotelRepositoryError};
#[cfg(test)]
pub use hotels_query::MockHotelsQuery;
pub use hotels_query::HotelsQuery;
#[cfg(test)]
pub use session_repository::MockSessionRepository;
pub use session_repository::{
    FixtureSessionRepository, SessionRepository, SessionRepositoryError,
};
#[cfg(test)]
pub use ticket_repository::MockTicketRepository;
pub use ticket_repository::{FixtureTicketRepository, TicketRepository, TicketRepositoryError};
