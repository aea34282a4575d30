//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    FixtureHotelRepository, FixtureSessionRepository, FixtureTicketRepository, HotelsQuery,
    SessionRepository,
};
use crate::domain::HotelAccessService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Eligibility-gated hotel reads.
    pub hotels: Arc<dyn HotelsQuery>,
    /// Bearer token resolution used by [`super::auth::AuthenticatedUser`].
    pub sessions: Arc<dyn SessionRepository>,
}

impl HttpState {
    /// Construct state from port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use hotels_backend::domain::HotelAccessService;
    /// use hotels_backend::domain::ports::{
    ///     FixtureHotelRepository, FixtureSessionRepository, FixtureTicketRepository,
    /// };
    /// use hotels_backend::inbound::http::state::HttpState;
    ///
    /// let hotels = HotelAccessService::new(
    ///     Arc::new(FixtureTicketRepository),
    ///     Arc::new(FixtureHotelRepository),
    /// );
    /// let state = HttpState::new(Arc::new(hotels), Arc::new(FixtureSessionRepository));
    /// let _sessions = state.sessions.clone();
    /// ```
    pub fn new(hotels: Arc<dyn HotelsQuery>, sessions: Arc<dyn SessionRepository>) -> Self {
        Self { hotels, sessions }
    }

    /// State backed entirely by fixture adapters.
    ///
    /// No token resolves, so every hotel request is answered with 401.
    pub fn fixtures() -> Self {
        let hotels = HotelAccessService::new(
            Arc::new(FixtureTicketRepository),
            Arc::new(FixtureHotelRepository),
        );
        Self::new(Arc::new(hotels), Arc::new(FixtureSessionRepository))
    }
}
