//! Builds the HTTP state from the configured adapters.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use hotels_backend::domain::HotelAccessService;
use hotels_backend::inbound::http::state::HttpState;
use hotels_backend::outbound::persistence::{
    DbPool, DieselHotelRepository, DieselSessionRepository, DieselTicketRepository,
};

fn diesel_state(pool: &DbPool) -> HttpState {
    let hotels = HotelAccessService::new(
        Arc::new(DieselTicketRepository::new(pool.clone())),
        Arc::new(DieselHotelRepository::new(pool.clone())),
    );
    HttpState::new(
        Arc::new(hotels),
        Arc::new(DieselSessionRepository::new(pool.clone())),
    )
}

/// Construct handler state once at startup.
///
/// Uses Diesel adapters when a pool is configured, otherwise fixtures.
pub(super) fn build_http_state(pool: Option<&DbPool>) -> web::Data<HttpState> {
    let state = match pool {
        Some(pool) => diesel_state(pool),
        None => {
            warn!("no database configured; serving from fixture adapters");
            HttpState::fixtures()
        }
    };
    web::Data::new(state)
}
