//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the hotel endpoints, the health probes, their
//! response schemas, and the bearer security scheme. Swagger UI serves it in
//! debug builds and `cargo run --bin openapi-dump` prints it for tooling.

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::hotels::{HotelResponse, HotelWithRoomsResponse, RoomResponse};

/// Adds the bearer session security scheme (opaque token issued at sign-in).
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BearerAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Hotels backend API",
        description = "Hotel listings gated by event ticket eligibility."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerAuth" = [])),
    paths(
        crate::inbound::http::hotels::list_hotels,
        crate::inbound::http::hotels::get_hotel,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        HotelResponse,
        HotelWithRoomsResponse,
        RoomResponse,
        Error,
        ErrorCode
    )),
    tags(
        (name = "hotels", description = "Hotel listing and detail"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
