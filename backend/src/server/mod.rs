//! Process wiring: builds handler state once, then hands clones of it to
//! every Actix worker.

mod config;
#[cfg(feature = "metrics")]
mod metrics;
mod state_builders;

pub use config::ServerConfig;
#[cfg(feature = "metrics")]
pub(crate) use metrics::make_metrics;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use hotels_backend::Trace;
use hotels_backend::inbound::http::health::{self, HealthState};
use hotels_backend::inbound::http::hotels;
use hotels_backend::inbound::http::state::HttpState;

use state_builders::build_http_state;

/// Per-worker clones of the process-wide state.
#[derive(Clone)]
struct Shared {
    health: web::Data<HealthState>,
    http: web::Data<HttpState>,
}

fn build_app(
    shared: Shared,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(shared.health)
        .app_data(shared.http)
        .wrap(Trace)
        .configure(hotels::configure)
        .service(health::ready)
        .service(health::live);

    #[cfg(debug_assertions)]
    let app = {
        use utoipa::OpenApi as _;
        app.service(
            utoipa_swagger_ui::SwaggerUi::new("/docs")
                .url("/api-docs/openapi.json", hotels_backend::ApiDoc::openapi()),
        )
    };

    app
}

/// Bind the listener and start serving hotel routes.
///
/// Readiness flips to 200 once the socket is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding fails or, with the `metrics`
/// feature, when the Prometheus collectors cannot be registered.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        db_pool,
        #[cfg(feature = "metrics")]
        prometheus,
    } = config;

    let shared = Shared {
        health: web::Data::new(HealthState::new()),
        http: build_http_state(db_pool.as_ref()),
    };
    let health = shared.health.clone();

    #[cfg(feature = "metrics")]
    let prometheus = match prometheus {
        Some(prometheus) => prometheus,
        None => make_metrics()?,
    };

    let server = HttpServer::new(move || {
        let app = build_app(shared.clone());

        #[cfg(feature = "metrics")]
        let app = app.wrap(prometheus.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, database = db_pool.is_some(), "hotels backend listening");
    health.mark_ready();
    Ok(server)
}
