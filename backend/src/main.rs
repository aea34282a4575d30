//! Backend entry-point: loads settings, prepares the database, and serves
//! the hotel endpoints.

mod server;

use color_eyre::eyre::{WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use hotels_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use hotels_backend::settings::AppSettings;

use server::{ServerConfig, create_server};

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

async fn build_pool(settings: &AppSettings, database_url: &str) -> color_eyre::Result<DbPool> {
    if settings.run_migrations {
        run_pending_migrations(database_url)
            .await
            .wrap_err("apply database migrations")?;
    }

    let config = PoolConfig::new(database_url)
        .with_max_size(settings.db_max_connections()?)
        .with_connection_timeout(settings.db_checkout_timeout());
    DbPool::new(config)
        .await
        .wrap_err("build database connection pool")
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();

    let settings = AppSettings::load().map_err(|err| eyre!("load settings: {err}"))?;
    let mut config = ServerConfig::from_settings(&settings)?;

    match settings.database_url() {
        Some(url) => {
            let pool = build_pool(&settings, url).await?;
            info!("database pool ready");
            config = config.with_db_pool(pool);
        }
        None if settings.run_migrations => {
            warn!("run_migrations is set but no database_url is configured");
        }
        None => {}
    }

    #[cfg(feature = "metrics")]
    let config =
        config.with_metrics(server::make_metrics().wrap_err("configure Prometheus metrics")?);

    create_server(config)?.await?;
    Ok(())
}
