//! Startup configuration handed from `main` to [`super::create_server`].

use std::net::SocketAddr;

use hotels_backend::outbound::persistence::DbPool;
use hotels_backend::settings::{AppSettings, SettingsError};

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

/// Resolved listener address plus the optional infrastructure the hotel
/// adapters run on.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Resolve the listener address from loaded settings.
    ///
    /// # Errors
    /// Returns [`SettingsError::BindAddr`] when the configured address does
    /// not parse.
    pub fn from_settings(settings: &AppSettings) -> Result<Self, SettingsError> {
        Ok(Self {
            bind_addr: settings.bind_addr()?,
            db_pool: None,
            #[cfg(feature = "metrics")]
            prometheus: None,
        })
    }

    /// Back the ticket, hotel, and session ports with PostgreSQL. Without a
    /// pool, every port falls back to its empty fixture adapter.
    #[must_use]
    pub fn with_db_pool(self, pool: DbPool) -> Self {
        Self {
            db_pool: Some(pool),
            ..self
        }
    }

    #[cfg(feature = "metrics")]
    #[must_use]
    pub fn with_metrics(self, prometheus: PrometheusMetrics) -> Self {
        Self {
            prometheus: Some(prometheus),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn settings(bind_addr: Option<&str>) -> AppSettings {
        AppSettings {
            bind_addr: bind_addr.map(str::to_owned),
            database_url: None,
            db_max_connections: None,
            db_checkout_timeout_secs: None,
            run_migrations: false,
        }
    }

    #[rstest]
    fn resolves_configured_address() {
        let config = ServerConfig::from_settings(&settings(Some("127.0.0.1:9100")))
            .expect("valid address");

        assert_eq!(config.bind_addr.port(), 9100);
        assert!(config.db_pool.is_none());
    }

    #[rstest]
    fn rejects_unparseable_address() {
        let result = ServerConfig::from_settings(&settings(Some("hotels:eighty")));

        assert!(matches!(result, Err(SettingsError::BindAddr { .. })));
    }
}
