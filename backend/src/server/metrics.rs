//! Prometheus request metrics, compiled only with the `metrics` feature.

use std::collections::HashMap;

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use prometheus::Registry;

const NAMESPACE: &str = "hotels";
const ENDPOINT: &str = "/metrics";

/// Build the request-metrics middleware, serving the scrape endpoint at
/// `/metrics` from a dedicated registry.
///
/// # Errors
/// Fails when the HTTP collectors cannot be registered.
pub(crate) fn make_metrics() -> std::io::Result<PrometheusMetrics> {
    let labels = HashMap::from([("service".to_owned(), env!("CARGO_PKG_NAME").to_owned())]);
    PrometheusMetricsBuilder::new(NAMESPACE)
        .endpoint(ENDPOINT)
        .registry(Registry::new())
        .const_labels(labels)
        .build()
        .map_err(std::io::Error::other)
}
