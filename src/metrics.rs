//! Prometheus metrics & middleware helper.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use once_cell::sync::Lazy;
use prometheus::IntCounter;

/// Global Prometheus handle reused in tests.
pub static METRICS: Lazy<PrometheusMetrics> = Lazy::new(|| {
    PrometheusMetricsBuilder::new("foosball")
        .endpoint("/metrics") // exposed URL
        .build()
        .expect("metrics builder")
});

/// Matches accepted and recorded since startup.
pub static MATCHES_RECORDED: Lazy<IntCounter> = Lazy::new(|| {
    let counter = IntCounter::new("matches_recorded_total", "Matches accepted and recorded")
        .expect("counter definition");
    METRICS
        .registry
        .register(Box::new(counter.clone()))
        .expect("counter registration");
    counter
});
