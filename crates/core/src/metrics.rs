//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Filter engine (runs, result sizes)
//! - Catalog ingestion (size, follower-parse fallbacks)

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts};

// =============================================================================
// Filter Engine Metrics
// =============================================================================

/// Filter runs total by quick-filter kind.
pub static FILTER_RUNS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("soller_filter_runs_total", "Total filter engine runs"),
        &["quick_filter"], // "all", "soller", "trending", "category"
    )
    .unwrap()
});

/// Result-set sizes produced by the filter engine.
pub static FILTER_RESULT_SIZE: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "soller_filter_result_size",
            "Number of influencers in each filter result",
        )
        .buckets(vec![0.0, 1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0]),
    )
    .unwrap()
});

// =============================================================================
// Catalog Metrics
// =============================================================================

/// Influencers in the loaded catalog.
pub static CATALOG_SIZE: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "soller_catalog_influencers",
        "Number of influencers in the loaded catalog",
    )
    .unwrap()
});

/// Follower strings that failed to parse at ingestion (normalized to 0).
pub static FOLLOWER_PARSE_FALLBACKS: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "soller_follower_parse_fallbacks_total",
        "Follower count strings with no parseable digits",
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(FILTER_RUNS.clone()),
        Box::new(FILTER_RESULT_SIZE.clone()),
        Box::new(CATALOG_SIZE.clone()),
        Box::new(FOLLOWER_PARSE_FALLBACKS.clone()),
    ]
}
