//! Shared application state.
//!
//! Owns the config, the consumer ends of the metric feeds, and the metrics
//! registry. `new` also starts the generator tasks; tests build state over
//! hand-fed channels with `with_feeds`.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;
use crate::feeds::MetricFeeds;
use crate::obs::metrics::ServerMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    feeds: MetricFeeds,
    metrics: ServerMetrics,
}

impl AppState {
    /// Build state and start one generator task per metric stream.
    pub fn new(cfg: ServerConfig) -> Self {
        let (taps, feeds) = MetricFeeds::bounded(cfg.sampling.queue_capacity);
        taps.spawn_generators(
            Duration::from_millis(cfg.sampling.tick_ms),
            cfg.sampling.value_bound,
        );
        Self::with_feeds(cfg, feeds)
    }

    /// Build state over externally produced feeds. No generators are
    /// started; the caller owns the producer ends.
    pub fn with_feeds(cfg: ServerConfig, feeds: MetricFeeds) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                feeds,
                metrics: ServerMetrics::default(),
            }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn feeds(&self) -> &MetricFeeds {
        &self.inner.feeds
    }

    pub fn metrics(&self) -> &ServerMetrics {
        &self.inner.metrics
    }
}
