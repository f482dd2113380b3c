//! Application state management
//!
//! Shared, read-only state passed to every handler via Axum's state
//! extraction. Cloning is O(1): the config sits behind an `Arc` and the
//! Prometheus handle is internally reference counted.

use crate::config::AppConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Installed Prometheus recorder, if metrics are enabled
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state
    ///
    /// The recorder is installed globally by the caller (once per process),
    /// only its handle is stored here.
    pub fn new(config: AppConfig, metrics: Option<PrometheusHandle>) -> Self {
        Self {
            config: Arc::new(config),
            metrics,
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the Prometheus handle, if any
    #[inline]
    pub fn metrics(&self) -> Option<&PrometheusHandle> {
        self.metrics.as_ref()
    }
}
