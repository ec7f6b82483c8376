//! Application state shared across HTTP handlers

use std::sync::Arc;

use tera::Tera;

use crate::config::Config;
use crate::db::ConnectionRegistry;
use crate::error::Result;
use crate::health::HealthChecker;
use crate::metrics::MetricsRegistry;
use crate::templates::init_templates;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub checker: HealthChecker,
    pub metrics: MetricsRegistry,
    pub templates: Tera,
}

impl AppState {
    /// Wires the registry, metrics and page templates together
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded page template fails to parse.
    pub fn new(config: Config, registry: ConnectionRegistry) -> Result<Self> {
        let metrics = MetricsRegistry::new();
        let checker = HealthChecker::new(Arc::new(registry), metrics.clone());
        Ok(Self {
            config,
            checker,
            metrics,
            templates: init_templates()?,
        })
    }
}
