// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics registry and update logic

use crate::metrics::labels::ConnectionLabels;
use prometheus_client::encoding::text::encode;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct MetricsRegistry {
    registry: Arc<Mutex<Registry>>,
    check_success: Family<ConnectionLabels, Counter>,
    check_errors: Family<ConnectionLabels, Counter>,
    check_duration_milliseconds: Family<ConnectionLabels, Gauge>,
    check_last_success_timestamp_seconds: Family<ConnectionLabels, Gauge>,
    configured_connections: Gauge,
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRegistry {
    pub fn new() -> Self {
        let mut registry = Registry::default();

        let check_success = Family::<ConnectionLabels, Counter>::default();
        registry.register(
            "db_check_success",
            "Successful liveness checks per connection",
            check_success.clone(),
        );
        let check_errors = Family::<ConnectionLabels, Counter>::default();
        registry.register(
            "db_check_errors",
            "Failed liveness checks per connection",
            check_errors.clone(),
        );
        let check_duration_milliseconds = Family::<ConnectionLabels, Gauge>::default();
        registry.register(
            "db_check_duration_milliseconds",
            "Duration of last liveness check in milliseconds",
            check_duration_milliseconds.clone(),
        );
        let check_last_success_timestamp_seconds = Family::<ConnectionLabels, Gauge>::default();
        registry.register(
            "db_check_last_success_timestamp_seconds",
            "Unix timestamp of last successful liveness check",
            check_last_success_timestamp_seconds.clone(),
        );
        let configured_connections = Gauge::default();
        registry.register(
            "db_configured_connections",
            "Number of configured database connections",
            configured_connections.clone(),
        );

        Self {
            registry: Arc::new(Mutex::new(registry)),
            check_success,
            check_errors,
            check_duration_milliseconds,
            check_last_success_timestamp_seconds,
            configured_connections,
        }
    }

    pub async fn encode_metrics(&self) -> Result<String, std::fmt::Error> {
        let registry = self.registry.lock().await;
        let mut buffer = String::new();
        encode(&mut buffer, &registry)?;
        Ok(buffer)
    }

    /// Initialize series for a connection to zero
    ///
    /// Lets Prometheus compute rates before the first check completes.
    pub fn initialize_connection_metrics(&self, labels: &ConnectionLabels) {
        let _ = self.check_success.get_or_create(labels);
        let _ = self.check_errors.get_or_create(labels);
        let _ = self.check_duration_milliseconds.get_or_create(labels);
    }

    pub fn set_configured_connections(&self, count: usize) {
        #[allow(clippy::cast_possible_wrap)]
        self.configured_connections.set(count as i64);
    }

    pub fn record_check_success(&self, labels: &ConnectionLabels) {
        self.check_success.get_or_create(labels).inc();
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        #[allow(clippy::cast_possible_wrap)]
        self.check_last_success_timestamp_seconds
            .get_or_create(labels)
            .set(now as i64);
    }

    pub fn record_check_error(&self, labels: &ConnectionLabels) {
        self.check_errors.get_or_create(labels).inc();
    }

    pub fn record_check_duration(&self, labels: &ConnectionLabels, duration_secs: f64) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let millis = (duration_secs * 1000.0).round() as i64;
        self.check_duration_milliseconds
            .get_or_create(labels)
            .set(millis);
    }

    pub fn check_success_count(&self, labels: &ConnectionLabels) -> u64 {
        self.check_success.get_or_create(labels).get()
    }

    pub fn check_error_count(&self, labels: &ConnectionLabels) -> u64 {
        self.check_errors.get_or_create(labels).get()
    }
}
