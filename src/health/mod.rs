// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Connection health checks
//!
//! Probes every configured connection concurrently and folds the outcomes
//! into a single [`AggregateResult`].

mod types;

use std::sync::Arc;

use futures_util::future::join_all;

use crate::db::ConnectionRegistry;
use crate::error::AppError;
use crate::metrics::{ConnectionLabels, MetricsRegistry};

pub use types::{AggregateResult, CheckResult, iso_timestamp};

/// Runs liveness checks against the registry and records their outcome
#[derive(Clone)]
pub struct HealthChecker {
    registry: Arc<ConnectionRegistry>,
    metrics: MetricsRegistry,
}

impl HealthChecker {
    pub fn new(registry: Arc<ConnectionRegistry>, metrics: MetricsRegistry) -> Self {
        for name in registry.names() {
            metrics.initialize_connection_metrics(&ConnectionLabels::new(name));
        }
        metrics.set_configured_connections(registry.len());
        Self { registry, metrics }
    }

    pub fn registry(&self) -> &ConnectionRegistry {
        &self.registry
    }

    /// Checks one named connection
    ///
    /// Never fails: unknown names, connect and query errors all become a
    /// failed [`CheckResult`].
    pub async fn check_connection(&self, name: &str) -> CheckResult {
        // Unknown names get no metric series
        let probe = match self.registry.get_pool(name) {
            Ok(probe) => probe,
            Err(e) => {
                tracing::warn!("Connection check rejected: {}", e);
                return CheckResult::failed(name, e);
            }
        };

        let labels = ConnectionLabels::new(name);
        let start = std::time::Instant::now();
        let outcome = probe.server_time().await;

        let duration = start.elapsed().as_secs_f64();
        self.metrics.record_check_duration(&labels, duration);

        match outcome {
            Ok(server_time) => {
                self.metrics.record_check_success(&labels);
                tracing::debug!(
                    "Connection '{}' answered in {:.3}s (server time {})",
                    name,
                    duration,
                    server_time
                );
                CheckResult::ok(name, server_time)
            }
            Err(e) => {
                self.metrics.record_check_error(&labels);
                tracing::warn!("Connection '{}' failed in {:.3}s: {}", name, duration, e);
                CheckResult::failed(name, e)
            }
        }
    }

    /// Checks every configured connection concurrently
    ///
    /// # Errors
    ///
    /// Fails only if no connection is configured or a check task dies.
    pub async fn check_all(&self) -> crate::Result<AggregateResult> {
        if self.registry.is_empty() {
            return Err(AppError::Config(
                "No database connections configured".to_string(),
            ));
        }

        tracing::info!("Testing {} database connection(s)", self.registry.len());

        let handles: Vec<_> = self
            .registry
            .names()
            .map(|name| {
                let checker = self.clone();
                let name = name.to_string();
                tokio::spawn(async move { checker.check_connection(&name).await })
            })
            .collect();

        let results = join_all(handles)
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AppError::Internal(format!("Connection check task failed: {e}")))?;

        Ok(AggregateResult::new(results))
    }
}
