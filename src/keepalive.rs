// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Background keep-alive loop
//!
//! Periodically runs the liveness query against every configured connection
//! so hosted databases that pause when idle stay awake.

use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::health::HealthChecker;

/// Starts the keep-alive loop
///
/// Returns `None` when `interval_secs` is zero (loop disabled).
pub fn start_keepalive_loop(
    mut shutdown_rx: watch::Receiver<bool>,
    checker: HealthChecker,
    interval_secs: u64,
) -> Option<JoinHandle<()>> {
    if interval_secs == 0 {
        tracing::info!("Keep-alive loop disabled");
        return None;
    }

    tracing::info!("Starting keep-alive loop every {}s", interval_secs);

    Some(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
        loop {
            tokio::select! {
                _ = ticker.tick() => {},
                changed = shutdown_rx.changed() => {
                    // A dropped sender means nobody can stop us later
                    if changed.is_err() || *shutdown_rx.borrow() {
                        tracing::info!("Stopping keep-alive loop");
                        break;
                    }
                    continue;
                }
            }

            match checker.check_all().await {
                Ok(aggregate) if aggregate.all_successful => {
                    tracing::info!(
                        "Keep-alive round ok for {} connection(s)",
                        aggregate.results.len()
                    );
                }
                Ok(aggregate) => {
                    for failed in aggregate.failed() {
                        tracing::warn!(
                            "Keep-alive failed for '{}': {}",
                            failed.connection_name(),
                            failed.error().unwrap_or_default()
                        );
                    }
                }
                Err(e) => {
                    tracing::error!("Keep-alive round failed: {}", e);
                }
            }
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{ConnectionRegistry, LivenessProbe};
    use crate::error::CheckError;
    use crate::metrics::{ConnectionLabels, MetricsRegistry};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct OkProbe;

    #[async_trait]
    impl LivenessProbe for OkProbe {
        async fn server_time(&self) -> Result<String, CheckError> {
            Ok("2025-01-01T00:00:00.000Z".to_string())
        }
    }

    fn checker(metrics: MetricsRegistry) -> HealthChecker {
        let registry = ConnectionRegistry::new().with_probe("supabase", Arc::new(OkProbe));
        HealthChecker::new(Arc::new(registry), metrics)
    }

    #[tokio::test]
    async fn test_zero_interval_disables_loop() {
        let (_tx, rx) = watch::channel(false);
        assert!(start_keepalive_loop(rx, checker(MetricsRegistry::new()), 0).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_loop_checks_on_every_tick_and_stops() {
        let metrics = MetricsRegistry::new();
        let (tx, rx) = watch::channel(false);

        let handle = start_keepalive_loop(rx, checker(metrics.clone()), 60).unwrap();

        // First tick fires immediately, then one per interval
        tokio::time::sleep(Duration::from_secs(130)).await;
        let count = metrics.check_success_count(&ConnectionLabels::new("supabase"));
        assert_eq!(count, 3);

        tx.send(true).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_loop_stops_when_sender_dropped() {
        let metrics = MetricsRegistry::new();
        let (tx, rx) = watch::channel(false);

        let handle = start_keepalive_loop(rx, checker(metrics.clone()), 3600).unwrap();
        drop(tx);

        let finished = tokio::time::timeout(Duration::from_millis(500), handle).await;
        assert!(finished.is_ok(), "keep-alive loop kept running after sender drop");
        assert!(metrics.check_success_count(&ConnectionLabels::new("supabase")) <= 1);
    }
}
