// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # DB Keep-Alive
//!
//! Keep-alive connector for PostgreSQL databases.
//!
//! This library pings named connection pools with `SELECT NOW()` and reports
//! the outcome over HTTP as JSON and as a small status page.
//!
//! ## Main modules
//! - `api`: HTTP API handlers
//! - `config`: configuration management
//! - `db`: connection registry and liveness probes
//! - `error`: error types
//! - `health`: concurrent connection checks
//! - `keepalive`: background keep-alive loop
//! - `metrics`: Prometheus registry
//! - `prelude`: commonly used types and traits

mod api;
mod config;
mod db;
mod error;
mod health;
mod keepalive;
mod metrics;
pub mod prelude;
mod templates;

// Re-export commonly used types
/// Application configuration
pub use config::{Config, ConnectionConfig, PoolSettings};

/// Application error and result type
pub use error::{AppError, CheckError, Result};

/// HTTP API router and state
pub use api::{AppState, create_router};

/// Connection registry and probe seam
pub use db::{ConnectionRegistry, LIVENESS_QUERY, LivenessProbe, PgProbe};

/// Health check runner and results
pub use health::{AggregateResult, CheckResult, HealthChecker};

/// Keep-alive loop
pub use keepalive::start_keepalive_loop;

/// Metrics registry and labels
pub use metrics::{ConnectionLabels, MetricsRegistry};
