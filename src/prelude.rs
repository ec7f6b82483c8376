// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for convenient use.
//! Users of the library can import everything they need with:
//!
//! ```rust
//! use db_keepalive::prelude::*;
//! ```

// Core types
pub use crate::config::{Config, ConnectionConfig, PoolSettings};
pub use crate::error::{AppError, CheckError, Result};

// Database access
pub use crate::db::{ConnectionRegistry, LivenessProbe, PgProbe};

// Checks
pub use crate::health::{AggregateResult, CheckResult, HealthChecker};

// Metrics types
pub use crate::metrics::{ConnectionLabels, MetricsRegistry};
