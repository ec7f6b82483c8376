// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prometheus metrics for connection checks
//!
//! Contains label types and the metrics registry.

mod labels;
mod registry;


/// Labels for per-connection series
pub use labels::ConnectionLabels;

/// Prometheus metrics registry
pub use registry::MetricsRegistry;
