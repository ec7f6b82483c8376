// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Database access module
//!
//! Owns the named connection pools and the liveness query run against them.

mod probe;
mod registry;

pub use probe::{LIVENESS_QUERY, LivenessProbe, PgProbe};
pub use registry::ConnectionRegistry;
