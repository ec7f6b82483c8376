// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod db_check;
mod health;
mod metrics;
mod page;

pub use db_check::{method_not_allowed, test_db_connection};
pub use health::health_check;
pub use metrics::metrics_handler;
pub use page::index;
