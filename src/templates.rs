// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! HTML page rendering

use tera::{Context, Tera};

use crate::error::Result;
use crate::health::AggregateResult;

pub const PAGE_TITLE: &str = "Database Keep Alive Connector";

const INDEX_TEMPLATE: &str = "index.html";

/// Initialize the Tera template engine with the embedded page
///
/// The `.html` name turns autoescaping on.
pub fn init_templates() -> Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_template(INDEX_TEMPLATE, include_str!("../templates/index.html"))?;
    Ok(tera)
}

/// Renders the status page for a completed round of checks
pub fn render_status(tera: &Tera, aggregate: &AggregateResult) -> Result<String> {
    let mut context = Context::new();
    context.insert("title", PAGE_TITLE);
    context.insert("error", &None::<String>);
    context.insert("all_successful", &aggregate.all_successful);
    context.insert("results", &aggregate.results);
    context.insert("timestamp", &aggregate.timestamp);
    Ok(tera.render(INDEX_TEMPLATE, &context)?)
}

/// Renders the status page when the checks could not run at all
pub fn render_failure(tera: &Tera, error: &str) -> Result<String> {
    let mut context = Context::new();
    context.insert("title", PAGE_TITLE);
    context.insert("error", error);
    Ok(tera.render(INDEX_TEMPLATE, &context)?)
}
