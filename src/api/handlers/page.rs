// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::api::AppState;
use crate::error::Result;
use crate::templates::{render_failure, render_status};

/// GET /
///
/// Runs the same checks as the JSON endpoint and renders them as a page.
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>> {
    let html = match state.checker.check_all().await {
        Ok(aggregate) => render_status(&state.templates, &aggregate)?,
        Err(e) => {
            tracing::error!("Status page checks failed: {:?}", e);
            render_failure(&state.templates, &e.to_string())?
        }
    };

    Ok(Html(html))
}
