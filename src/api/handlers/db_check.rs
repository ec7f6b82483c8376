// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::api::AppState;
use crate::error::{AppError, Result};
use crate::health::{AggregateResult, CheckResult};

/// Body of `/api/test-db-connection`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DbCheckResponse<'a> {
    pub message: &'static str,
    pub all_successful: bool,
    pub connections: BTreeMap<&'a str, &'a CheckResult>,
    pub timestamp: &'a str,
}

impl<'a> From<&'a AggregateResult> for DbCheckResponse<'a> {
    fn from(aggregate: &'a AggregateResult) -> Self {
        Self {
            message: if aggregate.all_successful {
                "All database connections successful!"
            } else {
                "Some database connections failed"
            },
            all_successful: aggregate.all_successful,
            connections: aggregate
                .results
                .iter()
                .map(|r| (r.connection_name(), r))
                .collect(),
            timestamp: &aggregate.timestamp,
        }
    }
}

/// GET /api/test-db-connection
///
/// Probes every configured connection and reports 200 when all answer,
/// 207 when at least one fails.
pub async fn test_db_connection(State(state): State<Arc<AppState>>) -> Result<Response> {
    let aggregate = state.checker.check_all().await?;

    let status = if aggregate.all_successful {
        StatusCode::OK
    } else {
        StatusCode::MULTI_STATUS
    };

    Ok((status, Json(DbCheckResponse::from(&aggregate))).into_response())
}

/// Any verb other than GET on the check endpoint
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
