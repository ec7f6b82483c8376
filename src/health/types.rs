// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Result types produced by connection checks

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Formats a timestamp as RFC 3339 in UTC with millisecond precision
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Outcome of probing one named connection
///
/// Exactly one of `server_time` and `error` is set; the constructors are the
/// only way to build a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    server_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    connection_name: String,
}

impl CheckResult {
    pub fn ok(connection_name: &str, server_time: String) -> Self {
        Self {
            success: true,
            server_time: Some(server_time),
            error: None,
            connection_name: connection_name.to_string(),
        }
    }

    pub fn failed(connection_name: &str, error: impl ToString) -> Self {
        Self {
            success: false,
            server_time: None,
            error: Some(error.to_string()),
            connection_name: connection_name.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn connection_name(&self) -> &str {
        &self.connection_name
    }

    pub fn server_time(&self) -> Option<&str> {
        self.server_time.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Outcome of one request-wide round of checks
#[derive(Debug, Clone)]
pub struct AggregateResult {
    pub all_successful: bool,
    /// One entry per configured connection, in registry order
    pub results: Vec<CheckResult>,
    pub timestamp: String,
}

impl AggregateResult {
    pub fn new(results: Vec<CheckResult>) -> Self {
        Self {
            all_successful: results.iter().all(CheckResult::is_success),
            results,
            timestamp: iso_timestamp(Utc::now()),
        }
    }

    pub fn failed(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| !r.is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_ok_result_shape() {
        let result = CheckResult::ok("supabase", "2025-01-01T00:00:00.000Z".to_string());
        assert!(result.is_success());
        assert_eq!(result.server_time(), Some("2025-01-01T00:00:00.000Z"));
        assert!(result.error().is_none());

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["connectionName"], "supabase");
        assert_eq!(json["success"], true);
        assert_eq!(json["serverTime"], "2025-01-01T00:00:00.000Z");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_failed_result_shape() {
        let result = CheckResult::failed("database1", "connection refused");
        assert!(!result.is_success());
        assert!(result.server_time().is_none());
        assert_eq!(result.error(), Some("connection refused"));

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "connection refused");
        assert!(json.get("serverTime").is_none());
    }

    #[test]
    fn test_iso_timestamp_format() {
        let at = Utc.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap();
        assert_eq!(iso_timestamp(at), "2025-03-04T05:06:07.000Z");
    }

    #[test]
    fn test_aggregate_all_successful() {
        let aggregate = AggregateResult::new(vec![
            CheckResult::ok("a", "t".to_string()),
            CheckResult::ok("b", "t".to_string()),
        ]);
        assert!(aggregate.all_successful);
        assert_eq!(aggregate.failed().count(), 0);
    }

    #[test]
    fn test_aggregate_partial_failure() {
        let aggregate = AggregateResult::new(vec![
            CheckResult::ok("a", "t".to_string()),
            CheckResult::failed("b", "down"),
        ]);
        assert!(!aggregate.all_successful);
        assert_eq!(aggregate.results.len(), 2);
        assert_eq!(aggregate.failed().next().unwrap().connection_name(), "b");
    }
}
