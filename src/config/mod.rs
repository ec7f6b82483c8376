// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the keep-alive connector
//!
//! Loads and parses configuration from environment variables and JSON.

use serde::Deserialize;


/// Default configuration values
pub mod defaults {
    pub const SERVER_ADDR: &str = "0.0.0.0:3000";
    pub const MAX_CONNECTIONS: u32 = 5;
    pub const ACQUIRE_TIMEOUT_SECS: u64 = 10;
    pub const KEEPALIVE_INTERVAL_SECS: u64 = 0;
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const SERVER_ADDR: &str = "SERVER_ADDR";
    pub const DB_CONNECTIONS: &str = "DB_CONNECTIONS";
    pub const SUPABASE_CONNECTION_STRING: &str = "SUPABASE_CONNECTION_STRING";
    pub const DATABASE_URL_1: &str = "DATABASE_URL_1";
    pub const DB_MAX_CONNECTIONS: &str = "DB_MAX_CONNECTIONS";
    pub const DB_ACQUIRE_TIMEOUT_SECONDS: &str = "DB_ACQUIRE_TIMEOUT_SECONDS";
    pub const KEEPALIVE_INTERVAL_SECONDS: &str = "KEEPALIVE_INTERVAL_SECONDS";
}

/// Legacy single-variable connections, in registration order
const LEGACY_CONNECTIONS: [(&str, &str); 2] = [
    ("supabase", env_vars::SUPABASE_CONNECTION_STRING),
    ("database1", env_vars::DATABASE_URL_1),
];

/// A named database connection
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionConfig {
    pub name: String,
    pub connection_string: String,
}

impl ConnectionConfig {
    /// Validates connection configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Connection name cannot be empty".to_string());
        }

        if self.connection_string.trim().is_empty() {
            return Err(format!(
                "Connection string cannot be empty for connection '{}'",
                self.name
            ));
        }

        Ok(())
    }
}

/// Settings applied to every pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Default for PoolSettings {
    fn default() -> Self {
        PoolSettings {
            max_connections: defaults::MAX_CONNECTIONS,
            acquire_timeout_secs: defaults::ACQUIRE_TIMEOUT_SECS,
        }
    }
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    pub connections: Vec<ConnectionConfig>,
    pub pool: PoolSettings,
    pub keepalive_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_addr: defaults::SERVER_ADDR.to_string(),
            connections: vec![],
            pool: PoolSettings::default(),
            keepalive_interval_secs: defaults::KEEPALIVE_INTERVAL_SECS,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_addr =
            var(env_vars::SERVER_ADDR).unwrap_or_else(|| defaults::SERVER_ADDR.to_string());

        let connections: Vec<ConnectionConfig> =
            if let Some(config_json) = var(env_vars::DB_CONNECTIONS) {
                serde_json::from_str(&config_json).unwrap_or_else(|e| {
                    tracing::warn!("Failed to parse DB_CONNECTIONS: {}. Using empty list.", e);
                    vec![]
                })
            } else {
                // Fallback: one variable per well-known connection
                LEGACY_CONNECTIONS
                    .iter()
                    .filter_map(|&(name, key)| match var(key) {
                        Some(connection_string) => Some(ConnectionConfig {
                            name: name.to_string(),
                            connection_string,
                        }),
                        None => {
                            tracing::warn!("{} is not set, skipping connection '{}'", key, name);
                            None
                        }
                    })
                    .collect()
            };

        let connections = connections
            .into_iter()
            .filter(|connection| match connection.validate() {
                Ok(()) => true,
                Err(e) => {
                    tracing::error!("Invalid connection configuration: {}", e);
                    tracing::warn!("Skipping invalid connection: {}", connection.name);
                    false
                }
            })
            .collect();

        let pool = PoolSettings {
            max_connections: parse_var::<_, u32>(&var, env_vars::DB_MAX_CONNECTIONS)
                .filter(|n| *n > 0)
                .unwrap_or(defaults::MAX_CONNECTIONS),
            acquire_timeout_secs: parse_var::<_, u64>(&var, env_vars::DB_ACQUIRE_TIMEOUT_SECONDS)
                .unwrap_or(defaults::ACQUIRE_TIMEOUT_SECS),
        };

        let keepalive_interval_secs = parse_var::<_, u64>(&var, env_vars::KEEPALIVE_INTERVAL_SECONDS)
            .unwrap_or(defaults::KEEPALIVE_INTERVAL_SECS);

        Config {
            server_addr,
            connections,
            pool,
            keepalive_interval_secs,
        }
    }
}

fn parse_var<F, T>(var: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    var(key).and_then(|v| v.trim().parse::<T>().ok())
}
