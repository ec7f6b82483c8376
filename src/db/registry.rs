// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Registry of named connection pools

use std::sync::Arc;

use crate::config::Config;
use crate::error::CheckError;

use super::probe::{LivenessProbe, PgProbe};

/// Named probes in configuration order
///
/// Built once at startup and shared read-only with every request.
#[derive(Clone, Default)]
pub struct ConnectionRegistry {
    probes: Vec<(String, Arc<dyn LivenessProbe>)>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates one lazily-connecting pool per configured connection
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a connection string is malformed.
    pub fn from_config(config: &Config) -> crate::Result<Self> {
        let mut registry = Self::new();
        for connection in &config.connections {
            let probe = PgProbe::connect_lazy(connection, config.pool)?;
            registry = registry.with_probe(&connection.name, Arc::new(probe));
        }
        Ok(registry)
    }

    /// Registers a probe under `name`, replacing any previous one
    #[must_use]
    pub fn with_probe(mut self, name: &str, probe: Arc<dyn LivenessProbe>) -> Self {
        if let Some(slot) = self.probes.iter_mut().find(|(n, _)| n == name) {
            slot.1 = probe;
        } else {
            self.probes.push((name.to_string(), probe));
        }
        self
    }

    /// Looks up the probe for a connection name
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::UnknownConnection`] if the name is not configured.
    pub fn get_pool(&self, name: &str) -> Result<Arc<dyn LivenessProbe>, CheckError> {
        self.probes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, probe)| probe.clone())
            .ok_or_else(|| CheckError::UnknownConnection(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.probes.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.probes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    /// Closes every pool
    pub async fn close(&self) {
        for (name, probe) in &self.probes {
            tracing::debug!("Closing pool '{}'", name);
            probe.close().await;
        }
    }
}
