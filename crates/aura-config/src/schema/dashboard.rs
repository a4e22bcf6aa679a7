//! Dashboard section: simulated metrics and the rolling thought log.

use serde::{Deserialize, Serialize};

/// Simulated system metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Valid range: 100-60000.
    pub tick_interval_ms: u32,
    /// Starting percentages (valid range: 0-100).
    pub initial_cpu: f64,
    pub initial_ram: f64,
    pub disk: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 2000,
            initial_cpu: 18.0,
            initial_ram: 45.0,
            disk: 32.0,
        }
    }
}

/// Rolling thought log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThoughtsConfig {
    /// Valid range: 100-60000.
    pub interval_ms: u32,
    /// Lines kept on screen (valid range: 1-50).
    pub capacity: u32,
}

impl Default for ThoughtsConfig {
    fn default() -> Self {
        Self {
            interval_ms: 4500,
            capacity: 5,
        }
    }
}
