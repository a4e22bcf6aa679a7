//! Startup sequence configuration types.

use serde::{Deserialize, Serialize};

/// Boot animation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootAnimationConfig {
    pub enabled: bool,
    /// Delay between boot log lines in milliseconds (valid range: 10-5000).
    pub step_interval_ms: u32,
    /// Pause after the last line before the shell opens (valid range: 0-10000).
    pub settle_delay_ms: u32,
}

impl Default for BootAnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            step_interval_ms: 400,
            settle_delay_ms: 1000,
        }
    }
}

/// Fast-start mode settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FastStartConfig {
    pub enabled: bool,
}

/// Startup sequence configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupConfig {
    pub boot_animation: BootAnimationConfig,
    pub fast_start: FastStartConfig,
}
