//! Configuration schema types for AuraOS.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the dashboard ships with.

mod ai;
mod dashboard;
mod environment;
mod persona;
mod startup;
mod system;

pub use ai::*;
pub use dashboard::*;
pub use environment::*;
pub use persona::*;
pub use startup::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for AuraOS.
///
/// All options have sensible defaults. Only override what you want to change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuraConfig {
    pub persona: PersonaSchemaConfig,
    pub environment: EnvironmentConfig,
    pub ai: AiConfig,
    pub startup: StartupConfig,
    pub metrics: MetricsConfig,
    pub thoughts: ThoughtsConfig,
    pub logging: LoggingConfig,
}
