//! AuraOS configuration system.
//!
//! Provides TOML-based configuration for the persona, simulated device
//! environment, AI provider, and dashboard widgets. All config sections use
//! sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use aura_config::{load_config_from, config_to_json};
//!
//! let config = load_config_from(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod edit;
pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

pub use edit::{get_value, set_value};
pub use schema::AuraConfig;
pub use toml_loader::default_config_path;
pub use toml_writer::save_config_to_path;

use aura_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or from the platform default when `None`.
///
/// A missing file is created from the default template. The result is
/// validated.
pub fn load_config_from(path: Option<&Path>) -> Result<AuraConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_or_create(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &AuraConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

/// Serialize a config to the TOML form written to disk.
pub fn config_to_toml(config: &AuraConfig) -> Result<String, ConfigError> {
    toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config to TOML: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = AuraConfig::default();
        let json = config_to_json(&config);
        for section in [
            "persona",
            "environment",
            "ai",
            "startup",
            "metrics",
            "thoughts",
            "logging",
        ] {
            assert!(json.contains(&format!("\"{section}\"")), "missing {section}");
        }
    }

    #[test]
    fn config_to_json_contains_persona_name() {
        let json = config_to_json(&AuraConfig::default());
        assert!(json.contains("\"Aria\""));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = AuraConfig::default();
        let json = config_to_json(&config);
        let parsed: AuraConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn config_to_toml_parses_back() {
        let mut config = AuraConfig::default();
        config
            .environment
            .environment_variables
            .insert("ANDROID_HOME".into(), "/opt/android-sdk".into());
        let toml_str = config_to_toml(&config).unwrap();
        let parsed: AuraConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn load_config_from_explicit_path_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nexus.toml");
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config, AuraConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nexus.toml");
        std::fs::write(&path, "[thoughts]\ncapacity = 0\n").unwrap();
        let result = load_config_from(Some(&path));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
