//! Full configuration validation.
//!
//! Validates numeric ranges and required text. Each section has its own
//! validator; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod helpers;
mod sections;

#[cfg(test)]
mod tests;

use crate::schema::AuraConfig;
use aura_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &AuraConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sections::validate_persona(&mut errors, config);
    sections::validate_environment(&mut errors, config);
    sections::validate_ai(&mut errors, config);
    sections::validate_startup(&mut errors, config);
    sections::validate_dashboard(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
