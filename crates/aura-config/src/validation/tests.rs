//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = AuraConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_empty_fallback_reply() {
    let mut config = AuraConfig::default();
    config.persona.fallback_reply = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("persona.fallback_reply must not be empty"));
}

#[test]
fn catches_temperature_out_of_range() {
    let mut config = AuraConfig::default();
    config.ai.temperature = 2.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("ai.temperature"));
}

#[test]
fn catches_nan_temperature() {
    let mut config = AuraConfig::default();
    config.ai.temperature = f64::NAN;
    assert!(validate(&config).is_err());
}

#[test]
fn catches_zero_max_tokens() {
    let mut config = AuraConfig::default();
    config.ai.max_tokens = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("ai.max_tokens"));
}

#[test]
fn catches_non_http_base_url() {
    let mut config = AuraConfig::default();
    config.ai.base_url = Some("ftp://nexus".into());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("ai.base_url"));

    config.ai.base_url = Some("http://localhost:8080/v1beta/models".into());
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_sdk_level_out_of_range() {
    let mut config = AuraConfig::default();
    config.environment.sdk_level = 7;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("environment.sdk_level"));
}

#[test]
fn catches_consciousness_over_hundred() {
    let mut config = AuraConfig::default();
    config.environment.consciousness_level = 101;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("environment.consciousness_level"));
}

#[test]
fn catches_boot_step_too_fast() {
    let mut config = AuraConfig::default();
    config.startup.boot_animation.step_interval_ms = 1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("startup.boot_animation.step_interval_ms"));
}

#[test]
fn catches_metrics_tick_too_fast() {
    let mut config = AuraConfig::default();
    config.metrics.tick_interval_ms = 10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("metrics.tick_interval_ms"));
}

#[test]
fn catches_thought_capacity_zero() {
    let mut config = AuraConfig::default();
    config.thoughts.capacity = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("thoughts.capacity"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = AuraConfig::default();
    config.ai.max_context_messages = 0;
    config.metrics.disk = 140.0;
    config.persona.name = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("ai.max_context_messages"));
    assert!(err.contains("metrics.disk"));
    assert!(err.contains("persona.name"));
    assert_eq!(err.matches("; ").count(), 2);
}
