//! Per-section validators.

use crate::schema::AuraConfig;

use super::helpers::{validate_non_empty, validate_range, validate_range_f64};

/// Persona replies must exist so provider failures still produce text.
pub(crate) fn validate_persona(errors: &mut Vec<String>, config: &AuraConfig) {
    validate_non_empty(errors, "persona.name", &config.persona.name);
    validate_non_empty(errors, "persona.fallback_reply", &config.persona.fallback_reply);
    validate_non_empty(errors, "persona.empty_reply", &config.persona.empty_reply);
}

pub(crate) fn validate_environment(errors: &mut Vec<String>, config: &AuraConfig) {
    validate_range(
        errors,
        "environment.sdk_level",
        config.environment.sdk_level,
        21,
        40,
    );
    validate_range(
        errors,
        "environment.consciousness_level",
        config.environment.consciousness_level,
        0,
        100,
    );
}

pub(crate) fn validate_ai(errors: &mut Vec<String>, config: &AuraConfig) {
    validate_non_empty(errors, "ai.model", &config.ai.model);
    validate_non_empty(errors, "ai.api_key_env", &config.ai.api_key_env);
    validate_range(errors, "ai.max_tokens", config.ai.max_tokens, 1, 65536);
    validate_range_f64(errors, "ai.temperature", config.ai.temperature, 0.0, 2.0);
    validate_range(
        errors,
        "ai.max_context_messages",
        config.ai.max_context_messages,
        1,
        200,
    );
    if let Some(url) = &config.ai.base_url {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push(format!("ai.base_url = {url} must be an http(s) URL"));
        }
    }
}

pub(crate) fn validate_startup(errors: &mut Vec<String>, config: &AuraConfig) {
    let boot = &config.startup.boot_animation;
    validate_range(
        errors,
        "startup.boot_animation.step_interval_ms",
        boot.step_interval_ms,
        10,
        5000,
    );
    validate_range(
        errors,
        "startup.boot_animation.settle_delay_ms",
        boot.settle_delay_ms,
        0,
        10000,
    );
}

pub(crate) fn validate_dashboard(errors: &mut Vec<String>, config: &AuraConfig) {
    let metrics = &config.metrics;
    validate_range(
        errors,
        "metrics.tick_interval_ms",
        metrics.tick_interval_ms,
        100,
        60000,
    );
    validate_range_f64(errors, "metrics.initial_cpu", metrics.initial_cpu, 0.0, 100.0);
    validate_range_f64(errors, "metrics.initial_ram", metrics.initial_ram, 0.0, 100.0);
    validate_range_f64(errors, "metrics.disk", metrics.disk, 0.0, 100.0);

    validate_range(
        errors,
        "thoughts.interval_ms",
        config.thoughts.interval_ms,
        100,
        60000,
    );
    validate_range(errors, "thoughts.capacity", config.thoughts.capacity, 1, 50);
}
