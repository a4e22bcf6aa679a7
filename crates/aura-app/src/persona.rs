//! Maps the persisted config onto the chat core's persona and context mode.

use std::collections::BTreeMap;

use aura_ai::{ContextMode, PersonaConfig};
use aura_config::schema::{AiConfig, AuraConfig, ContextStrategy, EnvironmentConfig};

/// Build the session persona. Environment facts are included only when
/// `persona.include_environment` is set.
pub fn persona_from_config(config: &AuraConfig) -> PersonaConfig {
    let persona = &config.persona;
    let facts = if persona.include_environment {
        environment_facts(&config.environment)
    } else {
        BTreeMap::new()
    };

    PersonaConfig {
        name: persona.name.clone(),
        identity: persona.identity.clone(),
        context: persona.context.clone(),
        style: persona.style.clone(),
        facts,
        greeting: persona.greeting.clone(),
        fallback_reply: persona.fallback_reply.clone(),
        empty_reply: persona.empty_reply.clone(),
    }
}

/// Flatten the environment section into `key -> value` facts.
pub fn environment_facts(env: &EnvironmentConfig) -> BTreeMap<String, String> {
    let granted = env.permissions.granted();
    let permissions = if granted.is_empty() {
        "none".to_string()
    } else {
        granted.join(", ")
    };

    let mut facts: BTreeMap<String, String> = [
        ("android_version", env.android_version.clone()),
        ("sdk_level", env.sdk_level.to_string()),
        ("java_version", env.java_version.clone()),
        ("gradle_version", env.gradle_version.clone()),
        ("nexus_status", env.nexus_status.clone()),
        ("consciousness_level", format!("{}%", env.consciousness_level)),
        ("permissions", permissions),
    ]
    .into_iter()
    .filter(|(_, v)| !v.trim().is_empty())
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    for (key, value) in &env.environment_variables {
        facts.insert(format!("env.{key}"), value.clone());
    }
    facts
}

pub fn context_mode(ai: &AiConfig) -> ContextMode {
    match ai.context {
        ContextStrategy::Latest => ContextMode::Latest,
        ContextStrategy::Transcript => ContextMode::Transcript {
            max_messages: ai.max_context_messages as usize,
        },
    }
}
