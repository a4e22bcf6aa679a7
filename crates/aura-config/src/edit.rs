//! Dotted-key edits (`ai.temperature`, `persona.name`) for `config set`.

use aura_common::ConfigError;
use serde_json::Value;

use crate::schema::AuraConfig;
use crate::validation;

/// Set one config value addressed by a dotted key.
///
/// `raw` is read as a JSON literal when it parses as one (`true`, `0.4`,
/// `"text"`), otherwise as a plain string. The edited config must pass
/// validation; on any error `config` is left unchanged.
pub fn set_value(config: &mut AuraConfig, key: &str, raw: &str) -> Result<(), ConfigError> {
    let segments: Vec<&str> = key.split('.').map(str::trim).collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(unknown_key(key));
    }

    let mut first_err = None;
    for value in candidate_values(raw) {
        match apply(config, key, &segments, value) {
            Ok(updated) => {
                validation::validate(&updated)?;
                *config = updated;
                return Ok(());
            }
            Err(e) => {
                first_err.get_or_insert(e);
            }
        }
    }
    Err(first_err.unwrap_or_else(|| unknown_key(key)))
}

/// Read one config value addressed by a dotted key.
pub fn get_value(config: &AuraConfig, key: &str) -> Option<Value> {
    let root = serde_json::to_value(config).ok()?;
    let segments: Vec<&str> = key.split('.').map(str::trim).collect();
    lookup(&root, &segments).cloned()
}

fn candidate_values(raw: &str) -> Vec<Value> {
    let literal = Value::String(raw.to_string());
    match serde_json::from_str::<Value>(raw) {
        Ok(parsed) if parsed != literal => vec![parsed, literal],
        _ => vec![literal],
    }
}

fn apply(
    config: &AuraConfig,
    key: &str,
    segments: &[&str],
    value: Value,
) -> Result<AuraConfig, ConfigError> {
    let original = serde_json::to_value(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config: {e}")))?;
    let known_before =
        lookup(&original, segments).is_some() || lookup(&schema_shape()?, segments).is_some();

    let (leaf, parents) = segments.split_last().ok_or_else(|| unknown_key(key))?;
    let mut root = original;
    let mut node = &mut root;
    for segment in parents {
        node = node
            .get_mut(*segment)
            .filter(|v| v.is_object())
            .ok_or_else(|| unknown_key(key))?;
    }
    let object = node.as_object_mut().ok_or_else(|| unknown_key(key))?;
    object.insert((*leaf).to_string(), value);

    let updated: AuraConfig = serde_json::from_value(root)
        .map_err(|e| ConfigError::ParseError(format!("invalid value for {key}: {e}")))?;

    // Unknown fields are dropped by serde, so a key that exists neither
    // before nor after the edit does not belong to the schema.
    let after = serde_json::to_value(&updated)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config: {e}")))?;
    if !known_before && lookup(&after, segments).is_none() {
        return Err(unknown_key(key));
    }
    Ok(updated)
}

/// Serialized config with every optional field populated, so keys that
/// are skipped while unset still resolve.
fn schema_shape() -> Result<Value, ConfigError> {
    let mut probe = AuraConfig::default();
    probe.ai.base_url = Some(String::new());
    serde_json::to_value(probe)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config: {e}")))
}

fn lookup<'a>(root: &'a Value, segments: &[&str]) -> Option<&'a Value> {
    segments
        .iter()
        .try_fold(root, |node, segment| node.get(*segment))
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::ValidationError(format!("unknown config key: {key}"))
}
