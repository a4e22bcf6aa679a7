//! Text-generation provider selection.

use std::sync::Arc;

use async_trait::async_trait;
use aura_ai::{AiError, GeminiClient, GeminiConfig, Generation, TextGenerator};
use aura_config::schema::AiConfig;
use tracing::{info, warn};

/// Build the Gemini configuration from the `[ai]` section.
///
/// The key is read from `ai.api_key_env`, then from the default key
/// variables.
pub fn gemini_config(ai: &AiConfig) -> Result<GeminiConfig, AiError> {
    let base = GeminiConfig::from_env_var(&ai.api_key_env).or_else(|_| GeminiConfig::from_env())?;
    let config = base
        .with_model(ai.model.clone())
        .with_max_tokens(ai.max_tokens)
        .with_temperature(ai.temperature);
    Ok(match &ai.base_url {
        Some(url) => config.with_base_url(url.clone()),
        None => config,
    })
}

/// The configured provider, or an [`OfflineGenerator`] when no key is
/// available so the chat still runs and records fallback replies.
pub fn build_generator(ai: &AiConfig) -> Arc<dyn TextGenerator> {
    match gemini_config(ai).and_then(GeminiClient::new) {
        Ok(client) => {
            info!(model = %ai.model, "gemini provider ready");
            Arc::new(client)
        }
        Err(e) => {
            warn!("provider unavailable, replies will use the fallback: {e}");
            Arc::new(OfflineGenerator::new(e.to_string()))
        }
    }
}

/// Provider stand-in that fails every call with `NotConfigured`.
pub struct OfflineGenerator {
    reason: String,
}

impl OfflineGenerator {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for OfflineGenerator {
    fn name(&self) -> &str {
        "offline"
    }

    async fn generate(&self, _prompt: &str) -> Result<Generation, AiError> {
        Err(AiError::NotConfigured(self.reason.clone()))
    }
}
