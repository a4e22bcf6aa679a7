//! AI provider section.

use serde::{Deserialize, Serialize};

/// How much conversation history accompanies each prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextStrategy {
    /// Only the newest user message.
    #[default]
    Latest,
    /// The running transcript, capped by `max_context_messages`.
    Transcript,
}

/// Text-generation provider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub model: String,
    /// Valid range: 1-65536.
    pub max_tokens: u32,
    /// Valid range: 0.0-2.0.
    pub temperature: f64,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Override for the provider endpoint, mainly for local proxies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    pub context: ContextStrategy,
    /// Valid range: 1-200.
    pub max_context_messages: u32,
    pub streaming: bool,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: "gemini-3-pro-preview".into(),
            max_tokens: 2048,
            temperature: 0.7,
            api_key_env: "GEMINI_API_KEY".into(),
            base_url: None,
            context: ContextStrategy::Latest,
            max_context_messages: 20,
            streaming: false,
        }
    }
}
