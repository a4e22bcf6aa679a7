//! Persona configuration and prompt construction.
//!
//! `build_prompt` is a pure function of the persona, the prior transcript
//! and the new user text, so prompt shaping is testable without a provider.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::session::{Message, Role};

/// Caller-supplied persona facts. Immutable for the life of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonaConfig {
    /// Speaker label for assistant lines in the prompt.
    pub name: String,
    pub identity: String,
    pub context: String,
    pub style: String,
    /// Environment facts rendered as `- key: value` lines.
    pub facts: BTreeMap<String, String>,
    /// Seed assistant message. Empty means no seed.
    pub greeting: String,
    /// Assistant text recorded when the provider fails.
    pub fallback_reply: String,
    /// Assistant text recorded when the provider returns no text.
    pub empty_reply: String,
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            name: "Assistant".to_string(),
            identity: String::new(),
            context: String::new(),
            style: String::new(),
            facts: BTreeMap::new(),
            greeting: String::new(),
            fallback_reply: "The assistant could not be reached. Please try again.".to_string(),
            empty_reply: "(no reply)".to_string(),
        }
    }
}

impl PersonaConfig {
    pub fn with_fact(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.facts.insert(key.into(), value.into());
        self
    }
}

/// How much of the conversation is sent with each prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContextMode {
    /// Only the newest user text.
    #[default]
    Latest,
    /// The prior transcript, capped to the last `max_messages` entries.
    Transcript { max_messages: usize },
}

/// Render the provider prompt.
///
/// `history` is the transcript as it stood before `user_text` was appended.
pub fn build_prompt(
    persona: &PersonaConfig,
    history: &[Message],
    user_text: &str,
    mode: ContextMode,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    push_field(&mut lines, "Identity", &persona.identity);
    push_field(&mut lines, "Context", &persona.context);
    push_field(&mut lines, "Style", &persona.style);

    if !persona.facts.is_empty() {
        lines.push("Environment:".to_string());
        for (key, value) in &persona.facts {
            lines.push(format!("- {key}: {value}"));
        }
    }

    if let ContextMode::Transcript { max_messages } = mode {
        let skip = history.len().saturating_sub(max_messages);
        let recent = &history[skip..];
        if !recent.is_empty() {
            lines.push("Conversation:".to_string());
            for msg in recent {
                let speaker = match msg.role {
                    Role::User => "User",
                    Role::Assistant => persona.name.as_str(),
                };
                lines.push(format!("{speaker}: {}", msg.content.trim()));
            }
        }
    }

    lines.push(format!("User: {}", user_text.trim()));
    lines.join("\n")
}

fn push_field(lines: &mut Vec<String>, label: &str, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        lines.push(format!("{label}: {value}"));
    }
}
