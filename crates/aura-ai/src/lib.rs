//! Conversation engine for AuraOS.
//!
//! Provides:
//! - The `TextGenerator` provider seam and a Gemini implementation
//! - Server-Sent Events parsing for streamed replies
//! - A pure prompt builder driven by `PersonaConfig`
//! - `ConversationSession`, the append-only transcript with a busy guard
//! - Token usage tracking

pub mod gemini;
pub mod prompt;
pub mod session;
pub mod streaming;
pub mod token_tracker;

use async_trait::async_trait;

pub use gemini::{GeminiClient, GeminiConfig};
pub use prompt::{build_prompt, ContextMode, PersonaConfig};
pub use session::{ConversationSession, Message, Role, SessionEvent, SessionStatus, SubmitError};
pub use token_tracker::TokenTracker;

/// Callback receiving each streamed text fragment.
pub type ChunkCallback = Box<dyn Fn(String) + Send + Sync>;

/// A text-generation provider: prompt in, text out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Provider name, used for token accounting and log fields.
    fn name(&self) -> &str;

    async fn generate(&self, prompt: &str) -> Result<Generation, AiError>;

    /// Generate with incremental delivery. Providers without native
    /// streaming deliver the whole reply as a single chunk.
    async fn generate_streaming(
        &self,
        prompt: &str,
        on_chunk: ChunkCallback,
    ) -> Result<Generation, AiError> {
        let generation = self.generate(prompt).await?;
        if !generation.text.is_empty() {
            on_chunk(generation.text.clone());
        }
        Ok(generation)
    }
}

/// The result of one provider call.
#[derive(Debug, Clone, Default)]
pub struct Generation {
    pub text: String,
    pub usage: TokenUsage,
}

impl Generation {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: TokenUsage::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Provider not configured: {0}")]
    NotConfigured(String),
    #[error("Timeout")]
    Timeout,
}
