//! TextGenerator implementation for GeminiClient (generate + streaming).

use async_trait::async_trait;
use tracing::debug;

use crate::streaming::{parse_sse_stream, SseEvent};
use crate::{AiError, ChunkCallback, Generation, TextGenerator};

use super::client::{append_candidate_text, parse_usage, GeminiClient};

impl GeminiClient {
    /// POST the prompt and map transport-level failures onto `AiError`.
    async fn post(&self, prompt: &str, stream: bool) -> Result<reqwest::Response, AiError> {
        let body = self.build_request_body(prompt);
        let url = self.api_url(stream);

        debug!(model = %self.config.model, stream, "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiError::Timeout
                } else {
                    AiError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }
        Ok(response)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<Generation, AiError> {
        let response = self.post(prompt, false).await?;

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        self.parse_response(&json)
    }

    async fn generate_streaming(
        &self,
        prompt: &str,
        on_chunk: ChunkCallback,
    ) -> Result<Generation, AiError> {
        let response = self.post(prompt, true).await?;

        let mut generation = Generation::default();

        parse_sse_stream(response, |event: SseEvent| {
            let Ok(data) = serde_json::from_str::<serde_json::Value>(&event.data) else {
                return;
            };

            let mut chunk = String::new();
            if let Some(candidates) = data["candidates"].as_array() {
                for candidate in candidates {
                    append_candidate_text(candidate, &mut chunk);
                }
            }
            if let Some(usage) = parse_usage(&data) {
                generation.usage = usage;
            }

            if !chunk.is_empty() {
                generation.text.push_str(&chunk);
                on_chunk(chunk);
            }
        })
        .await?;

        Ok(generation)
    }
}
