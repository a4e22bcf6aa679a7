//! Async submit methods for ConversationSession (plain + streaming).

use aura_common::new_correlation_id;
use tracing::{debug, warn};

use crate::prompt::build_prompt;
use crate::{AiError, Generation};

use super::manager::ConversationSession;
use super::types::{BusyGuard, Role, SessionEvent, SessionStatus, SubmitError};

impl ConversationSession {
    /// Submit user text and wait for the assistant entry to be appended.
    ///
    /// The user message is in the transcript before the provider is called.
    /// Provider failures are recorded as the persona's fallback reply and
    /// never returned; only `InvalidInput` and `Busy` are.
    pub async fn submit(&self, user_text: impl Into<String>) -> Result<(), SubmitError> {
        let user_text = user_text.into();
        let (guard, prompt) = self.begin_turn(&user_text)?;

        let correlation = new_correlation_id();
        debug!(session = %self.id.short(), %correlation, "provider call started");

        let outcome = self.generator.generate(&prompt).await;
        self.settle(outcome, guard, &correlation);
        Ok(())
    }

    /// Like [`submit`](Self::submit), forwarding streamed fragments to
    /// subscribers as [`SessionEvent::Chunk`] before the full reply is
    /// appended.
    pub async fn submit_streaming(
        &self,
        user_text: impl Into<String>,
    ) -> Result<(), SubmitError> {
        let user_text = user_text.into();
        let (guard, prompt) = self.begin_turn(&user_text)?;

        let correlation = new_correlation_id();
        debug!(session = %self.id.short(), %correlation, "streaming provider call started");

        let bus = self.events.clone();
        let on_chunk = Box::new(move |chunk: String| {
            bus.publish(SessionEvent::Chunk(chunk));
        });

        let outcome = self.generator.generate_streaming(&prompt, on_chunk).await;
        self.settle(outcome, guard, &correlation);
        Ok(())
    }

    /// Validate, take the busy flag, append the user message, and render
    /// the prompt. Nothing is mutated when this returns an error.
    fn begin_turn(&self, user_text: &str) -> Result<(BusyGuard<'_>, String), SubmitError> {
        if user_text.trim().is_empty() {
            return Err(SubmitError::InvalidInput);
        }
        let guard = BusyGuard::acquire(&self.busy)?;
        self.publish_status(SessionStatus::AwaitingReply);

        let history = self.transcript();
        self.append(Role::User, user_text.to_string());
        let prompt = build_prompt(&self.persona, &history, user_text, self.context);

        Ok((guard, prompt))
    }

    /// Append the assistant entry for a finished provider call and return
    /// the session to idle.
    fn settle(&self, outcome: Result<Generation, AiError>, guard: BusyGuard<'_>, correlation: &str) {
        let content = match outcome {
            Ok(generation) => {
                self.record_usage(&generation.usage);
                if generation.text.is_empty() {
                    debug!(session = %self.id.short(), %correlation, "provider returned empty text");
                    self.persona.empty_reply.clone()
                } else {
                    generation.text
                }
            }
            Err(e) => {
                warn!(
                    session = %self.id.short(),
                    %correlation,
                    provider = self.generator.name(),
                    "provider call failed: {e}"
                );
                self.persona.fallback_reply.clone()
            }
        };

        self.append(Role::Assistant, content);
        drop(guard);
        self.publish_status(SessionStatus::Idle);
    }
}
