//! Session struct, construction, and read access.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use aura_common::{EventBus, SessionId};
use tokio::sync::broadcast;
use tracing::info;

use crate::prompt::{ContextMode, PersonaConfig};
use crate::token_tracker::TokenTracker;
use crate::{TextGenerator, TokenUsage};

use super::types::{Message, Role, SessionEvent, SessionStatus};

const EVENT_CAPACITY: usize = 256;

/// A conversation with one provider: an append-only transcript guarded so
/// that at most one provider call is in flight.
pub struct ConversationSession {
    pub(super) id: SessionId,
    /// Ordered transcript, oldest first.
    pub(super) transcript: Mutex<Vec<Message>>,
    pub(super) persona: PersonaConfig,
    pub(super) context: ContextMode,
    pub(super) generator: Arc<dyn TextGenerator>,
    pub(super) tracker: Mutex<TokenTracker>,
    pub(super) events: EventBus<SessionEvent>,
    /// Set while a provider call is outstanding.
    pub(super) busy: AtomicBool,
}

impl ConversationSession {
    /// Create a session seeded with the persona greeting (when non-empty).
    pub fn new(generator: Arc<dyn TextGenerator>, persona: PersonaConfig) -> Self {
        let mut transcript = Vec::new();
        if !persona.greeting.trim().is_empty() {
            transcript.push(Message::assistant(persona.greeting.clone()));
        }

        let id = SessionId::new();
        info!(session = %id.short(), provider = generator.name(), "conversation session opened");

        Self {
            id,
            transcript: Mutex::new(transcript),
            persona,
            context: ContextMode::default(),
            generator,
            tracker: Mutex::new(TokenTracker::new()),
            events: EventBus::new(EVENT_CAPACITY),
            busy: AtomicBool::new(false),
        }
    }

    pub fn with_context_mode(mut self, mode: ContextMode) -> Self {
        self.context = mode;
        self
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn persona(&self) -> &PersonaConfig {
        &self.persona
    }

    pub fn context_mode(&self) -> ContextMode {
        self.context
    }

    /// Snapshot of the transcript. Mutating the returned vector has no
    /// effect on the session.
    pub fn transcript(&self) -> Vec<Message> {
        self.lock_transcript().clone()
    }

    pub fn message_count(&self) -> usize {
        self.lock_transcript().len()
    }

    pub fn last_message(&self) -> Option<Message> {
        self.lock_transcript().last().cloned()
    }

    pub fn status(&self) -> SessionStatus {
        if self.busy.load(Ordering::Acquire) {
            SessionStatus::AwaitingReply
        } else {
            SessionStatus::Idle
        }
    }

    /// Subscribe to transcript and status changes.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Cumulative token usage reported by the provider.
    pub fn usage(&self) -> TokenUsage {
        self.lock_tracker().total()
    }

    /// Number of provider calls that returned successfully.
    pub fn provider_calls(&self) -> u64 {
        self.lock_tracker().call_count()
    }

    /// Append a message, keeping timestamps non-decreasing.
    pub(super) fn append(&self, role: Role, content: String) -> Message {
        let message = {
            let mut transcript = self.lock_transcript();
            let mut message = Message::new(role, content);
            if let Some(last) = transcript.last() {
                if message.timestamp < last.timestamp {
                    message.timestamp = last.timestamp;
                }
            }
            transcript.push(message.clone());
            message
        };
        self.events.publish(SessionEvent::MessageAppended(message.clone()));
        message
    }

    pub(super) fn publish_status(&self, status: SessionStatus) {
        self.events.publish(SessionEvent::StatusChanged(status));
    }

    pub(super) fn record_usage(&self, usage: &TokenUsage) {
        self.lock_tracker().record(usage);
    }

    fn lock_transcript(&self) -> MutexGuard<'_, Vec<Message>> {
        self.transcript.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_tracker(&self) -> MutexGuard<'_, TokenTracker> {
        self.tracker.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
