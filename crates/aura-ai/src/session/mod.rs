//! Conversation session management.
//!
//! A `ConversationSession` owns an append-only transcript, turns each user
//! submission into exactly one provider call, and records either the reply
//! or a persona fallback. Status moves only between idle and awaiting-reply.

mod chat;
mod manager;
mod types;


pub use manager::ConversationSession;
pub use types::{Message, Role, SessionEvent, SessionStatus, SubmitError};
