use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Application-level lifecycle events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    BootCompleted,
    ConfigSaved,
    Notification(String),
    Shutdown,
    #[serde(other)]
    Unknown,
}

/// Broadcast fan-out for any cloneable event type.
///
/// Publishing never blocks; slow subscribers observe `Lagged` on their
/// receiver instead of stalling the publisher. Clones share one channel.
#[derive(Clone)]
pub struct EventBus<E: Clone = Event> {
    sender: broadcast::Sender<E>,
}

impl<E: Clone> EventBus<E> {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<E> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: E) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
