//! Chat transcript domain model.
//!
//! # Invariants
//! - `id` is a generated stable identifier, decoupled from transcript length.
//! - Messages are append-only; the transcript is ordered by insertion, never
//!   re-sorted by the informational timestamp.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one chat message.
pub type MessageId = Uuid;

/// Origin of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    /// Unix epoch milliseconds at append time. Informational only.
    pub timestamp_ms: i64,
}

impl ChatMessage {
    /// Creates a message with a fresh generated identifier.
    pub fn new(sender: Sender, text: impl Into<String>, timestamp_ms: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender,
            timestamp_ms,
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

#[cfg(test)]
mod tests {
    use super::{ChatMessage, Sender};

    #[test]
    fn new_generates_distinct_ids() {
        let first = ChatMessage::new(Sender::User, "hola", 0);
        let second = ChatMessage::new(Sender::User, "hola", 0);
        assert_ne!(first.id, second.id);
        assert!(first.is_user());
    }
}
