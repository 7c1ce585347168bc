//! Scripted responder state machine.
//!
//! # Responsibility
//! - Append accepted outbound messages immediately and schedule exactly one
//!   assistant reply per message after a fixed delay.
//! - Materialize due replies when polled with the caller's clock value.
//!
//! # Invariants
//! - Blank (whitespace-only) submissions change nothing.
//! - Pending replies are keyed by the triggering message identifier and can
//!   be cancelled until they come due.
//! - Rapid consecutive sends each schedule an independent reply; replies are
//!   appended oldest-due first.
//! - The transcript is never re-sorted; timestamps are informational.

use crate::assistant::strategy::ResponseStrategy;
use crate::model::chat::{ChatMessage, MessageId, Sender};
use log::{debug, info};

/// Fixed latency between an accepted message and its scheduled reply.
pub const REPLY_DELAY_MS: i64 = 1_000;

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingReply {
    trigger_id: MessageId,
    due_at_ms: i64,
}

/// Chat transcript plus the idle/awaiting-reply machine.
///
/// Generic over the reply-selection strategy so the product wires a canned
/// pool while tests inject deterministic strategies.
#[derive(Debug, Clone)]
pub struct ScriptedResponder<S: ResponseStrategy> {
    strategy: S,
    transcript: Vec<ChatMessage>,
    pending: Vec<PendingReply>,
}

impl<S: ResponseStrategy> ScriptedResponder<S> {
    /// Creates a responder with an empty transcript.
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            transcript: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Creates a responder whose transcript starts with an assistant greeting,
    /// matching both product call sites.
    pub fn with_greeting(strategy: S, greeting: &str, now_ms: i64) -> Self {
        let mut responder = Self::new(strategy);
        responder
            .transcript
            .push(ChatMessage::new(Sender::Assistant, greeting, now_ms));
        responder
    }

    /// Submits one outbound message.
    ///
    /// # Contract
    /// - Blank input after trim is a silent no-op returning `None`.
    /// - Otherwise the user message is appended immediately and exactly one
    ///   reply is scheduled at `now_ms + REPLY_DELAY_MS`, keyed by the
    ///   returned message identifier.
    pub fn send_message(&mut self, text: &str, now_ms: i64) -> Option<MessageId> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!("event=message_rejected module=assistant status=noop reason=blank");
            return None;
        }

        let message = ChatMessage::new(Sender::User, trimmed, now_ms);
        let id = message.id;
        self.transcript.push(message);
        self.pending.push(PendingReply {
            trigger_id: id,
            due_at_ms: now_ms + REPLY_DELAY_MS,
        });

        info!(
            "event=message_sent module=assistant status=ok message_id={id} pending={}",
            self.pending.len()
        );
        Some(id)
    }

    /// Appends every reply due at `now_ms`, oldest first.
    ///
    /// Returns the identifiers of the appended assistant messages. Replies
    /// not yet due stay pending.
    pub fn poll_due(&mut self, now_ms: i64) -> Vec<MessageId> {
        let mut appended = Vec::new();
        // Pending entries are in submission order and share a fixed delay, so
        // draining front-to-back is also oldest-due-first.
        let mut index = 0;
        while index < self.pending.len() {
            if self.pending[index].due_at_ms <= now_ms {
                let due = self.pending.remove(index);
                let text = self.strategy.next_reply(&self.transcript);
                let reply = ChatMessage::new(Sender::Assistant, text, now_ms);
                info!(
                    "event=reply_appended module=assistant status=ok trigger_id={} reply_id={}",
                    due.trigger_id, reply.id
                );
                appended.push(reply.id);
                self.transcript.push(reply);
            } else {
                index += 1;
            }
        }
        appended
    }

    /// Cancels the still-pending reply for a triggering message.
    ///
    /// Returns `false` when no pending reply matches (already delivered,
    /// already cancelled, or unknown identifier).
    pub fn cancel_reply(&mut self, trigger_id: MessageId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|entry| entry.trigger_id != trigger_id);
        let cancelled = self.pending.len() < before;
        if cancelled {
            info!("event=reply_cancelled module=assistant status=ok trigger_id={trigger_id}");
        }
        cancelled
    }

    /// Whether at least one reply is scheduled but not yet delivered.
    pub fn is_awaiting_reply(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Number of scheduled, undelivered replies.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Full transcript in append order.
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }
}

#[cfg(test)]
mod tests {
    use super::{ScriptedResponder, REPLY_DELAY_MS};
    use crate::assistant::strategy::ResponseStrategy;
    use crate::model::chat::ChatMessage;

    struct FixedReply;

    impl ResponseStrategy for FixedReply {
        fn next_reply(&mut self, _transcript: &[ChatMessage]) -> String {
            "respuesta".to_string()
        }
    }

    #[test]
    fn reply_is_not_due_before_the_delay_elapses() {
        let mut responder = ScriptedResponder::new(FixedReply);
        responder.send_message("hola", 0).expect("message accepted");

        assert!(responder.poll_due(REPLY_DELAY_MS - 1).is_empty());
        assert!(responder.is_awaiting_reply());

        let appended = responder.poll_due(REPLY_DELAY_MS);
        assert_eq!(appended.len(), 1);
        assert!(!responder.is_awaiting_reply());
    }
}
