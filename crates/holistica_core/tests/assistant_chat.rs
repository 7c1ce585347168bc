use holistica_core::{
    CannedPool, ChatMessage, ResponseStrategy, ScriptedResponder, Sender, REPLY_DELAY_MS,
    WIDGET_GREETING,
};

/// Deterministic strategy cycling through a fixed script.
struct RoundRobin {
    script: Vec<String>,
    cursor: usize,
}

impl RoundRobin {
    fn new(script: &[&str]) -> Self {
        Self {
            script: script.iter().map(|line| line.to_string()).collect(),
            cursor: 0,
        }
    }
}

impl ResponseStrategy for RoundRobin {
    fn next_reply(&mut self, _transcript: &[ChatMessage]) -> String {
        let line = self.script[self.cursor % self.script.len()].clone();
        self.cursor += 1;
        line
    }
}

#[test]
fn blank_and_whitespace_submissions_change_nothing() {
    let mut responder =
        ScriptedResponder::with_greeting(CannedPool::widget_pool(), WIDGET_GREETING, 0);
    let before = responder.transcript().to_vec();

    assert_eq!(responder.send_message("", 0), None);
    assert_eq!(responder.send_message("   ", 0), None);

    assert_eq!(responder.transcript(), before.as_slice());
    assert!(!responder.is_awaiting_reply());
}

#[test]
fn accepted_message_appends_user_now_and_assistant_after_the_delay() {
    let pool = CannedPool::with_seed(CannedPool::widget_pool().replies().to_vec(), 11);
    let candidates = pool.replies().to_vec();

    let mut responder = ScriptedResponder::with_greeting(pool, WIDGET_GREETING, 0);
    let sent = responder.send_message("hola", 0).expect("non-blank message");

    assert_eq!(responder.transcript().len(), 2);
    let user_message = responder.transcript().last().unwrap();
    assert_eq!(user_message.id, sent);
    assert_eq!(user_message.sender, Sender::User);
    assert_eq!(user_message.text, "hola");
    assert!(responder.is_awaiting_reply());

    // Nothing due before the fixed latency elapses.
    assert!(responder.poll_due(REPLY_DELAY_MS - 1).is_empty());

    let appended = responder.poll_due(REPLY_DELAY_MS);
    assert_eq!(appended.len(), 1);
    let reply = responder.transcript().last().unwrap();
    assert_eq!(reply.sender, Sender::Assistant);
    assert!(candidates.contains(&reply.text));
    assert!(!responder.is_awaiting_reply());
}

#[test]
fn rapid_sends_schedule_independent_replies_in_order() {
    let mut responder = ScriptedResponder::new(RoundRobin::new(&["uno", "dos"]));

    responder.send_message("primera", 0).unwrap();
    responder.send_message("segunda", 200).unwrap();
    assert_eq!(responder.pending_count(), 2);

    // Only the first reply is due at t=1000.
    let first_batch = responder.poll_due(REPLY_DELAY_MS);
    assert_eq!(first_batch.len(), 1);
    assert_eq!(responder.transcript().last().unwrap().text, "uno");

    let second_batch = responder.poll_due(200 + REPLY_DELAY_MS);
    assert_eq!(second_batch.len(), 1);
    assert_eq!(responder.transcript().last().unwrap().text, "dos");

    let senders: Vec<Sender> = responder
        .transcript()
        .iter()
        .map(|message| message.sender)
        .collect();
    assert_eq!(
        senders,
        vec![
            Sender::User,
            Sender::User,
            Sender::Assistant,
            Sender::Assistant
        ]
    );
}

#[test]
fn cancelling_before_due_suppresses_the_reply() {
    let mut responder = ScriptedResponder::new(RoundRobin::new(&["uno"]));
    let sent = responder.send_message("hola", 0).unwrap();

    assert!(responder.cancel_reply(sent));
    assert!(!responder.is_awaiting_reply());
    assert!(responder.poll_due(i64::MAX).is_empty());
    assert_eq!(responder.transcript().len(), 1);

    // Second cancel and unknown ids are no-ops.
    assert!(!responder.cancel_reply(sent));
}

#[test]
fn transcript_order_is_append_order_not_timestamp_order() {
    let mut responder = ScriptedResponder::new(RoundRobin::new(&["respuesta"]));

    // Deliberately decreasing clock values; the transcript must still read in
    // submission/arrival order.
    responder.send_message("primera", 5_000).unwrap();
    responder.poll_due(6_000);
    responder.send_message("segunda", 100).unwrap();

    let texts: Vec<&str> = responder
        .transcript()
        .iter()
        .map(|message| message.text.as_str())
        .collect();
    assert_eq!(texts, vec!["primera", "respuesta", "segunda"]);
}

#[test]
fn message_identifiers_are_unique_across_the_transcript() {
    let mut responder = ScriptedResponder::new(RoundRobin::new(&["r1", "r2", "r3"]));
    for text in ["a", "b", "c"] {
        responder.send_message(text, 0).unwrap();
    }
    responder.poll_due(REPLY_DELAY_MS);

    let mut ids: Vec<_> = responder
        .transcript()
        .iter()
        .map(|message| message.id)
        .collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
}
