//! Scripted virtual assistant.
//!
//! # Responsibility
//! - Own the chat transcript and the two-state reply machine
//!   (idle / awaiting reply).
//! - Keep reply-text selection behind an injectable strategy so tests can
//!   substitute deterministic implementations.
//!
//! # Invariants
//! - The transcript is append-only and ordered by insertion, never by the
//!   informational timestamp field.
//! - Each accepted outbound message schedules exactly one reply, keyed by the
//!   triggering message identifier and cancellable until due.

pub mod responder;
pub mod strategy;
