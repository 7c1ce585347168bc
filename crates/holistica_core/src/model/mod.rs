//! Domain model for the student wellness and productivity core.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one model shape per page-level concern (tasks, meals, wellness,
//!   chat, courses, profile, settings).
//!
//! # Invariants
//! - Entities are never hard-deleted; collections only grow or toggle flags.
//! - All models serialize with `snake_case` enum variants on the wire.

pub mod activity;
pub mod chat;
pub mod course;
pub mod meal;
pub mod profile;
pub mod settings;
pub mod task;
pub mod wellness;
