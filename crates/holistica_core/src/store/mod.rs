//! Per-page entity stores.
//!
//! # Responsibility
//! - Hold one in-memory collection per page-level concern.
//! - Delegate every mutation to a pure update function that takes the prior
//!   collection and returns a new one reflecting exactly one change.
//!
//! # Invariants
//! - Stores are independent; there is no shared or cross-page state.
//! - No entity is ever deleted.
//! - Missing-identifier mutations are silent no-ops, never errors.

pub mod activity_log;
pub mod course_store;
pub mod meal_store;
pub mod profile_store;
pub mod settings_store;
pub mod task_store;
pub mod wellness_store;
