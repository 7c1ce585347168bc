//! Academic task domain model.
//!
//! # Responsibility
//! - Define the task record and its add-request shape.
//! - Validate draft input before it reaches the store.
//!
//! # Invariants
//! - `id` is assigned by the store from a monotonic counter and never reused.
//! - Tasks are never deleted; only the completion flag is mutable.
//! - `due_date` is an ISO `YYYY-MM-DD` calendar string.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static DUE_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid due date regex"));

/// Stable identifier for one task within its store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = u64;

/// Urgency label attached to every task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Spanish display label matching the product UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "alta",
            Self::Medium => "media",
            Self::Low => "baja",
        }
    }
}

/// One academic task as held by the task store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub subject: String,
    /// ISO `YYYY-MM-DD` calendar date.
    pub due_date: String,
    pub priority: Priority,
    pub completed: bool,
}

/// Validation failures for a task draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskDraftError {
    /// Title is blank after trim.
    BlankTitle,
    /// Subject is blank after trim.
    BlankSubject,
    /// Due date does not match `YYYY-MM-DD`.
    InvalidDueDate(String),
}

impl Display for TaskDraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "task title must not be blank"),
            Self::BlankSubject => write!(f, "task subject must not be blank"),
            Self::InvalidDueDate(value) => {
                write!(f, "task due date must be YYYY-MM-DD, got `{value}`")
            }
        }
    }
}

impl Error for TaskDraftError {}

/// Request model for adding one task.
///
/// The presentation layer disables its save action while a draft is invalid;
/// the store revalidates anyway so the invariant does not depend on callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub subject: String,
    pub due_date: String,
    pub priority: Priority,
}

impl TaskDraft {
    /// Checks the add-task preconditions.
    ///
    /// # Contract
    /// - Title and subject must be non-blank after trim.
    /// - Due date must match `YYYY-MM-DD`.
    /// - Description may be empty.
    pub fn validate(&self) -> Result<(), TaskDraftError> {
        if self.title.trim().is_empty() {
            return Err(TaskDraftError::BlankTitle);
        }
        if self.subject.trim().is_empty() {
            return Err(TaskDraftError::BlankSubject);
        }
        if !DUE_DATE_RE.is_match(self.due_date.trim()) {
            return Err(TaskDraftError::InvalidDueDate(self.due_date.clone()));
        }
        Ok(())
    }
}
