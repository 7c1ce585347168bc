//! Activity log domain model shown on the assistant page.
//!
//! Entries are seeded; the log is append-only and never reordered.

use serde::{Deserialize, Serialize};

/// Product area an activity entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCategory {
    Academic,
    Wellness,
    Nutrition,
    Courses,
}

impl ActivityCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Academic => "Académico",
            Self::Wellness => "Bienestar",
            Self::Nutrition => "Alimentación",
            Self::Courses => "Cursos",
        }
    }
}

/// One recorded user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: u64,
    pub action: String,
    pub category: ActivityCategory,
    pub details: String,
    /// Unix epoch milliseconds.
    pub timestamp_ms: i64,
}
