//! User profile domain model. Static seed data, read-only.

use serde::{Deserialize, Serialize};

/// The student's profile card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u8,
    pub career: String,
    pub semester: String,
    pub goals: Vec<String>,
}

/// One progress indicator on the profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressArea {
    pub title: String,
    /// Percentage, 0..=100.
    pub value: u8,
    pub description: String,
}
