//! Course catalog domain model.
//!
//! University courses, external training, and aggregate study stats are all
//! static seed data; no mutation operations exist for them.

use serde::{Deserialize, Serialize};

/// One enrolled university course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniversityCourse {
    pub id: u64,
    pub name: String,
    pub objective: String,
    pub schedule: String,
    pub university: String,
    /// Letter grade such as "A-" or "B+".
    pub grade: String,
    pub pending_tasks: u32,
    pub professor: String,
    /// Completion percentage, 0..=100.
    pub progress: u8,
}

/// Format of an external training offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseKind {
    Course,
    Workshop,
    Certification,
}

impl CourseKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Course => "Curso",
            Self::Workshop => "Taller",
            Self::Certification => "Certificación",
        }
    }
}

/// Entry difficulty of an external training offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseDifficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseDifficulty {
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Principiante",
            Self::Intermediate => "Intermedio",
            Self::Advanced => "Avanzado",
        }
    }
}

/// One external (non-university) training offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalCourse {
    pub id: u64,
    pub name: String,
    pub provider: String,
    pub kind: CourseKind,
    pub duration: String,
    pub difficulty: CourseDifficulty,
    /// Completion percentage, 0..=100.
    pub progress: u8,
    pub category: String,
    pub rating: f32,
}

/// Aggregate study statistics shown on the courses page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyStats {
    pub weekly_hours: u32,
    pub completed_courses: u32,
    pub average_grade: f32,
    pub study_streak_days: u32,
}
