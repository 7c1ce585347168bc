//! Core domain logic for HOLISTICA, a student wellness and productivity app.
//! This crate is the single source of truth for business invariants.

pub mod assistant;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod store;

pub use assistant::responder::{ScriptedResponder, REPLY_DELAY_MS};
pub use assistant::strategy::{
    CannedPool, ResponseStrategy, ASSISTANT_PAGE_GREETING, WIDGET_GREETING,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::activity::{ActivityCategory, ActivityEntry};
pub use model::chat::{ChatMessage, MessageId, Sender};
pub use model::course::{
    CourseDifficulty, CourseKind, ExternalCourse, StudyStats, UniversityCourse,
};
pub use model::meal::{Meal, MealId, MealSlot, Recipe, RecipeDifficulty};
pub use model::profile::{ProgressArea, UserProfile};
pub use model::settings::{
    AppearanceSettings, FontSize, NotificationSettings, PrivacySettings, ProfileVisibility,
    SettingsSnapshot, Theme, WellnessGoals,
};
pub use model::task::{Priority, Task, TaskDraft, TaskDraftError, TaskId};
pub use model::wellness::{DailyMood, EmotionLevel, WellnessNote, WellnessNoteError};
pub use store::activity_log::ActivityLog;
pub use store::course_store::CourseStore;
pub use store::meal_store::MealStore;
pub use store::profile_store::ProfileStore;
pub use store::settings_store::{NotificationChannel, SettingsStore};
pub use store::task_store::TaskStore;
pub use store::wellness_store::WellnessStore;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
