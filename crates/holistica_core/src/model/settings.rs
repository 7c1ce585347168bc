//! User settings domain model.
//!
//! # Responsibility
//! - Define the four settings groups edited on the settings page.
//! - Provide product defaults via `Default` impls.
//!
//! # Invariants
//! - Settings never persist beyond process lifetime; `Default` is the reset
//!   state after every restart.

use serde::{Deserialize, Serialize};

/// Per-channel reminder switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub task_reminders: bool,
    pub wellness_reminders: bool,
    pub meal_reminders: bool,
    pub course_updates: bool,
    pub weekly_reports: bool,
    pub email_notifications: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            task_reminders: true,
            wellness_reminders: true,
            meal_reminders: true,
            course_updates: true,
            weekly_reports: false,
            email_notifications: true,
        }
    }
}

/// Who can see the student's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileVisibility {
    Public,
    Private,
    Friends,
}

/// Privacy switches and visibility choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacySettings {
    pub profile_visibility: ProfileVisibility,
    pub data_sharing: bool,
    pub analytics_tracking: bool,
    pub location_services: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            profile_visibility: ProfileVisibility::Private,
            data_sharing: false,
            analytics_tracking: true,
            location_services: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSize {
    Small,
    Medium,
    Large,
}

/// Visual preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearanceSettings {
    pub theme: Theme,
    /// BCP 47 language tag; the product ships Spanish-first.
    pub language: String,
    pub font_size: FontSize,
    pub compact_mode: bool,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            language: "es".to_string(),
            font_size: FontSize::Medium,
            compact_mode: false,
        }
    }
}

/// Daily/weekly wellness targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellnessGoals {
    pub daily_study_hours: u8,
    pub weekly_exercise_sessions: u8,
    pub sleep_hours: u8,
    /// Milliliters of water per day.
    pub water_intake_ml: u32,
}

impl Default for WellnessGoals {
    fn default() -> Self {
        Self {
            daily_study_hours: 6,
            weekly_exercise_sessions: 3,
            sleep_hours: 8,
            water_intake_ml: 2000,
        }
    }
}

/// Full settings snapshot, the unit of export.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SettingsSnapshot {
    pub notifications: NotificationSettings,
    pub privacy: PrivacySettings,
    pub appearance: AppearanceSettings,
    pub wellness_goals: WellnessGoals,
}
