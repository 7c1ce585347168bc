//! User settings store.
//!
//! # Responsibility
//! - Hold the four settings groups with product defaults.
//! - Provide field-level setters the settings page binds to.
//! - Serialize the full snapshot for the data-export action.
//!
//! # Invariants
//! - Settings reset to defaults on restart; there is no persistence.

use crate::model::settings::{
    AppearanceSettings, FontSize, NotificationSettings, PrivacySettings, ProfileVisibility,
    SettingsSnapshot, Theme, WellnessGoals,
};
use log::info;

/// Notification switch addressed by a setter call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationChannel {
    TaskReminders,
    WellnessReminders,
    MealReminders,
    CourseUpdates,
    WeeklyReports,
    EmailNotifications,
}

/// State holder for the settings page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SettingsStore {
    snapshot: SettingsSnapshot,
}

impl SettingsStore {
    /// Creates the store with product defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> &NotificationSettings {
        &self.snapshot.notifications
    }

    pub fn privacy(&self) -> &PrivacySettings {
        &self.snapshot.privacy
    }

    pub fn appearance(&self) -> &AppearanceSettings {
        &self.snapshot.appearance
    }

    pub fn wellness_goals(&self) -> &WellnessGoals {
        &self.snapshot.wellness_goals
    }

    /// Full snapshot, the unit of export.
    pub fn snapshot(&self) -> &SettingsSnapshot {
        &self.snapshot
    }

    /// Sets one notification switch.
    pub fn set_notification(&mut self, channel: NotificationChannel, enabled: bool) {
        let switches = &mut self.snapshot.notifications;
        match channel {
            NotificationChannel::TaskReminders => switches.task_reminders = enabled,
            NotificationChannel::WellnessReminders => switches.wellness_reminders = enabled,
            NotificationChannel::MealReminders => switches.meal_reminders = enabled,
            NotificationChannel::CourseUpdates => switches.course_updates = enabled,
            NotificationChannel::WeeklyReports => switches.weekly_reports = enabled,
            NotificationChannel::EmailNotifications => switches.email_notifications = enabled,
        }
        info!(
            "event=settings_updated module=settings_store status=ok group=notifications enabled={enabled}"
        );
    }

    pub fn set_profile_visibility(&mut self, visibility: ProfileVisibility) {
        self.snapshot.privacy.profile_visibility = visibility;
    }

    pub fn set_data_sharing(&mut self, enabled: bool) {
        self.snapshot.privacy.data_sharing = enabled;
    }

    pub fn set_analytics_tracking(&mut self, enabled: bool) {
        self.snapshot.privacy.analytics_tracking = enabled;
    }

    pub fn set_location_services(&mut self, enabled: bool) {
        self.snapshot.privacy.location_services = enabled;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.snapshot.appearance.theme = theme;
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.snapshot.appearance.language = language.into();
    }

    pub fn set_font_size(&mut self, font_size: FontSize) {
        self.snapshot.appearance.font_size = font_size;
    }

    pub fn set_compact_mode(&mut self, enabled: bool) {
        self.snapshot.appearance.compact_mode = enabled;
    }

    pub fn set_wellness_goals(&mut self, goals: WellnessGoals) {
        self.snapshot.wellness_goals = goals;
    }

    /// Serializes the snapshot as pretty JSON for the export action.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.snapshot)
    }
}
