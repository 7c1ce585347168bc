use holistica_core::metrics::average_progress;
use holistica_core::{
    ActivityCategory, ActivityLog, CourseStore, NotificationChannel, ProfileStore,
    ProfileVisibility, SettingsSnapshot, SettingsStore, Theme, WellnessGoals,
};

#[test]
fn settings_export_round_trips_through_json() {
    let mut store = SettingsStore::new();
    store.set_notification(NotificationChannel::WeeklyReports, true);
    store.set_profile_visibility(ProfileVisibility::Friends);
    store.set_theme(Theme::Dark);
    store.set_wellness_goals(WellnessGoals {
        daily_study_hours: 5,
        weekly_exercise_sessions: 4,
        sleep_hours: 7,
        water_intake_ml: 2500,
    });

    let exported = store.export_json().expect("snapshot serializes");
    let decoded: SettingsSnapshot =
        serde_json::from_str(&exported).expect("exported JSON decodes");

    assert_eq!(&decoded, store.snapshot());
    assert!(decoded.notifications.weekly_reports);
    assert_eq!(decoded.privacy.profile_visibility, ProfileVisibility::Friends);
    assert_eq!(decoded.appearance.theme, Theme::Dark);
    assert_eq!(decoded.wellness_goals.water_intake_ml, 2500);
}

#[test]
fn settings_enums_use_snake_case_wire_names() {
    let exported = SettingsStore::new().export_json().expect("serializes");
    let value: serde_json::Value = serde_json::from_str(&exported).unwrap();

    assert_eq!(value["privacy"]["profile_visibility"], "private");
    assert_eq!(value["appearance"]["theme"], "light");
    assert_eq!(value["appearance"]["font_size"], "medium");
}

#[test]
fn profile_seed_feeds_the_average_progress_metric() {
    let store = ProfileStore::seed();
    assert_eq!(store.profile().name, "Ana Holística");
    assert_eq!(store.progress_areas().len(), 4);
    // (85 + 78 + 70 + 82) / 4 = 78.75 -> 79.
    assert_eq!(average_progress(&store.area_values()), 79);
}

#[test]
fn course_catalog_seed_is_consistent() {
    let store = CourseStore::seed();
    assert!(store
        .university_courses()
        .iter()
        .all(|course| course.progress <= 100));
    assert!(store
        .external_courses()
        .iter()
        .all(|course| course.progress <= 100));
    assert_eq!(store.study_stats().completed_courses, 12);
}

#[test]
fn activity_log_seed_covers_three_product_areas() {
    let log = ActivityLog::seed(1_700_000_000_000);
    let categories: Vec<ActivityCategory> =
        log.entries().iter().map(|entry| entry.category).collect();
    assert_eq!(
        categories,
        vec![
            ActivityCategory::Academic,
            ActivityCategory::Wellness,
            ActivityCategory::Nutrition
        ]
    );
    assert!(log
        .entries()
        .iter()
        .all(|entry| entry.timestamp_ms < 1_700_000_000_000));
}
