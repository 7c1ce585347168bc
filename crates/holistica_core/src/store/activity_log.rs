//! Activity log store for the assistant page.
//!
//! Seed entries carry timestamps relative to a caller-supplied "now" so the
//! page renders plausible recent history without a wall clock in core.

use crate::model::activity::{ActivityCategory, ActivityEntry};

const HOUR_MS: i64 = 3_600_000;

/// State holder for the assistant activity tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
}

impl ActivityLog {
    /// Creates the log preloaded with fixture entries dated back from `now_ms`.
    pub fn seed(now_ms: i64) -> Self {
        Self {
            entries: vec![
                ActivityEntry {
                    id: 1,
                    action: "Tarea completada".to_string(),
                    category: ActivityCategory::Academic,
                    details: "Ensayo de Filosofía marcado como completado".to_string(),
                    timestamp_ms: now_ms - HOUR_MS,
                },
                ActivityEntry {
                    id: 2,
                    action: "Estado emocional registrado".to_string(),
                    category: ActivityCategory::Wellness,
                    details: "Nivel de estrés: 3/5, Energía: 4/5".to_string(),
                    timestamp_ms: now_ms - 2 * HOUR_MS,
                },
                ActivityEntry {
                    id: 3,
                    action: "Receta guardada".to_string(),
                    category: ActivityCategory::Nutrition,
                    details: "Ensalada mediterránea añadida a favoritos".to_string(),
                    timestamp_ms: now_ms - 3 * HOUR_MS,
                },
            ],
        }
    }

    /// Entries newest first, matching the page layout.
    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::ActivityLog;

    #[test]
    fn seed_entries_are_dated_back_from_now() {
        let log = ActivityLog::seed(10 * 3_600_000);
        assert_eq!(log.entries().len(), 3);
        assert!(log
            .entries()
            .windows(2)
            .all(|pair| pair[0].timestamp_ms > pair[1].timestamp_ms));
    }
}
