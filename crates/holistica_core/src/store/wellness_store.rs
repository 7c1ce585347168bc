//! Emotional wellness store.
//!
//! # Responsibility
//! - Hold today's selected emotion, the seeded weekly mood history, and the
//!   append-only list of detailed check-in notes.
//!
//! # Invariants
//! - Selecting an emotion replaces the single selected value and never
//!   rewrites the weekly history; the two are deliberately independent.
//! - Notes are append-only and validated before insertion.

use crate::model::wellness::{DailyMood, EmotionLevel, WellnessNote, WellnessNoteError};
use log::info;

/// State holder for the wellness page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WellnessStore {
    selected: Option<EmotionLevel>,
    weekly: Vec<DailyMood>,
    notes: Vec<WellnessNote>,
}

impl WellnessStore {
    /// Creates the store with no selection and the product fixture history.
    pub fn seed() -> Self {
        Self {
            selected: None,
            weekly: seed_weekly_history(),
            notes: Vec::new(),
        }
    }

    /// Replaces today's selected emotion.
    pub fn select_emotion(&mut self, level: EmotionLevel) {
        self.selected = Some(level);
        info!(
            "event=emotion_selected module=wellness_store status=ok value={}",
            level.value()
        );
    }

    /// Today's selection, if any.
    pub fn selected(&self) -> Option<EmotionLevel> {
        self.selected
    }

    /// Seeded weekly mood history, Monday first.
    pub fn weekly_history(&self) -> &[DailyMood] {
        &self.weekly
    }

    /// Validates and appends one detailed check-in note.
    ///
    /// # Errors
    /// - Returns `WellnessNoteError` for a blank feeling or out-of-range
    ///   slider values; the note list is unchanged in that case.
    pub fn record_note(&mut self, note: WellnessNote) -> Result<(), WellnessNoteError> {
        note.validate()?;
        self.notes.push(note);
        info!(
            "event=wellness_note_recorded module=wellness_store status=ok total={}",
            self.notes.len()
        );
        Ok(())
    }

    /// Recorded notes in insertion order.
    pub fn notes(&self) -> &[WellnessNote] {
        &self.notes
    }
}

fn seed_weekly_history() -> Vec<DailyMood> {
    vec![
        DailyMood::new("Lun", EmotionLevel::Good),
        DailyMood::new("Mar", EmotionLevel::Regular),
        DailyMood::new("Mié", EmotionLevel::Excellent),
        DailyMood::new("Jue", EmotionLevel::Good),
        DailyMood::new("Vie", EmotionLevel::Good),
        DailyMood::new("Sáb", EmotionLevel::Excellent),
        DailyMood::new("Dom", EmotionLevel::Regular),
    ]
}

#[cfg(test)]
mod tests {
    use super::WellnessStore;
    use crate::model::wellness::EmotionLevel;

    #[test]
    fn seed_has_seven_days_and_no_selection() {
        let store = WellnessStore::seed();
        assert_eq!(store.weekly_history().len(), 7);
        assert_eq!(store.selected(), None);

        let values: Vec<u8> = store
            .weekly_history()
            .iter()
            .map(|day| day.level.value())
            .collect();
        assert_eq!(values, vec![4, 3, 5, 4, 4, 5, 3]);
    }

    #[test]
    fn selection_replaces_previous_value() {
        let mut store = WellnessStore::seed();
        store.select_emotion(EmotionLevel::Bad);
        store.select_emotion(EmotionLevel::Excellent);
        assert_eq!(store.selected(), Some(EmotionLevel::Excellent));
    }
}
