use holistica_core::metrics::weekly_average;
use holistica_core::{EmotionLevel, WellnessNote, WellnessNoteError, WellnessStore};

#[test]
fn seeded_week_averages_to_four() {
    let store = WellnessStore::seed();
    // Values [4, 3, 5, 4, 4, 5, 3] -> 28 / 7 = 4.
    assert_eq!(weekly_average(store.weekly_history()), 4);
}

#[test]
fn selecting_an_emotion_leaves_the_weekly_history_untouched() {
    let mut store = WellnessStore::seed();
    let history_before = store.weekly_history().to_vec();

    store.select_emotion(EmotionLevel::VeryBad);
    assert_eq!(store.selected(), Some(EmotionLevel::VeryBad));
    assert_eq!(store.weekly_history(), history_before.as_slice());

    store.select_emotion(EmotionLevel::Excellent);
    assert_eq!(store.selected(), Some(EmotionLevel::Excellent));
    assert_eq!(store.weekly_history(), history_before.as_slice());
}

#[test]
fn every_slider_value_maps_to_a_labelled_level() {
    let expected = [
        (5, "Excelente"),
        (4, "Bueno"),
        (3, "Regular"),
        (2, "Malo"),
        (1, "Muy Malo"),
    ];
    for (value, label) in expected {
        let level = EmotionLevel::from_value(value).expect("slider values are 1..=5");
        assert_eq!(level.label(), label);
    }
}

#[test]
fn detailed_note_is_validated_before_append() {
    let mut store = WellnessStore::seed();

    let blank = WellnessNote {
        feeling: "".to_string(),
        energy_level: 3,
        stress_level: 3,
    };
    assert_eq!(store.record_note(blank), Err(WellnessNoteError::BlankFeeling));
    assert!(store.notes().is_empty());

    let note = WellnessNote {
        feeling: "Cansada pero avanzando con el proyecto".to_string(),
        energy_level: 4,
        stress_level: 3,
    };
    assert_eq!(store.record_note(note.clone()), Ok(()));
    assert_eq!(store.notes(), &[note]);
}
