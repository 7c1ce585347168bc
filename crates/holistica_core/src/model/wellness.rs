//! Emotional wellness domain model.
//!
//! # Responsibility
//! - Define the five-level emotion scale used by the daily check-in.
//! - Define the seeded weekly mood history and the free-text wellness note.
//!
//! # Invariants
//! - Emotion values are constrained to 1..=5.
//! - The selected emotion and the weekly history are independent state; the
//!   selector never rewrites the history.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Five-step emotion scale, ordered best (5) to worst (1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionLevel {
    Excellent,
    Good,
    Regular,
    Bad,
    VeryBad,
}

impl EmotionLevel {
    /// Numeric value on the 1..=5 check-in scale.
    pub fn value(self) -> u8 {
        match self {
            Self::Excellent => 5,
            Self::Good => 4,
            Self::Regular => 3,
            Self::Bad => 2,
            Self::VeryBad => 1,
        }
    }

    /// Maps a 1..=5 slider value back to a level.
    ///
    /// Returns `None` for out-of-range input; the UI slider should make this
    /// unreachable, but the core does not rely on it.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            5 => Some(Self::Excellent),
            4 => Some(Self::Good),
            3 => Some(Self::Regular),
            2 => Some(Self::Bad),
            1 => Some(Self::VeryBad),
            _ => None,
        }
    }

    /// Spanish display label matching the product UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excelente",
            Self::Good => "Bueno",
            Self::Regular => "Regular",
            Self::Bad => "Malo",
            Self::VeryBad => "Muy Malo",
        }
    }
}

/// One day of the seeded weekly mood history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMood {
    /// Abbreviated Spanish day label ("Lun", "Mar", ...).
    pub day: String,
    pub level: EmotionLevel,
}

impl DailyMood {
    pub fn new(day: impl Into<String>, level: EmotionLevel) -> Self {
        Self {
            day: day.into(),
            level,
        }
    }
}

/// Detailed check-in note: free text plus energy and stress sliders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellnessNote {
    pub feeling: String,
    /// Energy slider value, 1..=5.
    pub energy_level: u8,
    /// Stress slider value, 1..=5.
    pub stress_level: u8,
}

/// Validation failures for a wellness note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WellnessNoteError {
    /// Free-text feeling is blank after trim.
    BlankFeeling,
    /// A slider value fell outside 1..=5.
    LevelOutOfRange { field: &'static str, value: u8 },
}

impl Display for WellnessNoteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankFeeling => write!(f, "wellness note feeling must not be blank"),
            Self::LevelOutOfRange { field, value } => {
                write!(f, "wellness note {field} must be 1..=5, got {value}")
            }
        }
    }
}

impl Error for WellnessNoteError {}

impl WellnessNote {
    /// Checks the detailed check-in preconditions.
    pub fn validate(&self) -> Result<(), WellnessNoteError> {
        if self.feeling.trim().is_empty() {
            return Err(WellnessNoteError::BlankFeeling);
        }
        for (field, value) in [
            ("energy_level", self.energy_level),
            ("stress_level", self.stress_level),
        ] {
            if !(1..=5).contains(&value) {
                return Err(WellnessNoteError::LevelOutOfRange { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{EmotionLevel, WellnessNote, WellnessNoteError};

    #[test]
    fn value_round_trips_through_from_value() {
        for value in 1..=5u8 {
            let level = EmotionLevel::from_value(value).expect("value in range");
            assert_eq!(level.value(), value);
        }
        assert_eq!(EmotionLevel::from_value(0), None);
        assert_eq!(EmotionLevel::from_value(6), None);
    }

    #[test]
    fn note_validation_catches_blank_feeling_and_bad_levels() {
        let note = WellnessNote {
            feeling: "  ".to_string(),
            energy_level: 3,
            stress_level: 3,
        };
        assert_eq!(note.validate(), Err(WellnessNoteError::BlankFeeling));

        let note = WellnessNote {
            feeling: "Cansado pero motivado".to_string(),
            energy_level: 0,
            stress_level: 3,
        };
        assert_eq!(
            note.validate(),
            Err(WellnessNoteError::LevelOutOfRange {
                field: "energy_level",
                value: 0
            })
        );
    }
}
