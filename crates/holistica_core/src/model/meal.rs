//! Nutrition domain model: daily meals and recommended recipes.
//!
//! # Invariants
//! - The daily meal plan is a fixed seed set; only `completed` is mutable.
//! - Recipes are static reference data with no mutation operations.

use serde::{Deserialize, Serialize};

/// Stable identifier for one meal within the daily plan.
pub type MealId = u64;

/// Slot a meal occupies in the daily plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    /// Spanish display label matching the product UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "desayuno",
            Self::Lunch => "almuerzo",
            Self::Dinner => "cena",
            Self::Snack => "snack",
        }
    }
}

/// One entry of the daily meal plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub id: MealId,
    pub name: String,
    pub slot: MealSlot,
    /// Kilocalories contributed when the meal is marked consumed.
    pub calories: u32,
    pub description: String,
    pub completed: bool,
    /// Scheduled time of day, `HH:MM`.
    pub scheduled_time: String,
}

/// Preparation difficulty of a recommended recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeDifficulty {
    Easy,
    Medium,
    Hard,
}

impl RecipeDifficulty {
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Fácil",
            Self::Medium => "Medio",
            Self::Hard => "Difícil",
        }
    }
}

/// Static recommended recipe shown on the nutrition page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u64,
    pub name: String,
    /// Emoji placeholder used instead of a real image asset.
    pub image: String,
    pub cook_time: String,
    pub difficulty: RecipeDifficulty,
    pub calories: u32,
    pub ingredients: u32,
    pub rating: f32,
    pub description: String,
}
