//! Derived metrics over entity collections.
//!
//! # Responsibility
//! - Compute aggregate figures on demand from current collections.
//!
//! # Invariants
//! - Every function is pure; nothing here is cached or stored redundantly.
//! - Empty collections yield zero instead of dividing by zero.
//! - Calorie progress is intentionally unclamped: over-target consumption
//!   reads above 100 percent.

use crate::model::meal::Meal;
use crate::model::task::{Priority, Task};
use crate::model::wellness::DailyMood;

/// Daily calorie goal used by the nutrition page, in kilocalories.
pub const DAILY_CALORIE_TARGET: u32 = 2000;

/// Share of completed tasks as a percentage in 0.0..=100.0.
///
/// Defined as 0.0 for an empty collection.
pub fn completion_rate(tasks: &[Task]) -> f64 {
    if tasks.is_empty() {
        return 0.0;
    }
    let completed = tasks.iter().filter(|task| task.completed).count();
    completed as f64 / tasks.len() as f64 * 100.0
}

/// `completion_rate` rounded to the nearest integer for display.
pub fn completion_rate_display(tasks: &[Task]) -> u8 {
    completion_rate(tasks).round() as u8
}

/// Count of pending tasks carrying high priority.
pub fn high_priority_pending(tasks: &[Task]) -> usize {
    tasks
        .iter()
        .filter(|task| !task.completed && task.priority == Priority::High)
        .count()
}

/// Kilocalories summed over meals marked consumed.
pub fn consumed_calories(meals: &[Meal]) -> u32 {
    meals
        .iter()
        .filter(|meal| meal.completed)
        .map(|meal| meal.calories)
        .sum()
}

/// Consumed calories as a percentage of the daily target, unclamped.
///
/// A zero target yields 0.0 rather than a division error.
pub fn calorie_progress_percent(consumed: u32, target: u32) -> f64 {
    if target == 0 {
        return 0.0;
    }
    f64::from(consumed) * 100.0 / f64::from(target)
}

/// Mean of the weekly mood values rounded half-up to an integer 0..=5.
///
/// Defined as 0 for an empty history.
pub fn weekly_average(history: &[DailyMood]) -> u8 {
    if history.is_empty() {
        return 0;
    }
    let sum: u32 = history.iter().map(|day| u32::from(day.level.value())).sum();
    (f64::from(sum) / history.len() as f64).round() as u8
}

/// Mean of a set of progress percentages rounded to the nearest integer.
///
/// Defined as 0 for empty input. Used for course and profile summaries.
pub fn average_progress(percentages: &[u8]) -> u8 {
    if percentages.is_empty() {
        return 0;
    }
    let sum: u32 = percentages.iter().map(|value| u32::from(*value)).sum();
    (f64::from(sum) / percentages.len() as f64).round() as u8
}
