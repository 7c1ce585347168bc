//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `holistica_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use holistica_core::metrics::{
    completion_rate_display, consumed_calories, weekly_average, DAILY_CALORIE_TARGET,
};
use holistica_core::{MealStore, TaskStore, WellnessStore};

fn main() {
    println!("holistica_core ping={}", holistica_core::ping());
    println!("holistica_core version={}", holistica_core::core_version());

    // Seeded stores give a deterministic snapshot of the derived metrics.
    let tasks = TaskStore::seed();
    let meals = MealStore::seed();
    let wellness = WellnessStore::seed();

    println!(
        "tasks total={} pending={} completion={}%",
        tasks.tasks().len(),
        tasks.pending().len(),
        completion_rate_display(tasks.tasks())
    );
    println!(
        "nutrition consumed={}kcal target={}kcal",
        consumed_calories(meals.meals()),
        DAILY_CALORIE_TARGET
    );
    println!(
        "wellness weekly_average={}/5",
        weekly_average(wellness.weekly_history())
    );
}
