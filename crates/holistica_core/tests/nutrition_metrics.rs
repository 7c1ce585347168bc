use holistica_core::metrics::{
    calorie_progress_percent, consumed_calories, DAILY_CALORIE_TARGET,
};
use holistica_core::MealStore;

#[test]
fn seed_plan_with_only_breakfast_done_yields_350_kcal() {
    let store = MealStore::seed();

    let consumed = consumed_calories(store.meals());
    assert_eq!(consumed, 350);
    assert_eq!(
        calorie_progress_percent(consumed, DAILY_CALORIE_TARGET),
        17.5
    );
}

#[test]
fn toggling_meals_moves_the_calorie_total() {
    let mut store = MealStore::seed();

    assert!(store.toggle_completion(2));
    assert_eq!(consumed_calories(store.meals()), 350 + 480);

    // Untoggle the seeded breakfast.
    assert!(store.toggle_completion(1));
    assert_eq!(consumed_calories(store.meals()), 480);
}

#[test]
fn full_plan_stays_under_target_and_progress_is_unclamped_beyond_it() {
    let mut store = MealStore::seed();
    for id in 2..=4 {
        assert!(store.toggle_completion(id));
    }

    let consumed = consumed_calories(store.meals());
    assert_eq!(consumed, 1400);
    assert_eq!(
        calorie_progress_percent(consumed, DAILY_CALORIE_TARGET),
        70.0
    );

    // Over-target consumption must read above 100, by design.
    assert_eq!(calorie_progress_percent(2300, DAILY_CALORIE_TARGET), 115.0);
}

#[test]
fn double_toggle_restores_the_plan_field_for_field() {
    let mut store = MealStore::seed();
    let before = store.meals().to_vec();

    assert!(store.toggle_completion(3));
    assert!(store.toggle_completion(3));

    assert_eq!(store.meals(), before.as_slice());
}

#[test]
fn toggling_unknown_meal_is_a_silent_noop() {
    let mut store = MealStore::seed();
    let before = store.meals().to_vec();

    assert!(!store.toggle_completion(9999));
    assert_eq!(store.meals(), before.as_slice());
}
