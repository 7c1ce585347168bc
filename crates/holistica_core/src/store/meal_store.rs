//! Daily meal plan store.
//!
//! # Responsibility
//! - Own the fixed daily meal plan and static recipe recommendations.
//!
//! # Invariants
//! - The plan is a fixed seed set; meals are never added or removed.
//! - Only the completion flag is mutable, one meal per operation.
//! - Toggling an unknown identifier leaves the collection untouched.

use crate::model::meal::{Meal, MealId, MealSlot, Recipe, RecipeDifficulty};
use log::{debug, info};

/// Pure update: returns a copy of `meals` with the matching meal's completion
/// flag flipped, or `None` when no meal matches.
fn toggled(meals: &[Meal], id: MealId) -> Option<Vec<Meal>> {
    if !meals.iter().any(|meal| meal.id == id) {
        return None;
    }
    Some(
        meals
            .iter()
            .map(|meal| {
                if meal.id == id {
                    let mut flipped = meal.clone();
                    flipped.completed = !meal.completed;
                    flipped
                } else {
                    meal.clone()
                }
            })
            .collect(),
    )
}

/// State holder for the nutrition page.
#[derive(Debug, Clone, PartialEq)]
pub struct MealStore {
    meals: Vec<Meal>,
    recipes: Vec<Recipe>,
}

impl MealStore {
    /// Creates the store preloaded with the product fixture plan and recipes.
    pub fn seed() -> Self {
        Self {
            meals: seed_meals(),
            recipes: seed_recipes(),
        }
    }

    /// Flips the completion flag of the matching meal.
    ///
    /// Returns `true` when a meal was toggled, `false` for an unknown
    /// identifier (silent no-op).
    pub fn toggle_completion(&mut self, id: MealId) -> bool {
        match toggled(&self.meals, id) {
            Some(next) => {
                self.meals = next;
                info!("event=meal_toggled module=meal_store status=ok meal_id={id}");
                true
            }
            None => {
                debug!("event=meal_toggled module=meal_store status=noop meal_id={id}");
                false
            }
        }
    }

    /// Full daily plan in scheduled order.
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    /// Meals marked consumed, in plan order.
    pub fn completed(&self) -> Vec<&Meal> {
        self.meals.iter().filter(|meal| meal.completed).collect()
    }

    /// Static recommended recipes.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }
}

fn seed_meals() -> Vec<Meal> {
    vec![
        Meal {
            id: 1,
            name: "Avena con frutas y nueces".to_string(),
            slot: MealSlot::Breakfast,
            calories: 350,
            description: "Avena integral con plátano, arándanos y almendras".to_string(),
            completed: true,
            scheduled_time: "07:00".to_string(),
        },
        Meal {
            id: 2,
            name: "Ensalada mediterránea con pollo".to_string(),
            slot: MealSlot::Lunch,
            calories: 480,
            description: "Pechuga de pollo, tomate, pepino, aceitunas y queso feta".to_string(),
            completed: false,
            scheduled_time: "13:00".to_string(),
        },
        Meal {
            id: 3,
            name: "Salmón al horno con verduras".to_string(),
            slot: MealSlot::Dinner,
            calories: 420,
            description: "Filete de salmón con brócoli, zanahorias y quinoa".to_string(),
            completed: false,
            scheduled_time: "19:30".to_string(),
        },
        Meal {
            id: 4,
            name: "Yogur griego con miel".to_string(),
            slot: MealSlot::Snack,
            calories: 150,
            description: "Yogur natural con miel y granola casera".to_string(),
            completed: false,
            scheduled_time: "16:00".to_string(),
        },
    ]
}

fn seed_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: 1,
            name: "Bowl de Quinoa y Vegetales".to_string(),
            image: "🥗".to_string(),
            cook_time: "25 min".to_string(),
            difficulty: RecipeDifficulty::Easy,
            calories: 380,
            ingredients: 8,
            rating: 4.8,
            description: "Un bowl nutritivo y colorido perfecto para el almuerzo".to_string(),
        },
        Recipe {
            id: 2,
            name: "Smoothie Verde Energizante".to_string(),
            image: "🥤".to_string(),
            cook_time: "5 min".to_string(),
            difficulty: RecipeDifficulty::Easy,
            calories: 180,
            ingredients: 5,
            rating: 4.6,
            description: "Combinación perfecta de espinacas, mango y proteína".to_string(),
        },
        Recipe {
            id: 3,
            name: "Tacos de Pescado Saludables".to_string(),
            image: "🌮".to_string(),
            cook_time: "20 min".to_string(),
            difficulty: RecipeDifficulty::Medium,
            calories: 320,
            ingredients: 10,
            rating: 4.9,
            description: "Tacos frescos con pescado blanco y salsa de aguacate".to_string(),
        },
        Recipe {
            id: 4,
            name: "Curry de Lentejas".to_string(),
            image: "🍛".to_string(),
            cook_time: "35 min".to_string(),
            difficulty: RecipeDifficulty::Medium,
            calories: 290,
            ingredients: 12,
            rating: 4.7,
            description: "Curry cremoso y especiado rico en proteínas".to_string(),
        },
    ]
}
