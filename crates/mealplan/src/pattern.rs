use menuplan_shared::MealSlot;

use MealSlot::{Breakfast, Dinner, Lunch, Snack};

const THREE_MEALS: [MealSlot; 3] = [Breakfast, Lunch, Dinner];
const FOUR_MEALS: [MealSlot; 4] = [Breakfast, Snack, Lunch, Dinner];
const FIVE_MEALS: [MealSlot; 5] = [Breakfast, Snack, Lunch, Snack, Dinner];

/// Ordered slots of a single day. Asking for a snack forces at least four
/// meals.
pub fn meal_pattern(meals_per_day: u8, include_snack: bool) -> &'static [MealSlot] {
    let meals = if include_snack && meals_per_day < 4 {
        4
    } else {
        meals_per_day
    };

    match meals {
        5.. => &FIVE_MEALS,
        4 => &FOUR_MEALS,
        _ => &THREE_MEALS,
    }
}
