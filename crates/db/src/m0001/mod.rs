mod recipe_create_diet_idx;
mod recipe_create_meal_slot_idx;
mod recipe_create_table;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "main",
    "m0001",
    vec_box![],
    vec_box![
        recipe_create_table::Operation,
        recipe_create_meal_slot_idx::Operation,
        recipe_create_diet_idx::Operation,
    ]
);
