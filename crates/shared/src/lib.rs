mod error;
pub mod recipe;

pub use error::*;
pub use recipe::{MealSlot, Recipe};
