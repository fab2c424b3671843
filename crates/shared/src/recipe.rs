use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    Serialize,
    Deserialize,
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum MealSlot {
    Breakfast,
    Snack,
    Lunch,
    Dinner,
}

/// A recipe as stored in the recipe book.
///
/// `id` is absent only for the placeholder produced when no stored recipe
/// can fill a slot. A missing `meal_slot` means the recipe fits any slot.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Recipe {
    pub id: Option<String>,
    pub title: String,
    pub calories: Option<i32>,
    pub protein: Option<i32>,
    pub price: Option<i32>,
    pub diet: Option<String>,
    pub cuisine: Option<String>,
    pub meal_slot: Option<MealSlot>,
    pub cooking_time: Option<i32>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl Recipe {
    pub fn calories_or_zero(&self) -> i32 {
        self.calories.unwrap_or_default()
    }

    pub fn fits_slot(&self, slot: MealSlot) -> bool {
        self.meal_slot.is_none_or(|s| s == slot)
    }

    /// Whether the diet tag equals `diet`, ignoring case.
    pub fn has_diet(&self, diet: &str) -> bool {
        self.diet
            .as_deref()
            .is_some_and(|d| d.to_lowercase() == diet.to_lowercase())
    }
}
