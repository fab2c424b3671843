use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumString};

pub const DEFAULT_DIET: &str = "ALL";
pub const DEFAULT_GENDER: &str = "FEMALE";
pub const DEFAULT_AGE: i32 = 30;
pub const DEFAULT_HEIGHT_CM: f64 = 165.0;
pub const DEFAULT_WEIGHT_KG: f64 = 60.0;
pub const DEFAULT_ACTIVITY: &str = "MODERATE";
pub const DEFAULT_GOAL: &str = "MAINTAIN";
pub const MIN_MEALS_PER_DAY: u8 = 3;
pub const MAX_MEALS_PER_DAY: u8 = 5;

/// Planning request as received from a client. Every field is optional,
/// `normalize` turns it into a fully populated [`Profile`].
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct PlanRequest {
    pub diet: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub activity: Option<String>,
    pub goal: Option<String>,
    pub meals_per_day: Option<i32>,
    pub include_snack: Option<bool>,
    #[serde(deserialize_with = "null_as_default")]
    pub excluded_ingredients: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub day_preferences: Vec<DayPreference>,
    pub manual_calories: Option<i32>,
    pub week_id: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DayPreference {
    pub day: Option<String>,
    pub preferred_diet: Option<String>,
    pub preferred_cuisine: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,
}

/// Normalized request. Echoed back with every generated plan.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub diet: String,
    pub gender: String,
    pub age: i32,
    pub height: f64,
    pub weight: f64,
    pub activity: String,
    pub goal: String,
    pub meals_per_day: u8,
    pub include_snack: bool,
    pub excluded_ingredients: Vec<String>,
    pub day_preferences: Vec<DayPreference>,
    pub manual_calories: Option<i32>,
    pub week_id: Option<String>,
}

#[derive(EnumString, Display, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Gender {
    Male,
    #[default]
    Female,
}

#[derive(EnumString, Display, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ActivityLevel {
    Low,
    Moderate,
    Active,
    VeryActive,
}

#[derive(EnumString, Display, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

impl PlanRequest {
    pub fn normalize(self) -> Profile {
        let meals_per_day = match self.meals_per_day {
            Some(n) if n > MAX_MEALS_PER_DAY as i32 => MAX_MEALS_PER_DAY,
            Some(n) if n >= MIN_MEALS_PER_DAY as i32 => n as u8,
            _ => MIN_MEALS_PER_DAY,
        };

        Profile {
            diet: self
                .diet
                .filter(|d| has_text(d))
                .unwrap_or_else(|| DEFAULT_DIET.to_owned()),
            gender: self.gender.unwrap_or_else(|| DEFAULT_GENDER.to_owned()),
            age: self.age.filter(|a| *a > 0).unwrap_or(DEFAULT_AGE),
            height: self.height.filter(|h| *h > 0.0).unwrap_or(DEFAULT_HEIGHT_CM),
            weight: self.weight.filter(|w| *w > 0.0).unwrap_or(DEFAULT_WEIGHT_KG),
            activity: self.activity.unwrap_or_else(|| DEFAULT_ACTIVITY.to_owned()),
            goal: self.goal.unwrap_or_else(|| DEFAULT_GOAL.to_owned()),
            meals_per_day,
            include_snack: self.include_snack.unwrap_or_default(),
            excluded_ingredients: self.excluded_ingredients,
            day_preferences: self.day_preferences,
            manual_calories: self.manual_calories.filter(|c| *c > 0),
            week_id: self.week_id,
        }
    }
}

impl Profile {
    pub fn gender(&self) -> Gender {
        Gender::from_str(self.gender.trim()).unwrap_or_default()
    }

    /// `None` when the activity is not one of the known levels.
    pub fn activity(&self) -> Option<ActivityLevel> {
        ActivityLevel::from_str(self.activity.trim()).ok()
    }

    /// `None` when the goal is not one of the known goals.
    pub fn goal(&self) -> Option<Goal> {
        Goal::from_str(self.goal.trim()).ok()
    }
}

impl Default for Profile {
    fn default() -> Self {
        PlanRequest::default().normalize()
    }
}

pub(crate) fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
