use menuplan_shared::Recipe;
use serde::{Serialize, Serializer, ser::SerializeMap};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::Profile;

#[derive(
    Serialize,
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
#[strum(ascii_case_insensitive)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayMenu {
    pub day: Weekday,
    pub meals: Vec<Recipe>,
    pub calories: i32,
}

/// A generated week.
///
/// `plan` serializes as an object keyed by day name, Monday first.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    #[serde(serialize_with = "serialize_days")]
    pub plan: Vec<DayMenu>,
    pub target_calories: i32,
    pub weekly_calories: i32,
    pub average_daily_calories: i32,
    pub profile: Profile,
}

impl WeeklyPlan {
    pub fn day(&self, day: Weekday) -> Option<&DayMenu> {
        self.plan.iter().find(|d| d.day == day)
    }

    pub fn meals(&self) -> impl Iterator<Item = &Recipe> {
        self.plan.iter().flat_map(|d| d.meals.iter())
    }
}

fn serialize_days<S: Serializer>(days: &[DayMenu], serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(days.len()))?;
    for day in days {
        map.serialize_entry(day.day.as_ref(), &day.meals)?;
    }

    map.end()
}
