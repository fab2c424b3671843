use menuplan_shared::MealSlot;

use crate::{ActivityLevel, Gender, Goal, Profile};

pub const REGULAR_MAINTAIN_MALE: i32 = 2200;
pub const REGULAR_MAINTAIN_FEMALE: i32 = 1500;

const BREAKFAST_SHARE: f64 = 0.28;
const LUNCH_SHARE: f64 = 0.37;
const DINNER_SHARE: f64 = 0.25;
const SINGLE_SNACK_SHARE: f64 = 0.15;
const SPLIT_SNACK_SHARE: f64 = 0.10;

impl ActivityLevel {
    pub fn factor(activity: Option<Self>) -> f64 {
        match activity {
            Some(ActivityLevel::Low) => 1.2,
            Some(ActivityLevel::Active) => 1.55,
            Some(ActivityLevel::VeryActive) => 1.725,
            _ => 1.375,
        }
    }
}

impl Goal {
    pub fn factor(goal: Option<Self>) -> f64 {
        match goal {
            Some(Goal::Lose) => 0.85,
            Some(Goal::Gain) => 1.15,
            _ => 1.0,
        }
    }
}

/// Daily calorie target for a normalized profile.
///
/// A positive manual value always wins. Regular eaters who want to maintain
/// get a flat target, everyone else goes through Mifflin-St Jeor scaled by
/// activity and goal.
pub fn target_calories(profile: &Profile) -> i32 {
    if let Some(manual) = profile.manual_calories.filter(|c| *c > 0) {
        return manual;
    }

    let male = profile.gender() == Gender::Male;

    if profile.diet.eq_ignore_ascii_case("REGULAR") && profile.goal() == Some(Goal::Maintain) {
        return if male {
            REGULAR_MAINTAIN_MALE
        } else {
            REGULAR_MAINTAIN_FEMALE
        };
    }

    let bmr = 10.0 * profile.weight + 6.25 * profile.height - 5.0 * profile.age as f64
        + if male { 5.0 } else { -161.0 };

    round_half_up(
        bmr * ActivityLevel::factor(profile.activity()) * Goal::factor(profile.goal()),
    )
}

/// Splits `target` across `pattern`, one budget per slot in the same order.
///
/// Budgets are rounded independently so their sum may drift from `target`
/// by a few calories.
pub fn distribute_calories(target: i32, pattern: &[MealSlot]) -> Vec<i32> {
    let snacks = pattern.iter().filter(|s| **s == MealSlot::Snack).count();
    let snack_share = if snacks > 1 {
        SPLIT_SNACK_SHARE
    } else {
        SINGLE_SNACK_SHARE
    };

    let shares = pattern
        .iter()
        .map(|slot| match slot {
            MealSlot::Breakfast => BREAKFAST_SHARE,
            MealSlot::Lunch => LUNCH_SHARE,
            MealSlot::Dinner => DINNER_SHARE,
            MealSlot::Snack => snack_share,
        })
        .collect::<Vec<_>>();

    let total: f64 = shares.iter().sum();
    if total <= 0.0 {
        return vec![0; pattern.len()];
    }

    shares
        .into_iter()
        .map(|share| round_half_up(target as f64 * (share / total)))
        .collect()
}

fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}
