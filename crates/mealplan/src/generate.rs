use std::collections::HashSet;

use rand::{Rng, SeedableRng, rngs::StdRng};
use strum::VariantArray;

use crate::{
    DayMenu, DayPreferences, PlanRequest, Profile, RecipeStore, Selector, Weekday, WeeklyPlan,
    distribute_calories, meal_pattern, target_calories, week_rng,
};

/// Builds a seven day menu for `request` from the recipes in `store`.
///
/// Requests carrying the same week id against the same store produce the
/// same plan.
pub fn generate<S: RecipeStore + ?Sized>(store: &S, request: PlanRequest) -> WeeklyPlan {
    let profile = request.normalize();
    let rng = week_rng(profile.week_id.as_deref());

    generate_with_rng(store, profile, rng)
}

/// Same as [`generate`] with an explicit base random source. Each day draws
/// its own generator from `rng` so days stay independent of one another.
pub fn generate_with_rng<S, R>(store: &S, profile: Profile, mut rng: R) -> WeeklyPlan
where
    S: RecipeStore + ?Sized,
    R: Rng,
{
    let target_calories = target_calories(&profile);
    let pattern = meal_pattern(profile.meals_per_day, profile.include_snack);
    let budgets = distribute_calories(target_calories, pattern);

    let plan = {
        let preferences = DayPreferences::resolve(&profile.day_preferences);
        let selector = Selector::new(store, &profile);
        let mut used = HashSet::new();
        let mut plan = Vec::with_capacity(Weekday::VARIANTS.len());

        for day in Weekday::VARIANTS.iter().copied() {
            let mut day_rng = StdRng::seed_from_u64(rng.random());
            let preference = preferences.get(day);
            let mut meals = Vec::with_capacity(pattern.len());

            for (slot, budget) in pattern.iter().copied().zip(budgets.iter().copied()) {
                let recipe = selector.pick(slot, budget, preference, &used, &mut day_rng);

                tracing::debug!(
                    %day,
                    %slot,
                    budget,
                    recipe = %recipe.title,
                    calories = recipe.calories_or_zero(),
                    "meal selected"
                );

                if let Some(id) = &recipe.id {
                    used.insert(id.to_owned());
                }

                meals.push(recipe);
            }

            let calories = meals
                .iter()
                .fold(0i32, |total, r| total.saturating_add(r.calories_or_zero()));
            plan.push(DayMenu {
                day,
                meals,
                calories,
            });
        }

        plan
    };

    let weekly_calories = plan
        .iter()
        .fold(0i32, |total, d| total.saturating_add(d.calories));
    let average_daily_calories = if plan.is_empty() {
        0
    } else {
        weekly_calories / plan.len() as i32
    };

    tracing::info!(
        week_id = ?profile.week_id,
        target_calories,
        weekly_calories,
        meals_per_day = pattern.len(),
        "weekly plan generated"
    );

    WeeklyPlan {
        plan,
        target_calories,
        weekly_calories,
        average_daily_calories,
        profile,
    }
}
