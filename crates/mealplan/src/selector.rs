use std::collections::HashSet;

use menuplan_shared::{MealSlot, Recipe};
use rand::{Rng, seq::SliceRandom};

use crate::{DayPreference, Profile, RecipeStore, request::has_text};

pub const PLACEHOLDER_TITLE: &str = "Add more recipes";
pub const PLACEHOLDER_DESCRIPTION: &str = "Not enough recipes in the book to fill this meal.";

/// Score penalty for recipes already served this week.
const REUSE_PENALTY: u32 = 500;

/// Keeps the candidates matching `keep`, unless none do. An empty result
/// never replaces a non-empty pool.
fn narrow(mut candidates: Vec<Recipe>, keep: impl Fn(&Recipe) -> bool) -> Vec<Recipe> {
    if candidates.iter().any(&keep) {
        candidates.retain(|r| keep(r));
    }

    candidates
}

/// Recipe shown when the book has nothing for a slot.
pub fn placeholder(slot: MealSlot) -> Recipe {
    Recipe {
        title: PLACEHOLDER_TITLE.to_owned(),
        description: Some(PLACEHOLDER_DESCRIPTION.to_owned()),
        calories: Some(0),
        diet: Some("ALL".to_owned()),
        meal_slot: Some(slot),
        ..Default::default()
    }
}

/// Picks one recipe per slot for a given profile.
pub struct Selector<'a, S: ?Sized> {
    store: &'a S,
    diet: &'a str,
    excluded: Vec<String>,
}

impl<'a, S: RecipeStore + ?Sized> Selector<'a, S> {
    pub fn new(store: &'a S, profile: &'a Profile) -> Self {
        let excluded = profile
            .excluded_ingredients
            .iter()
            .filter(|i| has_text(i))
            .map(|i| i.to_lowercase())
            .collect();

        Self {
            store,
            diet: &profile.diet,
            excluded,
        }
    }

    /// Chooses a recipe for `slot` close to `budget` calories.
    ///
    /// Candidates are narrowed by slot, day preference, excluded ingredients
    /// and weekly reuse, each step only applied when something survives it.
    /// The pick is random among the closest half of what remains (at least
    /// two). Falls back to [`placeholder`] when the store is empty.
    pub fn pick<R: Rng>(
        &self,
        slot: MealSlot,
        budget: i32,
        preference: Option<&DayPreference>,
        used: &HashSet<String>,
        rng: &mut R,
    ) -> Recipe {
        let mut candidates = self.candidates(slot, preference);
        if candidates.is_empty() {
            tracing::warn!(%slot, "no recipes available, using placeholder");
            return placeholder(slot);
        }

        candidates = narrow(candidates, |r| r.fits_slot(slot));
        if let Some(preference) = preference {
            candidates = narrow(candidates, |r| preference.matches(r));
        }
        candidates = narrow(candidates, |r| !self.is_excluded(r));
        candidates = narrow(candidates, |r| !is_used(r, used));

        candidates.shuffle(rng);
        candidates.sort_by_key(|r| {
            let distance = r.calories_or_zero().abs_diff(budget);
            if is_used(r, used) {
                distance.saturating_add(REUSE_PENALTY)
            } else {
                distance
            }
        });

        let pool = candidates.len().min((candidates.len() / 2).max(2));
        let index = rng.random_range(0..pool);

        candidates.swap_remove(index)
    }

    fn candidates(&self, slot: MealSlot, preference: Option<&DayPreference>) -> Vec<Recipe> {
        let diet = preference
            .and_then(|p| p.diet())
            .unwrap_or(self.diet)
            .trim();

        let candidates = if diet.is_empty() || diet.eq_ignore_ascii_case("ALL") {
            self.store.find_by_meal_slot(slot)
        } else {
            self.store.find_by_diet_and_meal_slot(diet, slot)
        };

        if candidates.is_empty() {
            return self.store.find_all();
        }

        candidates
    }

    fn is_excluded(&self, recipe: &Recipe) -> bool {
        if self.excluded.is_empty() {
            return false;
        }

        let Some(ingredients) = recipe.ingredients.as_deref().filter(|i| has_text(i)) else {
            return false;
        };

        let ingredients = ingredients.to_lowercase();
        self.excluded.iter().any(|e| ingredients.contains(e.as_str()))
    }
}

fn is_used(recipe: &Recipe, used: &HashSet<String>) -> bool {
    recipe.id.as_ref().is_some_and(|id| used.contains(id))
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{MemoryStore, PlanRequest};

    fn recipe(id: &str, slot: Option<MealSlot>, calories: i32) -> Recipe {
        Recipe {
            id: Some(id.to_owned()),
            title: id.to_owned(),
            calories: Some(calories),
            diet: Some("VEGAN".to_owned()),
            meal_slot: slot,
            ..Default::default()
        }
    }

    fn pick_ids(
        store: &MemoryStore,
        profile: &Profile,
        preference: Option<&DayPreference>,
        used: &HashSet<String>,
    ) -> HashSet<String> {
        let selector = Selector::new(store, profile);

        (0..64)
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                selector
                    .pick(MealSlot::Lunch, 500, preference, used, &mut rng)
                    .id
                    .unwrap_or_default()
            })
            .collect()
    }

    #[test]
    fn empty_store_yields_placeholder() {
        let store = MemoryStore::default();
        let profile = Profile::default();
        let mut rng = StdRng::seed_from_u64(7);

        let recipe = Selector::new(&store, &profile).pick(
            MealSlot::Dinner,
            600,
            None,
            &HashSet::new(),
            &mut rng,
        );

        assert_eq!(recipe, placeholder(MealSlot::Dinner));
        assert!(recipe.id.is_none());
        assert_eq!(recipe.calories, Some(0));
        assert_eq!(recipe.diet.as_deref(), Some("ALL"));
    }

    #[test]
    fn picks_within_closest_half() {
        let store = MemoryStore::new(vec![
            recipe("a", Some(MealSlot::Lunch), 500),
            recipe("b", Some(MealSlot::Lunch), 510),
            recipe("c", Some(MealSlot::Lunch), 900),
            recipe("d", Some(MealSlot::Lunch), 1000),
            recipe("e", Some(MealSlot::Lunch), 1200),
            recipe("f", Some(MealSlot::Lunch), 1500),
        ]);

        let ids = pick_ids(&store, &Profile::default(), None, &HashSet::new());

        assert!(!ids.is_empty());
        assert!(ids.iter().all(|id| ["a", "b", "c"].contains(&id.as_str())));
    }

    #[test]
    fn two_candidates_both_reachable() {
        let store = MemoryStore::new(vec![
            recipe("near", Some(MealSlot::Lunch), 500),
            recipe("far", Some(MealSlot::Lunch), 2000),
        ]);

        let ids = pick_ids(&store, &Profile::default(), None, &HashSet::new());

        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn unused_recipes_preferred() {
        let store = MemoryStore::new(vec![
            recipe("a", Some(MealSlot::Lunch), 500),
            recipe("b", Some(MealSlot::Lunch), 505),
            recipe("c", Some(MealSlot::Lunch), 1400),
        ]);
        let used = HashSet::from(["a".to_owned(), "b".to_owned()]);

        let ids = pick_ids(&store, &Profile::default(), None, &used);

        assert_eq!(ids, HashSet::from(["c".to_owned()]));
    }

    #[test]
    fn all_used_still_picks_something() {
        let store = MemoryStore::new(vec![recipe("a", Some(MealSlot::Lunch), 500)]);
        let used = HashSet::from(["a".to_owned()]);

        let ids = pick_ids(&store, &Profile::default(), None, &used);

        assert_eq!(ids, HashSet::from(["a".to_owned()]));
    }

    #[test]
    fn exclusions_skip_matching_ingredients() {
        let mut hummus = recipe("hummus", Some(MealSlot::Lunch), 500);
        hummus.ingredients = Some("Chickpeas, tahini".to_owned());
        let mut salad = recipe("salad", Some(MealSlot::Lunch), 300);
        salad.ingredients = Some("lettuce, tomato".to_owned());

        let store = MemoryStore::new(vec![hummus, salad]);
        let profile = PlanRequest {
            excluded_ingredients: vec!["CHICKPEA".to_owned(), "".to_owned()],
            ..Default::default()
        }
        .normalize();

        let ids = pick_ids(&store, &profile, None, &HashSet::new());

        assert_eq!(ids, HashSet::from(["salad".to_owned()]));
    }

    #[test]
    fn exclusions_match_as_typed() {
        let mut hummus = recipe("hummus", Some(MealSlot::Lunch), 500);
        hummus.ingredients = Some("Chickpeas, tahini".to_owned());
        let mut salad = recipe("salad", Some(MealSlot::Lunch), 500);
        salad.ingredients = Some("lettuce, tomato".to_owned());

        let store = MemoryStore::new(vec![hummus, salad]);
        let profile = PlanRequest {
            excluded_ingredients: vec![" chickpea ".to_owned()],
            ..Default::default()
        }
        .normalize();

        let ids = pick_ids(&store, &profile, None, &HashSet::new());

        assert_eq!(ids, HashSet::from(["hummus".to_owned(), "salad".to_owned()]));
    }

    #[test]
    fn exclusions_removing_everything_are_ignored() {
        let mut hummus = recipe("hummus", Some(MealSlot::Lunch), 500);
        hummus.ingredients = Some("chickpeas".to_owned());

        let store = MemoryStore::new(vec![hummus]);
        let profile = PlanRequest {
            excluded_ingredients: vec!["chickpea".to_owned()],
            ..Default::default()
        }
        .normalize();

        let ids = pick_ids(&store, &profile, None, &HashSet::new());

        assert_eq!(ids, HashSet::from(["hummus".to_owned()]));
    }

    #[test]
    fn preference_diet_sources_candidates() {
        let mut steak = recipe("steak", Some(MealSlot::Lunch), 500);
        steak.diet = Some("REGULAR".to_owned());
        let tofu = recipe("tofu", Some(MealSlot::Lunch), 500);

        let store = MemoryStore::new(vec![steak, tofu]);
        let profile = PlanRequest {
            diet: Some("REGULAR".to_owned()),
            ..Default::default()
        }
        .normalize();
        let preference = DayPreference {
            day: Some("Monday".to_owned()),
            preferred_diet: Some("vegan".to_owned()),
            ..Default::default()
        };

        assert_eq!(
            pick_ids(&store, &profile, None, &HashSet::new()),
            HashSet::from(["steak".to_owned()])
        );
        assert_eq!(
            pick_ids(&store, &profile, Some(&preference), &HashSet::new()),
            HashSet::from(["tofu".to_owned()])
        );
    }

    #[test]
    fn preference_diet_all_keeps_every_tag() {
        let mut regular = recipe("regular", Some(MealSlot::Lunch), 500);
        regular.diet = Some("REGULAR".to_owned());
        let mut tagged_all = recipe("tagged_all", Some(MealSlot::Lunch), 500);
        tagged_all.diet = Some("ALL".to_owned());

        let store = MemoryStore::new(vec![regular, tagged_all]);
        let preference = DayPreference {
            day: Some("Monday".to_owned()),
            preferred_diet: Some("ALL".to_owned()),
            ..Default::default()
        };

        let ids = pick_ids(&store, &Profile::default(), Some(&preference), &HashSet::new());

        assert_eq!(
            ids,
            HashSet::from(["regular".to_owned(), "tagged_all".to_owned()])
        );
    }

    #[test]
    fn preference_diet_without_recipes_ranks_whole_book() {
        let mut steak = recipe("steak", Some(MealSlot::Lunch), 500);
        steak.diet = Some("REGULAR".to_owned());
        let mut fish = recipe("fish", Some(MealSlot::Lunch), 500);
        fish.diet = Some("REGULAR".to_owned());
        let apple = recipe("apple", None, 100);

        let store = MemoryStore::new(vec![steak, fish, apple]);
        let preference = DayPreference {
            day: Some("Monday".to_owned()),
            preferred_diet: Some("VEGAN".to_owned()),
            ..Default::default()
        };

        // No vegan lunch exists, so the whole book is ranked and the diet
        // does not narrow it further.
        let ids = pick_ids(&store, &Profile::default(), Some(&preference), &HashSet::new());

        assert_eq!(ids, HashSet::from(["steak".to_owned(), "fish".to_owned()]));
    }

    #[test]
    fn huge_calories_do_not_overflow_scoring() {
        let store = MemoryStore::new(vec![
            recipe("huge", Some(MealSlot::Lunch), i32::MAX),
            recipe("negative", Some(MealSlot::Lunch), i32::MIN),
        ]);
        let used = HashSet::from(["huge".to_owned(), "negative".to_owned()]);

        let ids = pick_ids(&store, &Profile::default(), None, &used);

        assert_eq!(ids, HashSet::from(["huge".to_owned(), "negative".to_owned()]));
    }

    #[test]
    fn unmatched_preference_falls_back() {
        let store = MemoryStore::new(vec![recipe("tofu", Some(MealSlot::Lunch), 500)]);
        let preference = DayPreference {
            day: Some("Monday".to_owned()),
            preferred_cuisine: Some("FRENCH".to_owned()),
            ..Default::default()
        };

        let ids = pick_ids(&store, &Profile::default(), Some(&preference), &HashSet::new());

        assert_eq!(ids, HashSet::from(["tofu".to_owned()]));
    }

    #[test]
    fn empty_slot_falls_back_to_whole_book() {
        let store = MemoryStore::new(vec![
            recipe("pancakes", Some(MealSlot::Breakfast), 500),
            recipe("anytime", None, 500),
        ]);

        let ids = pick_ids(&store, &Profile::default(), None, &HashSet::new());

        // The untagged recipe fits lunch, the breakfast one is narrowed away.
        assert_eq!(ids, HashSet::from(["anytime".to_owned()]));
    }
}
