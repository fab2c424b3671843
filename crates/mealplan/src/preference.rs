use std::str::FromStr;

use menuplan_shared::Recipe;

use crate::{DayPreference, Weekday, request::has_text};

impl DayPreference {
    /// At least one of diet, cuisine or a keyword carries text.
    pub fn is_active(&self) -> bool {
        self.preferred_diet.as_deref().is_some_and(has_text)
            || self.preferred_cuisine.as_deref().is_some_and(has_text)
            || self.keywords.iter().any(|k| has_text(k))
    }

    pub fn weekday(&self) -> Option<Weekday> {
        let day = self.day.as_deref()?.trim();
        if day.is_empty() {
            return None;
        }

        Weekday::from_str(day).ok()
    }

    /// Diet that should source candidates for this day, if it overrides the
    /// request diet.
    pub fn diet(&self) -> Option<&str> {
        self.preferred_diet.as_deref().filter(|d| has_text(d))
    }

    /// Whether `recipe` satisfies the cuisine and keyword constraints. The
    /// diet only picks the candidate pool, see [`Self::diet`].
    ///
    /// Keywords match case-insensitively anywhere in the title, description
    /// or ingredients, as typed. Blank constraints are ignored.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(cuisine) = self.preferred_cuisine.as_deref().filter(|c| has_text(c)) {
            let cuisine = cuisine.trim().to_lowercase();
            let matched = recipe
                .cuisine
                .as_deref()
                .is_some_and(|c| c.to_lowercase() == cuisine);

            if !matched {
                return false;
            }
        }

        let keywords = self
            .keywords
            .iter()
            .filter(|k| has_text(k))
            .map(|k| k.to_lowercase())
            .collect::<Vec<_>>();

        if keywords.is_empty() {
            return true;
        }

        let haystack = format!(
            "{} {} {}",
            recipe.title,
            recipe.description.as_deref().unwrap_or_default(),
            recipe.ingredients.as_deref().unwrap_or_default()
        )
        .to_lowercase();

        keywords.iter().any(|k| haystack.contains(k.as_str()))
    }
}

/// Active preferences keyed by weekday.
///
/// Days keep the position of their first mention while a later entry for
/// the same day replaces the earlier values.
#[derive(Debug, Default)]
pub struct DayPreferences<'a>(Vec<(Weekday, &'a DayPreference)>);

impl<'a> DayPreferences<'a> {
    pub fn resolve(preferences: &'a [DayPreference]) -> Self {
        let mut resolved: Vec<(Weekday, &'a DayPreference)> = Vec::new();

        for preference in preferences.iter().filter(|p| p.is_active()) {
            let Some(day) = preference.weekday() else {
                tracing::debug!(day = ?preference.day, "ignoring preference for unknown day");
                continue;
            };

            match resolved.iter_mut().find(|(d, _)| *d == day) {
                Some(entry) => entry.1 = preference,
                None => resolved.push((day, preference)),
            }
        }

        Self(resolved)
    }

    pub fn get(&self, day: Weekday) -> Option<&'a DayPreference> {
        self.0.iter().find(|(d, _)| *d == day).map(|(_, p)| *p)
    }

    pub fn days(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.0.iter().map(|(d, _)| *d)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
