use menuplan_shared::{MealSlot, Recipe};

/// Read side of the recipe book used while generating plans.
///
/// Slot queries only return recipes tagged with that slot. Diet comparison
/// ignores case.
pub trait RecipeStore {
    fn find_all(&self) -> Vec<Recipe>;
    fn find_by_meal_slot(&self, slot: MealSlot) -> Vec<Recipe>;
    fn find_by_diet_and_meal_slot(&self, diet: &str, slot: MealSlot) -> Vec<Recipe>;
}

/// Snapshot of recipes held in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(Vec<Recipe>);

impl MemoryStore {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self(recipes)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Recipe>> for MemoryStore {
    fn from(recipes: Vec<Recipe>) -> Self {
        Self::new(recipes)
    }
}

impl RecipeStore for MemoryStore {
    fn find_all(&self) -> Vec<Recipe> {
        self.0.clone()
    }

    fn find_by_meal_slot(&self, slot: MealSlot) -> Vec<Recipe> {
        self.0
            .iter()
            .filter(|r| r.meal_slot == Some(slot))
            .cloned()
            .collect()
    }

    fn find_by_diet_and_meal_slot(&self, diet: &str, slot: MealSlot) -> Vec<Recipe> {
        self.0
            .iter()
            .filter(|r| r.meal_slot == Some(slot) && r.has_diet(diet))
            .cloned()
            .collect()
    }
}
