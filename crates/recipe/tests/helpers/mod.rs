use std::{path::PathBuf, str::FromStr};

use menuplan_recipe::{Command, Query, RecipeInput};
use menuplan_shared::MealSlot;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};

pub struct TestState {
    pub command: Command,
    pub query: Query,
}

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<TestState> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    menuplan_db::migrate(&pool).await?;

    Ok(TestState {
        command: Command(pool.clone()),
        query: Query(pool),
    })
}

#[allow(dead_code)]
pub fn input(title: impl Into<String>, slot: Option<MealSlot>, diet: &str) -> RecipeInput {
    RecipeInput {
        title: title.into(),
        calories: Some(400),
        diet: Some(diet.to_owned()),
        meal_slot: slot,
        ingredients: Some("oats, milk".to_owned()),
        ..Default::default()
    }
}
