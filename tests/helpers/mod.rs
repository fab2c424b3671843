#![allow(dead_code)]

use std::path::Path;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use menuplan::{AppState, config::PlannerConfig};
use menuplan_recipe::RecipeInput;
use menuplan_shared::MealSlot;
use serde_json::Value;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub command: menuplan_recipe::Command,
}

/// Fresh migrated database inside `path`, with the default planner settings.
pub async fn setup_test_app(path: &Path) -> anyhow::Result<TestApp> {
    let url = format!("sqlite:{}", path.join("menuplan.db").display());
    let pool = menuplan::db::create_pool(&url, 1).await?;
    menuplan_db::migrate(&pool).await?;

    let state = AppState::new(pool, PlannerConfig::default());

    Ok(TestApp {
        command: state.recipe_command.clone(),
        router: menuplan::router(state),
    })
}

impl TestApp {
    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }

    /// Three recipes per slot and diet.
    pub async fn seed(&self) -> anyhow::Result<()> {
        let mut inputs = Vec::new();

        for diet in ["REGULAR", "VEGAN"] {
            for slot in [
                MealSlot::Breakfast,
                MealSlot::Snack,
                MealSlot::Lunch,
                MealSlot::Dinner,
            ] {
                for n in 0..3 {
                    inputs.push(RecipeInput {
                        title: format!("{diet} {slot} {n}"),
                        calories: Some(200 + 150 * n),
                        diet: Some(diet.to_owned()),
                        cuisine: Some("ITALIAN".to_owned()),
                        meal_slot: Some(slot),
                        ingredients: Some("rice, onion".to_owned()),
                        ..Default::default()
                    });
                }
            }
        }

        self.command.import(inputs).await?;

        Ok(())
    }
}
