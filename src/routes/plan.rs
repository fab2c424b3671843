use axum::{
    Json,
    extract::{Query, State},
};
use menuplan_mealplan::{MemoryStore, PlanRequest, WeeklyPlan};
use serde::Deserialize;

use crate::{error::AppError, routes::AppState};

#[derive(Debug, Deserialize, Default)]
pub struct QuickPlanQuery {
    pub diet: Option<String>,
    pub calories: Option<i32>,
}

/// POST /api/generate-plan
#[tracing::instrument(skip_all, fields(week_id = ?request.week_id))]
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<WeeklyPlan>, AppError> {
    let store = MemoryStore::new(state.recipe_query.all().await?);

    Ok(Json(menuplan_mealplan::generate(&store, request)))
}

/// GET /api/generate-plan?diet=&calories=
pub async fn quick(
    State(state): State<AppState>,
    Query(query): Query<QuickPlanQuery>,
) -> Result<Json<WeeklyPlan>, AppError> {
    let request = PlanRequest {
        diet: Some(query.diet.unwrap_or_else(|| state.planner.default_diet.clone())),
        manual_calories: Some(query.calories.unwrap_or(state.planner.default_calories)),
        ..Default::default()
    };

    generate(State(state), Json(request)).await
}
