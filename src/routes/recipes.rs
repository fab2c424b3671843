use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use menuplan_recipe::{FilterQuery, RecipeInput};
use menuplan_shared::Recipe;

use crate::{error::AppError, routes::AppState};

/// GET /api/recipes?mealSlot=&diet=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<FilterQuery>,
) -> Result<Json<Vec<Recipe>>, AppError> {
    Ok(Json(state.recipe_query.filter(filter).await?))
}

pub async fn find(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, AppError> {
    match state.recipe_query.find(id).await? {
        Some(recipe) => Ok(Json(recipe)),
        None => Err(menuplan_shared::Error::NotFound("recipe".to_owned()).into()),
    }
}

#[tracing::instrument(skip_all, fields(title = %input.title))]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<RecipeInput>,
) -> Result<(StatusCode, Json<Recipe>), AppError> {
    let recipe = state.recipe_command.create(input).await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

#[tracing::instrument(skip(state, input))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<RecipeInput>,
) -> Result<Json<Recipe>, AppError> {
    Ok(Json(state.recipe_command.update(id, input).await?))
}

#[tracing::instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.recipe_command.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
