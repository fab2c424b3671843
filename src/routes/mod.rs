use axum::{Router, routing::get};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

use crate::config::PlannerConfig;

mod health;
mod plan;
mod recipes;

#[derive(Clone)]
pub struct AppState {
    pub planner: PlannerConfig,
    pub recipe_command: menuplan_recipe::Command,
    pub recipe_query: menuplan_recipe::Query,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool, planner: PlannerConfig) -> Self {
        Self {
            planner,
            recipe_command: menuplan_recipe::Command(pool.clone()),
            recipe_query: menuplan_recipe::Query(pool.clone()),
            pool,
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route(
            "/api/recipes",
            get(recipes::list).post(recipes::create),
        )
        .route(
            "/api/recipes/{id}",
            get(recipes::find)
                .put(recipes::update)
                .delete(recipes::delete),
        )
        .route(
            "/api/generate-plan",
            get(plan::quick).post(plan::generate),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
