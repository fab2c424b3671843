pub mod config;
pub mod db;
pub mod error;
pub mod observability;
pub mod routes;

pub use config::Config;
pub use routes::{AppState, router};

/// Connects, migrates and builds the router. Used by `serve` and by
/// integration tests.
pub async fn create_app(config: &Config) -> anyhow::Result<axum::Router> {
    let pool = db::create_pool(&config.database.url, config.database.max_connections).await?;
    menuplan_db::migrate(&pool).await?;

    Ok(router(AppState::new(pool, config.planner.clone())))
}
