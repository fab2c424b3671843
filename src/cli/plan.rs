use std::path::PathBuf;

use anyhow::Result;
use menuplan::Config;
use menuplan_mealplan::{MemoryStore, PlanRequest};

#[tracing::instrument(skip(config))]
pub async fn generate(config: &Config, request: Option<PathBuf>, week: Option<String>) -> Result<()> {
    let mut request = match request {
        Some(path) => serde_json::from_str::<PlanRequest>(&tokio::fs::read_to_string(path).await?)?,
        None => PlanRequest::default(),
    };

    if week.is_some() {
        request.week_id = week;
    }

    let pool = menuplan::db::create_pool(&config.database.url, 1).await?;
    menuplan_db::migrate(&pool).await?;
    let recipes = menuplan_recipe::Query(pool.clone()).all().await?;
    pool.close().await;

    let store = MemoryStore::new(recipes);
    let plan = menuplan_mealplan::generate(&store, request);

    println!("{}", serde_json::to_string_pretty(&plan)?);

    Ok(())
}
