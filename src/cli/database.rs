use std::path::PathBuf;

use anyhow::Result;
use menuplan::Config;
use sqlx::migrate::MigrateDatabase;

#[tracing::instrument(skip(config))]
pub async fn migrate(config: &Config) -> Result<()> {
    tracing::info!("Running database migrations...");

    let pool = menuplan::db::create_pool(&config.database.url, 1).await?;
    menuplan_db::migrate(&pool).await?;
    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn reset(config: &Config) -> Result<()> {
    tracing::info!("Resetting database...");

    if sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::warn!("Dropping existing database: {}", config.database.url);
        sqlx::Sqlite::drop_database(&config.database.url).await?;
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate(config).await?;

    tracing::info!("Database reset completed successfully");

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn import(config: &Config, file: PathBuf) -> Result<()> {
    let json = tokio::fs::read_to_string(&file).await?;

    let pool = menuplan::db::create_pool(&config.database.url, 1).await?;
    menuplan_db::migrate(&pool).await?;

    let recipes = menuplan_recipe::Command(pool.clone())
        .import_json(&json)
        .await?;
    pool.close().await;

    println!("Imported {} recipes from {}", recipes.len(), file.display());

    Ok(())
}
