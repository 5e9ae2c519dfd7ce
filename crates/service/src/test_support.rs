#![cfg(test)]
use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

/// Fresh in-memory SQLite database with all migrations applied.
/// Every call returns an isolated database, so tests can assert exact counts.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig::from_url("sqlite::memory:");
    let db = models::db::connect_with_config(&cfg).await?;
    models::db::migrate(&db).await?;
    Ok(db)
}
