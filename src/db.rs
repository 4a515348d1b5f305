use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use crate::config::DatabaseConfig;

/// Create the database connection pool shared by all handlers.
pub async fn create_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    info!(
        "creating database pool with {} max connections",
        config.max_connections
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .test_before_acquire(true)
        .connect(&config.url)
        .await?;

    info!("database pool created");
    Ok(pool)
}
