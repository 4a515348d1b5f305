use sqlx::PgPool;

use crate::config::Config;
use crate::db::create_db_pool;

/// Shared application state.
///
/// Constructed once at startup and injected into every handler through
/// axum's `State` extractor; the pool is the only shared resource.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let db_pool = create_db_pool(&config.database).await?;

        Ok(AppState { db_pool })
    }
}
