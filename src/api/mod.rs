pub mod health;
pub mod invoices;

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

/// Assembles all API routes into one router.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(invoices::create_invoice_router())
        .merge(health::create_health_router())
}
