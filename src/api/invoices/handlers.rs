use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json as ResponseJson,
    routing::{delete, get, post, put},
    Json, Router,
};
use std::sync::Arc;
use tracing::info;

use crate::api::invoices::repository;
use crate::error::AppError;
use crate::models::{
    CreateInvoiceRequest, DeleteResponse, InvoiceListResponse, InvoiceResponse,
    UpdateInvoiceRequest,
};
use crate::state::AppState;

/// GET /invoices
pub async fn list_invoices_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<ResponseJson<InvoiceListResponse>, AppError> {
    let invoices = repository::list_invoices(&app_state.db_pool).await?;

    Ok(ResponseJson(InvoiceListResponse { invoices }))
}

/// GET /invoices/:id
pub async fn get_invoice_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<ResponseJson<InvoiceResponse>, AppError> {
    let invoice = repository::get_invoice(&app_state.db_pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("invoice with id {}", id)))?;

    Ok(ResponseJson(InvoiceResponse { invoice }))
}

/// POST /invoices
///
/// The store assigns `id`, `paid` and `add_date`; constraint violations
/// (unknown `comp_code`, missing values) surface through the error renderer.
pub async fn create_invoice_handler(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<CreateInvoiceRequest>,
) -> Result<(StatusCode, ResponseJson<InvoiceResponse>), AppError> {
    let invoice =
        repository::create_invoice(&app_state.db_pool, &request.comp_code, request.amt).await?;

    info!(
        "created invoice {} for company {}",
        invoice.id, invoice.comp_code
    );

    Ok((StatusCode::CREATED, ResponseJson(InvoiceResponse { invoice })))
}

/// PUT /invoices/:id
///
/// Updates `amt` only; `comp_code` cannot be changed through this route.
pub async fn update_invoice_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateInvoiceRequest>,
) -> Result<ResponseJson<InvoiceResponse>, AppError> {
    let invoice = repository::update_invoice_amount(&app_state.db_pool, id, request.amt)
        .await?
        .ok_or_else(|| AppError::not_found(format!("invoice with id {}", id)))?;

    Ok(ResponseJson(InvoiceResponse { invoice }))
}

/// DELETE /invoices/:id
pub async fn delete_invoice_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<ResponseJson<DeleteResponse>, AppError> {
    let deleted = repository::delete_invoice(&app_state.db_pool, id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("invoice with id {}", id)));
    }

    info!("deleted invoice {}", id);

    Ok(ResponseJson(DeleteResponse::deleted()))
}

/// Creates the router for all invoice endpoints.
pub fn create_invoice_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/invoices", get(list_invoices_handler))
        .route("/invoices", post(create_invoice_handler))
        .route("/invoices/:id", get(get_invoice_handler))
        .route("/invoices/:id", put(update_invoice_handler))
        .route("/invoices/:id", delete(delete_invoice_handler))
}
