use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `invoices` table.
///
/// `paid`, `add_date` and `paid_date` are store-assigned billing-state
/// fields; no route mutates them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Invoice {
    pub id: i32,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateInvoiceRequest {
    pub comp_code: String,
    pub amt: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInvoiceRequest {
    pub amt: f64,
}

#[derive(Debug, Serialize)]
pub struct InvoiceListResponse {
    pub invoices: Vec<Invoice>,
}

#[derive(Debug, Serialize)]
pub struct InvoiceResponse {
    pub invoice: Invoice,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub status: String,
}

impl DeleteResponse {
    pub fn deleted() -> Self {
        DeleteResponse {
            status: "deleted".to_string(),
        }
    }
}
