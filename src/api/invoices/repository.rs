use sqlx::PgPool;

use crate::error::Result;
use crate::models::Invoice;

const INVOICE_COLUMNS: &str = "id, comp_code, amt, paid, add_date, paid_date";

pub async fn list_invoices(pool: &PgPool) -> Result<Vec<Invoice>> {
    let query = format!("SELECT {INVOICE_COLUMNS} FROM invoices");

    let invoices = sqlx::query_as::<_, Invoice>(&query).fetch_all(pool).await?;
    Ok(invoices)
}

pub async fn get_invoice(pool: &PgPool, id: i32) -> Result<Option<Invoice>> {
    let query = format!("SELECT {INVOICE_COLUMNS} FROM invoices WHERE id = $1");

    let invoice = sqlx::query_as::<_, Invoice>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(invoice)
}

pub async fn create_invoice(pool: &PgPool, comp_code: &str, amt: f64) -> Result<Invoice> {
    let query = format!(
        "INSERT INTO invoices (comp_code, amt) VALUES ($1, $2) RETURNING {INVOICE_COLUMNS}"
    );

    let invoice = sqlx::query_as::<_, Invoice>(&query)
        .bind(comp_code)
        .bind(amt)
        .fetch_one(pool)
        .await?;
    Ok(invoice)
}

/// Only `amt` is updatable; `comp_code` stays fixed through this route.
pub async fn update_invoice_amount(pool: &PgPool, id: i32, amt: f64) -> Result<Option<Invoice>> {
    let query = format!("UPDATE invoices SET amt = $1 WHERE id = $2 RETURNING {INVOICE_COLUMNS}");

    let invoice = sqlx::query_as::<_, Invoice>(&query)
        .bind(amt)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(invoice)
}

/// Returns false when no row matched the id.
pub async fn delete_invoice(pool: &PgPool, id: i32) -> Result<bool> {
    let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
