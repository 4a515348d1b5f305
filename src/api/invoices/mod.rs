// Invoice resource module: one route per SQL statement over the invoices table.

pub mod handlers;
pub mod repository;

pub use handlers::create_invoice_router;
