//! Service layer.
//!
//! Handlers stay thin: they hand request bytes and path segments to a
//! service and map its `ApiError` straight into a response.

pub mod receipt_service;

pub use receipt_service::ReceiptService;
