//! Receipt submission and lookup.
//!
//! ## Submission Pipeline
//! ```text
//! bytes ─► parse_receipt ─► normalize ─► verify_total ─► store.put ─► id
//!              │                │              │              │
//!              ▼                ▼              ▼              ▼
//!         400 codes      NORMALIZATION   TOTAL_MISMATCH   CONFLICT / 500
//! ```
//! Nothing is stored unless every stage succeeds.

use std::sync::Arc;

use receipt_core::{normalize, parse_receipt, verify_total, Receipt, ReceiptId};
use receipt_store::ReceiptStore;
use tracing::debug;

use crate::error::ApiError;

/// Orchestrates the core pipeline against a store.
#[derive(Clone)]
pub struct ReceiptService {
    store: Arc<dyn ReceiptStore>,
}

impl ReceiptService {
    /// Create a new receipt service.
    pub fn new(store: Arc<dyn ReceiptStore>) -> Self {
        ReceiptService { store }
    }

    /// Validates, scores and stores a submitted receipt body.
    pub fn submit(&self, body: &[u8]) -> Result<ReceiptId, ApiError> {
        let raw = parse_receipt(body)?;
        let receipt = normalize(&raw)?;
        verify_total(&receipt)?;

        let id = receipt.id;
        debug!(id = %id, points = receipt.points, "Receipt accepted");
        self.store.put(receipt)?;

        Ok(id)
    }

    /// Points awarded to the receipt stored under `id`.
    pub fn points(&self, id: &str) -> Result<i64, ApiError> {
        Ok(self.receipt(id)?.points)
    }

    /// The receipt stored under `id`.
    ///
    /// A path segment that is not a UUID is `INVALID_ID`; a well-formed
    /// but unused one is `NOT_FOUND`.
    pub fn receipt(&self, id: &str) -> Result<Arc<Receipt>, ApiError> {
        let id: ReceiptId = id.parse().map_err(|_| ApiError::invalid_id())?;
        Ok(self.store.get(&id)?)
    }
}

#[cfg(test)]
mod tests {
    use receipt_store::InMemoryReceiptStore;

    use super::*;
    use crate::error::ErrorCode;

    const TARGET: &str = r#"{
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
            {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
            {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
            {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
            {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
        ],
        "total": "35.35"
    }"#;

    fn service() -> (ReceiptService, Arc<InMemoryReceiptStore>) {
        let store = Arc::new(InMemoryReceiptStore::new());
        (ReceiptService::new(store.clone()), store)
    }

    #[test]
    fn test_submit_then_points() {
        let (service, store) = service();

        let id = service.submit(TARGET.as_bytes()).unwrap();

        assert_eq!(service.points(&id.to_string()).unwrap(), 28);
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_each_submission_gets_a_fresh_id() {
        let (service, store) = service();

        let first = service.submit(TARGET.as_bytes()).unwrap();
        let second = service.submit(TARGET.as_bytes()).unwrap();

        assert_ne!(first, second);
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn test_total_mismatch_stores_nothing() {
        let (service, store) = service();
        let body = TARGET.replace("35.35", "35.36");

        let err = service.submit(body.as_bytes()).unwrap_err();

        assert_eq!(err.code, ErrorCode::TotalMismatch);
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_malformed_body_stores_nothing() {
        let (service, store) = service();

        let err = service.submit(b"{\"retailer\": ").unwrap_err();

        assert_eq!(err.code, ErrorCode::MalformedBody);
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_lookup_errors() {
        let (service, _) = service();

        assert_eq!(service.points("not-a-uuid").unwrap_err().code, ErrorCode::InvalidId);
        assert_eq!(
            service
                .points(&ReceiptId::new_random().to_string())
                .unwrap_err()
                .code,
            ErrorCode::NotFound
        );
    }

    #[test]
    fn test_receipt_returns_stored_value() {
        let (service, _) = service();
        let id = service.submit(TARGET.as_bytes()).unwrap();

        let receipt = service.receipt(&id.to_string()).unwrap();

        assert_eq!(receipt.id, id);
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.items.len(), 5);
    }
}
