//! # Receipt API
//!
//! HTTP server that scores submitted receipts and serves their points.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Receipt API Layers                              │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Router (routes.rs)                                              │  │
//! │  │  TraceLayer ─► access log ─► DefaultBodyLimit ─► handler         │  │
//! │  │                                                                  │  │
//! │  │  POST /receipts/process      GET /receipts/{id}/points           │  │
//! │  │  GET  /receipts/{id}         GET /health                         │  │
//! │  └───────────────────────────────┬──────────────────────────────────┘  │
//! │                                  │                                      │
//! │  ┌───────────────────────────────▼──────────────────────────────────┐  │
//! │  │  ReceiptService (services/)                                      │  │
//! │  │  parse ─► normalize ─► verify_total ─► store.put                 │  │
//! │  └───────────────────────────────┬──────────────────────────────────┘  │
//! │                                  │                                      │
//! │  ┌───────────────────────────────▼──────────────────────────────────┐  │
//! │  │  Arc<dyn ReceiptStore>  (InMemoryReceiptStore)                   │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;
pub mod services;

use std::sync::Arc;

use receipt_store::ReceiptStore;

pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ErrorCode};
pub use routes::create_router;
pub use services::ReceiptService;

/// Default `RUST_LOG` filter when none is set.
pub const DEFAULT_LOG_FILTER: &str = "receipt_api=info,receipt_store=info,tower_http=info";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub receipts: ReceiptService,
}

impl AppState {
    /// Builds state around a store.
    pub fn new(store: Arc<dyn ReceiptStore>) -> Self {
        AppState {
            receipts: ReceiptService::new(store),
        }
    }
}
