//! # receipt-store: Storage Layer for the Receipt Processor
//!
//! This crate provides the identifier-keyed store that scored receipts are
//! saved into and looked up from.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Processor Data Flow                         │
//! │                                                                         │
//! │  ReceiptService (submit / points)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   receipt-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────────┐        ┌──────────────────────────┐   │   │
//! │  │   │  ReceiptStore      │◄───────│  InMemoryReceiptStore    │   │   │
//! │  │   │  (trait)           │        │  RwLock<HashMap<..>>     │   │   │
//! │  │   │  put / get         │        │                          │   │   │
//! │  │   └────────────────────┘        └──────────────────────────┘   │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`error`] - Store error types
//! - [`repository`] - The `ReceiptStore` trait and its backends
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use receipt_store::{InMemoryReceiptStore, ReceiptStore};
//!
//! let store: Arc<dyn ReceiptStore> = Arc::new(InMemoryReceiptStore::new());
//! store.put(receipt)?;
//! let saved = store.get(&id)?;
//! ```

pub mod error;
pub mod repository;

pub use error::{StoreError, StoreResult};
pub use repository::memory::InMemoryReceiptStore;
pub use repository::ReceiptStore;
