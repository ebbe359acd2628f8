//! # Repository Module
//!
//! The storage abstraction for scored receipts.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  ReceiptService                                                        │
//! │       │                                                                 │
//! │       │  store.put(receipt) / store.get(&id)                           │
//! │       ▼                                                                 │
//! │  dyn ReceiptStore                                                      │
//! │  ├── put(&self, receipt)   → Ok | AlreadyExists                        │
//! │  └── get(&self, &id)       → Arc<Receipt> | NotFound                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InMemoryReceiptStore (today) / a durable backend (later)              │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Points engine and normalizer never see the backend                  │
//! │  • One fresh store per test case                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Backends
//!
//! - [`InMemoryReceiptStore`](memory::InMemoryReceiptStore) - process-lifetime map

use std::sync::Arc;

use receipt_core::{Receipt, ReceiptId};

use crate::error::StoreResult;

pub mod memory;

/// Identifier-keyed receipt storage.
///
/// ## Contract
/// - `put` never overwrites: an existing identifier yields `AlreadyExists`,
///   and the existence check and insert happen atomically
/// - `get` hands back an immutable shared handle; stored state cannot be
///   mutated through it
/// - only fully normalized, scored receipts are ever stored
pub trait ReceiptStore: Send + Sync {
    /// Stores a receipt under its own identifier.
    fn put(&self, receipt: Receipt) -> StoreResult<()>;

    /// Looks up a receipt by identifier.
    fn get(&self, id: &ReceiptId) -> StoreResult<Arc<Receipt>>;

    /// Number of stored receipts.
    fn len(&self) -> StoreResult<usize>;

    /// True when nothing has been stored.
    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}
