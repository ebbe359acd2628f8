//! # In-Memory Receipt Store
//!
//! Process-lifetime storage backed by a `HashMap` behind an `RwLock`.
//!
//! ## Locking
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Lock Discipline                                 │
//! │                                                                         │
//! │  put(receipt)                                                          │
//! │    └── write lock ──► entry(id) ──┬── Vacant   → insert, Ok            │
//! │                                   └── Occupied → AlreadyExists         │
//! │        (check and insert in ONE critical section)                      │
//! │                                                                         │
//! │  get(id)                                                               │
//! │    └── read lock ──► clone Arc<Receipt> ──► release                    │
//! │        (readers run in parallel with each other)                       │
//! │                                                                         │
//! │  No lock is held across an .await; nothing here performs I/O.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use receipt_core::{Receipt, ReceiptId};
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::repository::ReceiptStore;

/// In-memory [`ReceiptStore`].
#[derive(Debug, Default)]
pub struct InMemoryReceiptStore {
    receipts: RwLock<HashMap<ReceiptId, Arc<Receipt>>>,
}

impl InMemoryReceiptStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        InMemoryReceiptStore::default()
    }
}

impl ReceiptStore for InMemoryReceiptStore {
    fn put(&self, receipt: Receipt) -> StoreResult<()> {
        let id = receipt.id;
        let mut receipts = self.receipts.write().map_err(|_| StoreError::Poisoned)?;

        match receipts.entry(id) {
            Entry::Occupied(_) => {
                debug!(id = %id, "Receipt already stored");
                Err(StoreError::AlreadyExists(id))
            }
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(receipt));
                info!(id = %id, "Receipt saved");
                Ok(())
            }
        }
    }

    fn get(&self, id: &ReceiptId) -> StoreResult<Arc<Receipt>> {
        let receipt = self
            .receipts
            .read()
            .map_err(|_| StoreError::Poisoned)?
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound(*id))?;

        info!(id = %id, "Receipt retrieved");
        Ok(receipt)
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.receipts.read().map_err(|_| StoreError::Poisoned)?.len())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Barrier;
    use std::thread;

    use chrono::NaiveDate;
    use receipt_core::{Item, Money};

    use super::*;

    fn receipt(id: ReceiptId, points: i64) -> Receipt {
        Receipt {
            id,
            retailer: "Target".to_string(),
            purchased_at: NaiveDate::from_ymd_opt(2022, 1, 1)
                .and_then(|d| d.and_hms_opt(13, 1, 0))
                .unwrap(),
            total: Money::from_cents(649),
            items: vec![Item {
                short_description: "Mountain Dew 12PK".to_string(),
                price: Money::from_cents(649),
            }],
            points,
        }
    }

    #[test]
    fn test_put_then_get() {
        let store = InMemoryReceiptStore::new();
        let id = ReceiptId::new_random();

        store.put(receipt(id, 28)).unwrap();

        let saved = store.get(&id).unwrap();
        assert_eq!(saved.id, id);
        assert_eq!(saved.points, 28);
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_get_unknown_id() {
        let store = InMemoryReceiptStore::new();
        let id = ReceiptId::new_random();

        assert!(matches!(store.get(&id), Err(StoreError::NotFound(missing)) if missing == id));
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_put_never_overwrites() {
        let store = InMemoryReceiptStore::new();
        let id = ReceiptId::new_random();

        store.put(receipt(id, 1)).unwrap();
        let second = store.put(receipt(id, 2));

        assert!(matches!(second, Err(StoreError::AlreadyExists(existing)) if existing == id));
        assert_eq!(store.get(&id).unwrap().points, 1);
    }

    #[test]
    fn test_reads_are_stable_snapshots() {
        let store = InMemoryReceiptStore::new();
        let id = ReceiptId::new_random();
        store.put(receipt(id, 7)).unwrap();

        let first = store.get(&id).unwrap();
        store.put(receipt(ReceiptId::new_random(), 99)).unwrap();
        let second = store.get(&id).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.points, 7);
    }

    #[test]
    fn test_concurrent_same_id_has_one_winner() {
        const WRITERS: usize = 16;

        let store = InMemoryReceiptStore::new();
        let id = ReceiptId::new_random();
        let barrier = Barrier::new(WRITERS);

        let results: Vec<StoreResult<()>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..WRITERS)
                .map(|points| {
                    let store = &store;
                    let barrier = &barrier;
                    scope.spawn(move || {
                        barrier.wait();
                        store.put(receipt(id, points as i64))
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let winners = results.iter().filter(|r| r.is_ok()).count();
        let conflicts = results
            .iter()
            .filter(|r| matches!(r, Err(StoreError::AlreadyExists(_))))
            .count();

        assert_eq!(winners, 1);
        assert_eq!(conflicts, WRITERS - 1);
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_concurrent_distinct_ids_all_succeed() {
        const WRITERS: usize = 16;

        let store = InMemoryReceiptStore::new();
        let ids: Vec<ReceiptId> = (0..WRITERS).map(|_| ReceiptId::new_random()).collect();

        thread::scope(|scope| {
            for (points, id) in ids.iter().enumerate() {
                let store = &store;
                scope.spawn(move || store.put(receipt(*id, points as i64)).unwrap());
            }
        });

        assert_eq!(store.len().unwrap(), WRITERS);
        for (points, id) in ids.iter().enumerate() {
            assert_eq!(store.get(id).unwrap().points, points as i64);
        }
    }

    #[test]
    fn test_usable_as_trait_object() {
        let store: Arc<dyn ReceiptStore> = Arc::new(InMemoryReceiptStore::new());
        let id = ReceiptId::new_random();

        store.put(receipt(id, 3)).unwrap();
        assert_eq!(store.get(&id).unwrap().points, 3);
    }
}
