use crate::dataset::Dataset;
use crate::model::{Customer, Order, Record};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Collection
// ---------------------------------------------------------------------------

/// Ordered, read-only sequence of records with an id index.
///
/// Records keep their insertion order for `list()`. When two records share an
/// id, the first one wins `find_by_id()`; later duplicates remain visible in
/// `list()` only.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Record> Collection<T> {
    pub fn new(records: Vec<T>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            if index.contains_key(record.id()) {
                tracing::warn!(id = record.id(), "duplicate record id, keeping first");
                continue;
            }
            index.insert(record.id().to_string(), pos);
        }
        Self { records, index }
    }

    pub fn list(&self) -> &[T] {
        &self.records
    }

    pub fn find_by_id(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&pos| &self.records[pos])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

// ---------------------------------------------------------------------------
// RecordStore
// ---------------------------------------------------------------------------

/// Every customer and order the process knows about.
///
/// Built once at startup and never mutated afterwards, so it can be shared
/// behind an `Arc` without a lock.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    pub customers: Collection<Customer>,
    pub orders: Collection<Order>,
}

impl RecordStore {
    pub fn new(customers: Vec<Customer>, orders: Vec<Order>) -> Self {
        let store = Self {
            customers: Collection::new(customers),
            orders: Collection::new(orders),
        };
        tracing::debug!(
            customers = store.customers.len(),
            orders = store.orders.len(),
            "record store loaded"
        );
        store
    }

    pub fn from_dataset(dataset: Dataset) -> Self {
        Self::new(dataset.customers, dataset.orders)
    }

    pub fn empty() -> Self {
        Self::default()
    }
}
