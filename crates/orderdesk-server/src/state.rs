use orderdesk_core::store::RecordStore;
use std::sync::Arc;

/// Shared application state passed to all route handlers.
///
/// The store is read-only after startup; handlers only ever borrow it.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RecordStore>,
}

impl AppState {
    pub fn new(store: RecordStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderdesk_core::dataset::Dataset;

    #[test]
    fn clones_share_one_store() {
        let state = AppState::new(RecordStore::from_dataset(Dataset::sample()));
        let other = state.clone();
        assert!(Arc::ptr_eq(&state.store, &other.store));
        assert_eq!(other.store.orders.len(), 2);
    }
}
