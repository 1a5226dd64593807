//! Shared state between handlers.

use ::std::sync::Arc;

use ::clustermeta_common::database::ClusterStore;

/// The store handle, created once at startup and shared by every request.
pub(crate) struct AppState<DB> {
    db: Arc<DB>,
}

impl<DB: ClusterStore> AppState<DB> {
    pub(crate) fn new(db: DB) -> Self {
        Self { db: Arc::new(db) }
    }

    pub(crate) fn get_db(&self) -> &DB {
        &self.db
    }
}

// derive(Clone) would require `DB: Clone`
impl<DB> Clone for AppState<DB> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
        }
    }
}
