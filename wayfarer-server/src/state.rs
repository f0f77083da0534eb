//! Shared request state.

use std::sync::Arc;

use wayfarer_recommender::Snapshot;

/// State cloned into every handler.
///
/// The snapshot is immutable, so handlers read it concurrently without
/// locking.
#[derive(Debug, Clone)]
pub struct AppState {
    snapshot: Arc<Snapshot>,
}

impl AppState {
    /// Wrap a snapshot for sharing across handlers.
    #[must_use]
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }

    /// The catalogue snapshot.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

impl From<Arc<Snapshot>> for AppState {
    fn from(snapshot: Arc<Snapshot>) -> Self {
        Self { snapshot }
    }
}
