//! Facade crate for the Wayfarer destination recommender.
//!
//! This crate re-exports the core domain types and the recommenders, and
//! exposes the SQLite store and HTTP server behind feature flags.

#![forbid(unsafe_code)]

pub use wayfarer_core::{
    Destination, DestinationStore, KeywordDictionary, KeywordError, KeywordExtractor,
    KeywordProfile, Trait, TraitScores,
};
pub use wayfarer_recommender::{
    DEFAULT_ALPHA, DEFAULT_TOP_N, Recommendation, RecommendError, Snapshot, SnapshotError,
    VibeRequest,
};

#[cfg(feature = "store-sqlite")]
pub use wayfarer_core::{SqliteDestinationStore, SqliteDestinationStoreError};

#[cfg(feature = "server")]
pub use wayfarer_server::{AppState, create_router, serve};
