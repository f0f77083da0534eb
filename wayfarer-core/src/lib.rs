//! Core domain types for the Wayfarer destination recommender.
//!
//! The crate models the destination catalogue, the five travel traits that
//! describe each place, and the read-only store abstraction the recommender
//! loads its snapshot from. It also carries the static keyword vocabulary used
//! to derive traits and tags from free text, and pluggable string-similarity
//! strategies for matching place names.

#![forbid(unsafe_code)]

pub mod destination;
pub mod keywords;
pub mod similarity;
pub mod store;
pub mod traits;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use destination::Destination;
pub use keywords::{
    KeywordDictionary, KeywordError, KeywordExtractor, KeywordProfile, luxury_from_cost_band,
    luxury_from_price,
};
pub use similarity::{
    DEFAULT_MATCH_THRESHOLD, ExactMatch, LocationKey, StringSimilarity, TokenSortRatio,
    find_best_match,
};
pub use store::DestinationStore;
pub use traits::{Trait, TraitScores};

#[cfg(feature = "store-sqlite")]
pub use store::{SqliteDestinationStore, SqliteDestinationStoreError};
