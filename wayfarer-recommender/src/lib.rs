//! Similarity-based destination recommendations.
//!
//! A [`Snapshot`] loads the whole catalogue once and derives two feature sets
//! per destination:
//! - a TF-IDF vector over its lowercase description and tags, built by
//!   [`TfidfVectorizer`] with English stop words removed;
//! - a five-trait vector with each column min-max scaled by
//!   [`MinMaxScaler`].
//!
//! Four recommenders rank destinations against those features: by text, by
//! traits, by a weighted blend of both, and by explicit trait preferences
//! ([`VibeRequest`]). [`Snapshot::suggest`] offers location labels for
//! autocomplete.
//!
//! # Examples
//!
//! ```
//! use wayfarer_core::{Destination, TraitScores};
//! use wayfarer_recommender::{DEFAULT_ALPHA, Snapshot};
//!
//! let snapshot = Snapshot::build(vec![
//!     Destination::new(1, "Beach Resort")
//!         .with_description("beach resort")
//!         .with_traits(TraitScores::from_array([1, 5, 1, 1, 5])),
//!     Destination::new(2, "Mountain Trek")
//!         .with_description("mountain trek")
//!         .with_traits(TraitScores::from_array([5, 1, 5, 1, 1])),
//!     Destination::new(3, "Beach Trek")
//!         .with_description("beach trek")
//!         .with_traits(TraitScores::from_array([3, 3, 3, 3, 3])),
//! ])
//! .expect("catalogue is not empty");
//!
//! let ranked = snapshot
//!     .recommend_hybrid("beach", 1, DEFAULT_ALPHA)
//!     .expect("query matches");
//! assert_eq!(ranked[0].destination.name, "Mountain Trek");
//! ```

#![forbid(unsafe_code)]

mod cosine;
mod error;
mod recommend;
mod scaler;
mod snapshot;
mod tfidf;
mod vibe;

pub use cosine::cosine_similarity;
pub use error::{RecommendError, SnapshotError};
pub use recommend::{DEFAULT_ALPHA, DEFAULT_TOP_N, Recommendation, SUGGESTION_LIMIT};
pub use scaler::MinMaxScaler;
pub use snapshot::{Snapshot, TRAIT_DIMENSIONS, TraitVector};
pub use tfidf::{SparseVector, TfidfVectorizer, english_stop_words, tokenize};
pub use vibe::VibeRequest;
