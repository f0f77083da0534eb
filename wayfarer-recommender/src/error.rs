//! Error types raised while building snapshots and ranking destinations.

use thiserror::Error;
use wayfarer_core::Trait;

/// Errors raised while building a [`Snapshot`](crate::Snapshot).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// The catalogue contained no destinations.
    #[error("cannot build a snapshot from an empty catalogue")]
    EmptyCatalog,
}

/// Errors raised by the recommenders.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecommendError {
    /// The query was empty or whitespace.
    #[error("query must not be empty")]
    EmptyQuery,
    /// No destination name or location contains the query.
    #[error("no destinations match '{query}'")]
    NoMatches {
        /// Query as supplied by the caller.
        query: String,
    },
    /// The hybrid weight was not a finite number in `[0, 1]`.
    #[error("alpha must be between 0 and 1, got {alpha}")]
    InvalidAlpha {
        /// Rejected weight.
        alpha: f64,
    },
    /// A vibe request omitted a trait.
    #[error("missing trait: {name}")]
    MissingTrait {
        /// Trait that was not supplied.
        name: Trait,
    },
    /// A vibe request supplied NaN or an infinite value.
    #[error("trait {name} must be a finite number, got {value}")]
    NonFiniteTrait {
        /// Offending trait.
        name: Trait,
        /// Rejected value.
        value: f64,
    },
}
