//! Error types emitted by the Wayfarer CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>`.

use std::{net::AddrParseError, sync::Arc};

use camino::Utf8PathBuf;
use thiserror::Error;
use wayfarer_core::SqliteDestinationStoreError;
use wayfarer_recommender::{RecommendError, SnapshotError};
use wayfarer_server::ServeError;

/// Errors emitted by the Wayfarer CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk or is not a file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        /// Option that named the path.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// The bind address could not be parsed.
    #[error("invalid bind address {value:?}: {source}")]
    InvalidBind {
        /// The rejected value.
        value: String,
        /// Parser error.
        #[source]
        source: AddrParseError,
    },
    /// Loading the catalogue failed.
    #[error("failed to load destinations from {path:?}: {source}")]
    LoadStore {
        /// Database path.
        path: Utf8PathBuf,
        /// Store error.
        #[source]
        source: SqliteDestinationStoreError,
    },
    /// The loaded catalogue could not be turned into a snapshot.
    #[error("failed to build snapshot from {path:?}: {source}")]
    BuildSnapshot {
        /// Database path.
        path: Utf8PathBuf,
        /// Snapshot error.
        #[source]
        source: SnapshotError,
    },
    /// Ranking destinations failed.
    #[error("failed to recommend destinations: {0}")]
    Recommend(#[from] RecommendError),
    /// Serving the HTTP API failed.
    #[error(transparent)]
    Serve(#[from] ServeError),
    /// Serialising recommendations to JSON failed.
    #[error("failed to serialise recommendations: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing recommendations to stdout failed.
    #[error("failed to write recommendations: {0}")]
    WriteOutput(#[source] std::io::Error),
}
