//! Command-line interface for the Wayfarer recommender.
//!
//! `wayfarer serve` exposes the HTTP API and `wayfarer recommend` prints a
//! ranking for a single query. Options layer CLI flags over environment
//! variables and configuration files through `ortho_config`.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use wayfarer_core::SqliteDestinationStore;
use wayfarer_recommender::Snapshot;

mod error;
mod recommend;
mod serve;

pub use error::CliError;

use recommend::{RecommendArgs, run_recommend};
use serve::{ServeArgs, run_serve};

const ARG_DATABASE: &str = "database";
const ARG_SERVE_BIND: &str = "bind";
const ARG_SERVE_ALLOWED_ORIGIN: &str = "allowed-origin";
const ARG_RECOMMEND_MODE: &str = "mode";
const ARG_RECOMMEND_TOP_N: &str = "top-n";
const ARG_RECOMMEND_ALPHA: &str = "alpha";
const ARG_RECOMMEND_QUERY: &str = "query";
const ENV_RECOMMEND_QUERY: &str = "WAYFARER_CMDS_RECOMMEND_QUERY";

const DEFAULT_DATABASE: &str = "destinations.db";

/// Run the Wayfarer CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// catalogue cannot be loaded, or the selected command fails.
pub async fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Serve(args) => run_serve(args).await,
        Command::Recommend(args) => run_recommend(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "wayfarer",
    about = "Similarity-based travel destination recommendations",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the recommendation API over HTTP.
    Serve(ServeArgs),
    /// Print recommendations for a single query as JSON.
    Recommend(RecommendArgs),
}

fn database_or_default(database: Option<Utf8PathBuf>) -> Utf8PathBuf {
    database.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATABASE))
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        })
    }
}

/// Load the catalogue at `path` and derive its snapshot.
fn load_snapshot(path: &Utf8Path) -> Result<Snapshot, CliError> {
    require_existing(path, ARG_DATABASE)?;
    let store =
        SqliteDestinationStore::open(path.as_std_path()).map_err(|source| CliError::LoadStore {
            path: path.to_path_buf(),
            source,
        })?;
    Snapshot::from_store(&store).map_err(|source| CliError::BuildSnapshot {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests;
