//! Recommend command implementation for the Wayfarer CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wayfarer_core::Destination;
use wayfarer_recommender::{DEFAULT_ALPHA, DEFAULT_TOP_N, Snapshot};

use crate::{
    ARG_DATABASE, ARG_RECOMMEND_ALPHA, ARG_RECOMMEND_MODE, ARG_RECOMMEND_QUERY,
    ARG_RECOMMEND_TOP_N, CliError, ENV_RECOMMEND_QUERY, database_or_default, load_snapshot,
};

/// Similarity used to rank destinations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum RecommendMode {
    /// TF-IDF similarity of descriptions and tags.
    #[default]
    Text,
    /// Cosine similarity of scaled trait scores.
    Traits,
    /// Weighted blend of text and trait similarity.
    Hybrid,
}

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Find destinations whose name or location contains the \
                 query and print the most similar other destinations as \
                 pretty-printed JSON.",
    about = "Recommend destinations similar to a query"
)]
#[ortho_config(prefix = "WAYFARER")]
pub(crate) struct RecommendArgs {
    /// Place name or location to match.
    #[arg(value_name = ARG_RECOMMEND_QUERY)]
    #[serde(default)]
    pub(crate) query: Option<String>,
    /// Path to the SQLite destination catalogue.
    #[arg(long = ARG_DATABASE, value_name = "path")]
    #[serde(default)]
    pub(crate) database: Option<Utf8PathBuf>,
    /// Ranking strategy.
    #[arg(long = ARG_RECOMMEND_MODE, value_enum)]
    #[serde(default)]
    pub(crate) mode: Option<RecommendMode>,
    /// Maximum number of destinations to print.
    #[arg(long = ARG_RECOMMEND_TOP_N, value_name = "count")]
    #[serde(default)]
    pub(crate) top_n: Option<usize>,
    /// Weight of text similarity in hybrid mode, between 0 and 1.
    #[arg(long = ARG_RECOMMEND_ALPHA, value_name = "weight")]
    #[serde(default)]
    pub(crate) alpha: Option<f64>,
}

impl RecommendArgs {
    fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    pub(crate) query: String,
    pub(crate) database: Utf8PathBuf,
    pub(crate) mode: RecommendMode,
    pub(crate) top_n: usize,
    pub(crate) alpha: f64,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let query = args.query.ok_or(CliError::MissingArgument {
            field: ARG_RECOMMEND_QUERY,
            env: ENV_RECOMMEND_QUERY,
        })?;
        Ok(Self {
            query,
            database: database_or_default(args.database),
            mode: args.mode.unwrap_or_default(),
            top_n: args.top_n.unwrap_or(DEFAULT_TOP_N),
            alpha: args.alpha.unwrap_or(DEFAULT_ALPHA),
        })
    }
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let snapshot = load_snapshot(&config.database)?;
    let mut stdout = std::io::stdout().lock();
    write_recommendations(&mut stdout, &snapshot, &config)
}

/// Rank `snapshot` for `config` and write the destinations as JSON.
pub(crate) fn write_recommendations(
    writer: &mut dyn Write,
    snapshot: &Snapshot,
    config: &RecommendConfig,
) -> Result<(), CliError> {
    log::debug!("recommend {:?} query={:?}", config.mode, config.query);
    let ranked = match config.mode {
        RecommendMode::Text => snapshot.recommend_by_query(&config.query, config.top_n),
        RecommendMode::Traits => snapshot.recommend_by_traits(&config.query, config.top_n),
        RecommendMode::Hybrid => {
            snapshot.recommend_hybrid(&config.query, config.top_n, config.alpha)
        }
    }?;
    let destinations: Vec<&Destination> = ranked
        .iter()
        .map(|recommendation| recommendation.destination)
        .collect();
    let payload =
        serde_json::to_string_pretty(&destinations).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
