//! Serve command implementation for the Wayfarer CLI.

use std::net::SocketAddr;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wayfarer_server::{AppState, DEFAULT_ALLOWED_ORIGIN, create_router, serve};

use crate::{
    ARG_DATABASE, ARG_SERVE_ALLOWED_ORIGIN, ARG_SERVE_BIND, CliError, database_or_default,
    load_snapshot,
};

/// Address the API listens on when none is configured.
pub(crate) const DEFAULT_BIND: &str = "0.0.0.0:5000";

/// CLI arguments for the `serve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load the destination catalogue from SQLite, derive its \
                 text and trait features once, and answer recommendation \
                 requests over HTTP.",
    about = "Serve the recommendation API"
)]
#[ortho_config(prefix = "WAYFARER")]
pub(crate) struct ServeArgs {
    /// Path to the SQLite destination catalogue.
    #[arg(long = ARG_DATABASE, value_name = "path")]
    #[serde(default)]
    pub(crate) database: Option<Utf8PathBuf>,
    /// Socket address to listen on (e.g. "127.0.0.1:5000").
    #[arg(long = ARG_SERVE_BIND, value_name = "addr")]
    #[serde(default)]
    pub(crate) bind: Option<String>,
    /// Browser origin allowed to call the API.
    #[arg(long = ARG_SERVE_ALLOWED_ORIGIN, value_name = "url")]
    #[serde(default)]
    pub(crate) allowed_origin: Option<String>,
}

impl ServeArgs {
    fn into_config(self) -> Result<ServeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ServeConfig::try_from(merged)
    }
}

/// Resolved `serve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ServeConfig {
    pub(crate) database: Utf8PathBuf,
    pub(crate) bind: SocketAddr,
    pub(crate) allowed_origin: String,
}

impl TryFrom<ServeArgs> for ServeConfig {
    type Error = CliError;

    fn try_from(args: ServeArgs) -> Result<Self, Self::Error> {
        let raw_bind = args.bind.unwrap_or_else(|| DEFAULT_BIND.to_owned());
        let bind = raw_bind
            .parse()
            .map_err(|source| CliError::InvalidBind {
                value: raw_bind.clone(),
                source,
            })?;
        Ok(Self {
            database: database_or_default(args.database),
            bind,
            allowed_origin: args
                .allowed_origin
                .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_owned()),
        })
    }
}

pub(crate) async fn run_serve(args: ServeArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let snapshot = load_snapshot(&config.database)?;
    let router = create_router(AppState::new(snapshot), &config.allowed_origin)?;
    log::info!(
        "serving {} with CORS origin {}",
        config.database,
        config.allowed_origin
    );
    serve(router, config.bind).await?;
    Ok(())
}
