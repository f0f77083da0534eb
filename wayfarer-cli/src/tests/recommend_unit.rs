//! Focused unit tests covering recommend CLI configuration and output.

use super::helpers::Catalogue;
use super::*;
use crate::recommend::{RecommendArgs, RecommendConfig, RecommendMode, write_recommendations};
use rstest::{fixture, rstest};
use wayfarer_recommender::{DEFAULT_ALPHA, DEFAULT_TOP_N, RecommendError};

#[fixture]
fn catalogue() -> Catalogue {
    Catalogue::new()
}

fn config(catalogue: &Catalogue, query: &str, mode: RecommendMode) -> RecommendConfig {
    RecommendConfig {
        query: query.to_owned(),
        database: catalogue.path().to_path_buf(),
        mode,
        top_n: 2,
        alpha: DEFAULT_ALPHA,
    }
}

fn printed_names(output: &[u8]) -> Vec<String> {
    let value: serde_json::Value = serde_json::from_slice(output).expect("output is JSON");
    value
        .as_array()
        .expect("output is an array")
        .iter()
        .map(|destination| {
            destination["name"]
                .as_str()
                .expect("name is a string")
                .to_owned()
        })
        .collect()
}

#[rstest]
fn converting_recommend_without_query_errors() {
    let err = RecommendConfig::try_from(RecommendArgs::default())
        .expect_err("missing query should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_RECOMMEND_QUERY);
            assert_eq!(env, ENV_RECOMMEND_QUERY);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn recommend_config_applies_defaults() {
    let args = RecommendArgs {
        query: Some("goa".to_owned()),
        ..RecommendArgs::default()
    };
    let config = RecommendConfig::try_from(args).expect("config should build");
    assert_eq!(config.database, Utf8PathBuf::from(DEFAULT_DATABASE));
    assert_eq!(config.mode, RecommendMode::Text);
    assert_eq!(config.top_n, DEFAULT_TOP_N);
    assert_eq!(config.alpha, DEFAULT_ALPHA);
}

#[rstest]
#[case("text", RecommendMode::Text)]
#[case("traits", RecommendMode::Traits)]
#[case("hybrid", RecommendMode::Hybrid)]
fn mode_flag_selects_strategy(#[case] flag: &str, #[case] expected: RecommendMode) {
    let cli = Cli::try_parse_from(["wayfarer", "recommend", "--mode", flag, "goa"])
        .expect("flags parse");
    let Command::Recommend(args) = cli.command else {
        panic!("expected the recommend subcommand");
    };
    assert_eq!(args.mode, Some(expected));
    assert_eq!(args.query.as_deref(), Some("goa"));
}

#[rstest]
fn unknown_mode_is_a_parse_error() {
    let err = Cli::try_parse_from(["wayfarer", "recommend", "--mode", "vibes", "goa"])
        .expect_err("unknown mode should fail");
    assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
}

#[rstest]
fn loading_a_missing_database_reports_the_path(catalogue: Catalogue) {
    match load_snapshot(catalogue.missing()).expect_err("missing database") {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_DATABASE);
            assert_eq!(path, catalogue.missing());
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
#[case(RecommendMode::Text, "calangute", "Palolem")]
#[case(RecommendMode::Traits, "spiti", "Hampi")]
#[case(RecommendMode::Hybrid, "calangute", "Palolem")]
fn writes_ranked_destinations_as_json(
    catalogue: Catalogue,
    #[case] mode: RecommendMode,
    #[case] query: &str,
    #[case] first: &str,
) {
    let snapshot = load_snapshot(catalogue.path()).expect("catalogue loads");
    let mut output = Vec::new();
    write_recommendations(&mut output, &snapshot, &config(&catalogue, query, mode))
        .expect("recommendations are written");
    let names = printed_names(&output);
    assert_eq!(names.len(), 2);
    assert_eq!(names.first().map(String::as_str), Some(first));
    assert!(output.ends_with(b"\n"));
}

#[rstest]
fn invalid_alpha_is_reported(catalogue: Catalogue) {
    let snapshot = load_snapshot(catalogue.path()).expect("catalogue loads");
    let mut config = config(&catalogue, "goa", RecommendMode::Hybrid);
    config.alpha = 1.5;
    let mut output = Vec::new();
    let err = write_recommendations(&mut output, &snapshot, &config)
        .expect_err("alpha outside [0, 1]");
    assert!(matches!(
        err,
        CliError::Recommend(RecommendError::InvalidAlpha { .. })
    ));
    assert!(output.is_empty());
}
