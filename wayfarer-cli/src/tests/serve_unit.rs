//! Focused unit tests covering serve CLI configuration.

use super::*;
use crate::serve::{DEFAULT_BIND, ServeArgs, ServeConfig};
use rstest::rstest;
use wayfarer_server::DEFAULT_ALLOWED_ORIGIN;

#[rstest]
fn serve_config_applies_defaults() {
    let config = ServeConfig::try_from(ServeArgs::default()).expect("defaults are valid");
    assert_eq!(config.database, Utf8PathBuf::from(DEFAULT_DATABASE));
    let default_bind: std::net::SocketAddr = DEFAULT_BIND.parse().expect("default bind parses");
    assert_eq!(config.bind, default_bind);
    assert_eq!(config.allowed_origin, DEFAULT_ALLOWED_ORIGIN);
}

#[rstest]
fn serve_flags_override_defaults() {
    let cli = Cli::try_parse_from([
        "wayfarer",
        "serve",
        "--database",
        "catalogue.db",
        "--bind",
        "127.0.0.1:8080",
        "--allowed-origin",
        "https://wayfarer.example",
    ])
    .expect("flags parse");
    let Command::Serve(args) = cli.command else {
        panic!("expected the serve subcommand");
    };
    let config = ServeConfig::try_from(args).expect("config should build");
    assert_eq!(config.database, Utf8PathBuf::from("catalogue.db"));
    assert_eq!(config.bind.port(), 8080);
    assert_eq!(config.allowed_origin, "https://wayfarer.example");
}

#[rstest]
#[case("localhost")]
#[case("0.0.0.0")]
#[case("127.0.0.1:port")]
fn invalid_bind_is_rejected(#[case] bind: &str) {
    let args = ServeArgs {
        bind: Some(bind.to_owned()),
        ..ServeArgs::default()
    };
    match ServeConfig::try_from(args).expect_err("bind should be rejected") {
        CliError::InvalidBind { value, .. } => assert_eq!(value, bind),
        other => panic!("expected InvalidBind, found {other:?}"),
    }
}
