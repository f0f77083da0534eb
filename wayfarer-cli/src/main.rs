//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = wayfarer_cli::run().await {
        eprintln!("wayfarer: {err}");
        std::process::exit(1);
    }
}
