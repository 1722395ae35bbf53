//! Pokedex CLI - explore the PokeAPI catalog from an interactive prompt
//!
//! A line-oriented command loop for browsing the PokeAPI location catalog,
//! exploring areas, and catching Pokemon. Every API response is cached in
//! memory for a configurable TTL so repeated lookups skip the network.

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::app::App;
use pokedex::cli::{Cli, StartupConfig};
use pokedex::repl;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they never interleave with REPL output.
    // Defaults to warnings only; override with RUST_LOG.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };
    debug!(?config, "starting session");

    let mut app = App::new(&config)?;
    repl::run(&mut app).await?;

    // Single shutdown path: both `exit` and EOF land here.
    app.close().await;
    Ok(())
}
