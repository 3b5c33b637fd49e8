mod cli;
mod commands;
mod config;
mod dispatch;

use anyhow::Result;
use clap::Parser;
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;
    dispatch::dispatch(cli, &config)
}

/// Log to stderr, filtered by RUST_LOG or the -v count
fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "gunsmith=warn,gunsmith_cli=warn",
        1 => "gunsmith=debug,gunsmith_cli=debug",
        _ => "gunsmith=trace,gunsmith_cli=trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
