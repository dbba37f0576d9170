use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pledge_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "pledge")]
#[command(author, version, about = "An interactive terminal pledge-campaign page")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Print the impact estimate for an income and pledge percentage
    Calc {
        /// Annual income in dollars
        #[arg(short, long)]
        income: f64,
        /// Pledge percentage (defaults to the configured starting value)
        #[arg(short, long)]
        percent: Option<f64>,
    },
    /// Print the share links for the campaign page
    Share,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::Calc { income, percent }) => commands::calc::run(&config, income, percent),
        Some(Commands::Share) => commands::share::run(&config),
    }
}
