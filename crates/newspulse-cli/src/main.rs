mod scan;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "newspulse")]
#[command(about = "Scan recent news about an entity and report per-article sentiment")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Discover news articles for an entity, extract them, and score sentiment
    Scan {
        /// Entity name to search news for (company, person, product)
        entity: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // load_app_config loads .env itself before reading the environment.
    let config = newspulse_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scan { entity } => scan::run_scan(&config, &entity).await,
    }
}
