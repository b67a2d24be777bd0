mod engine;
mod init;

use std::path::Path;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "marketscout")]
#[command(about = "Market intelligence collector for small e-commerce shops")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Perform one full collection run and exit.
    Run,
    /// Write a starter .env template in the current directory.
    Init,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    if matches!(cli.command, Some(Commands::Init)) {
        let path = init::write_env_template(Path::new(".env"))?;
        match path {
            Some(p) => println!("Wrote starter environment file to {}", p.display()),
            None => println!(".env already exists, leaving it untouched"),
        }
        return Ok(());
    }

    let config = marketscout_core::load_app_config_from_env()
        .context("failed to load application configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let sources = marketscout_core::load_sources(&config.sources_path)
        .with_context(|| format!("failed to load sources from {}", config.sources_path.display()))?;

    let engine = engine::IntelEngine::new(&config, sources)?;
    engine.run().await?;

    Ok(())
}
