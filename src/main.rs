// ABOUTME: Entry point for safeconnect — a terminal community-support assistant.
// ABOUTME: Parses CLI args, loads config, sets up logging, and launches the app.

use std::path::PathBuf;

use clap::Parser;

use safeconnect::app::App;
use safeconnect::config::Config;
use safeconnect::logging;

#[derive(Debug, Parser)]
#[command(name = "safeconnect", version, about = "Community support assistant")]
struct Cli {
    /// Base URL of the chat endpoint (overrides config and environment).
    #[arg(long, env = "SAFECONNECT_API_URL")]
    api_url: Option<String>,

    /// Path to the config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Keep chat history in memory only.
    #[arg(long)]
    ephemeral: bool,

    /// Ignore saved history and start a new conversation.
    #[arg(long)]
    fresh: bool,

    /// Log level for the log file when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load local .env before clap reads environment overrides.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.apply_api_url(cli.api_url);

    let _log_guard = logging::init(&config.logs_dir(), &cli.log_level)?;

    App::new(config, cli.fresh, cli.ephemeral).run().await
}
