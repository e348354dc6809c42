//! Scout CLI
//!
//! Main entry point for the scout research tool. `serve` exposes the
//! pipeline over HTTP; `ask` runs a single question from the terminal.

mod commands;

use clap::{Parser, Subcommand};
use commands::{AskCommand, ServeCommand};
use scout_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;

/// Scout - answer questions from live web sources, with citations
#[derive(Parser, Debug)]
#[command(name = "scout")]
#[command(about = "Answer questions from live web sources, with citations", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file (default: ./scout.yaml)
    #[arg(short, long, global = true, env = "SCOUT_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    /// LLM provider (ollama, openai)
    #[arg(short, long, global = true, env = "SCOUT_PROVIDER")]
    provider: Option<String>,

    /// Model identifier
    #[arg(short, long, global = true, env = "SCOUT_MODEL")]
    model: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the research API over HTTP
    Serve(ServeCommand),

    /// Research a single question and print the answer
    Ask(AskCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load base configuration from file and environment
    let config = AppConfig::load_from(cli.config.as_deref())?;

    // Apply CLI overrides
    let config = config.with_overrides(
        None,
        cli.provider,
        cli.model,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("Scout starting");
    tracing::debug!("Provider: {}", config.provider);
    tracing::debug!("Model: {}", config.model);

    let command_name = match &cli.command {
        Commands::Serve(_) => "serve",
        Commands::Ask(_) => "ask",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    // Route to command handlers
    let result = match cli.command {
        Commands::Serve(cmd) => cmd.execute(&config).await,
        Commands::Ask(cmd) => cmd.execute(&config).await,
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
