use clap::Parser;
use std::process;
use taskboard_kanban::{KanbanConfig, KanbanOperationProcessor};

mod cli;
mod commands;

use cli::Cli;

const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;

/// Load configuration for CLI usage, falling back to defaults when it cannot be read
fn load_cli_configuration(cwd: &std::path::Path) -> KanbanConfig {
    match KanbanConfig::load(cwd) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Configuration loading failed: {}", e);
            eprintln!("Continuing with default configuration...");
            KanbanConfig::default()
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: cannot read current directory: {}", e);
            process::exit(EXIT_ERROR);
        }
    };
    let config = load_cli_configuration(&cwd);
    configure_logging(cli.debug, cli.quiet, &config.log_level);

    let processor = match cli.actor.clone().or_else(|| config.actor.clone()) {
        Some(actor) => KanbanOperationProcessor::with_actor(actor),
        None => KanbanOperationProcessor::new(),
    };

    let exit_code = match commands::run(cli.command, &config, &processor, &cwd).await {
        Ok(value) => {
            match serde_json::to_string_pretty(&value) {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(EXIT_ERROR);
                }
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            EXIT_ERROR
        }
    };

    process::exit(exit_code);
}

fn configure_logging(debug: bool, quiet: bool, configured_level: &str) {
    use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

    let directive = if quiet {
        "error".to_string()
    } else if debug {
        "debug".to_string()
    } else {
        configured_level.to_string()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
