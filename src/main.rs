//! ShiftDesk - job and shift scheduling for temporary staffing.
//!
//! Main entry point for the ShiftDesk CLI and server.

mod cli;
mod commands;
mod server;

use clap::Parser;
use tracing::warn;

use shiftdesk_config::{ConfigLoader, ConfigValidator};

use crate::cli::{Cli, Commands};
use crate::commands::{handle_job_command, handle_shift_command};
use crate::server::{build_engine, init_tracing, run_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = ConfigLoader::load_or_default(&cli.config)?;
    init_tracing(&config.logging)?;

    let warnings = ConfigValidator::validate(&config).into_result()?;
    for warning in &warnings {
        warn!("Config {}: {}", warning.path, warning.message);
    }

    let output = match cli.command {
        None => return run_server(config, None, None).await,
        Some(Commands::Serve { host, port }) => return run_server(config, host, port).await,
        Some(Commands::Job { action }) => {
            let engine = build_engine(&config).await?;
            handle_job_command(&engine, action).await?
        }
        Some(Commands::Shift { action }) => {
            let engine = build_engine(&config).await?;
            handle_shift_command(&engine, action).await?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
