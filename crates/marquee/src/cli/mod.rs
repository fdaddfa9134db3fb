//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! `marquee` binary.

mod commands;
mod handlers;
mod render;

pub use commands::{
    AppointmentArgs, Cli, Commands, EventArgs, ImageArgs, MenuArgs, OutputFormat, SeasonalArgs,
};
pub use handlers::run_command;
pub use render::{Render, write_response};

use crate::MarqueeConfig;
use marquee_models::GenerationClient;
use std::io::Write;

/// Execute a parsed command line against `config`.
///
/// # Errors
///
/// See [`run_command`]. Also fails when no API key is configured for a
/// command that needs the model.
pub async fn run<W: Write>(cli: &Cli, config: &MarqueeConfig, out: &mut W) -> anyhow::Result<()> {
    if let Commands::Config = cli.command {
        write!(out, "{}", config.to_redacted_toml()?)?;
        return Ok(());
    }

    let client = GenerationClient::from_gemini(config.gemini().clone(), *config.decode_policy())?;
    run_command(&client, &cli.command, cli.format, out).await
}
