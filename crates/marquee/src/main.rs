//! Marquee command-line entry point.

use clap::Parser;
use marquee::cli::{Cli, run};
use marquee::{MarqueeConfig, MarqueeError, MarqueeErrorKind, init_tracing};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match MarqueeConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };
    init_tracing(*config.log_format());
    tracing::debug!(command = ?cli.command, "Starting marquee");

    let mut stdout = std::io::stdout().lock();
    match run(&cli, &config, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn report(err: &anyhow::Error) {
    match err.downcast_ref::<MarqueeError>() {
        Some(e)
            if matches!(e.kind(), MarqueeErrorKind::Gemini(_) | MarqueeErrorKind::Json(_)) =>
        {
            eprintln!("Failed to generate content: {}", e);
            if e.is_transient() {
                eprintln!("The service looks busy. Please try again in a moment.");
            }
        }
        _ => eprintln!("Error: {:#}", err),
    }
}
