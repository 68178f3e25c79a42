//! Route planner CLI
//!
//! Resolves addresses with Nominatim, routes with OSRM, and prints the result.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use infrastructure::{AppConfig, init_logging};
use presentation_cli::cli::{Cli, Commands};
use presentation_cli::console::{ConsoleNotices, TextMapRenderer, format_snapshot};
use presentation_cli::route::{StartPoint, run_route};
use presentation_cli::session::run_session;
use presentation_cli::wiring::build_state;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    init_logging(&config.logging, cli.verbose)?;

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return Err(e).context("invalid configuration");
    }

    let notices = Arc::new(ConsoleNotices::new(io::stdout()));

    match cli.command {
        Commands::Route {
            from,
            to,
            current_location,
        } => {
            let state = build_state(&config, notices.clone())?;
            let start = match from {
                Some(address) if !current_location => StartPoint::Address(address),
                _ => StartPoint::CurrentLocation,
            };

            let outcome = run_route(&state, start, &to).await;
            info!(?outcome, "Route command finished");

            writeln!(io::stdout(), "{}", format_snapshot(&state.snapshot()))?;

            if notices.error_count() > 0 {
                return Ok(ExitCode::FAILURE);
            }
        },

        Commands::Session => {
            let state = build_state(&config, notices.clone())?;
            let renderer = TextMapRenderer::new(io::stdout());
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            run_session(&state, &renderer, input, io::stdout()).await?;
        },

        Commands::Config => {
            write!(io::stdout(), "{}", config.to_toml_string()?)?;
        },
    }

    Ok(ExitCode::SUCCESS)
}
