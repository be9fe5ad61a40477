// dataclean/src/main.rs

mod cli;
mod commands;

use chrono::Utc;
use clap::Parser;
use miette::Report;
use tracing_subscriber::EnvFilter;

use dataclean_core::DatacleanError;
use dataclean_core::domain::DomainError;
use dataclean_core::infrastructure::error::InfrastructureError;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    // RUST_LOG=info dataclean integrations ... to see the use-case events.
    // Logs go to stderr so tables on stdout stay pipeable.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("{:?}", diagnostic(err));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let now = Utc::now();

    match cli.command {
        Commands::Monitors { search } => commands::monitors::execute(search, now),
        Commands::Monitor { id } => commands::monitors::detail(&id, now),
        Commands::Alerts { search, monitor } => commands::alerts::execute(search, monitor, now),
        Commands::Integrations { search, fixtures } => {
            commands::integrations::execute(&cli.project_dir, search, fixtures, now).await
        }
        Commands::CreateIntegration {
            connection,
            fixtures,
        } => {
            commands::create_integration::execute(&cli.project_dir, connection, fixtures, now)
                .await
        }
    }
}

/// Core errors carry a diagnostic code and help text; render them through miette.
/// An anyhow context on top of a core error is kept as the report's outer message.
fn diagnostic(err: anyhow::Error) -> Report {
    let outer = err.to_string();
    let report = match core_report(err) {
        Ok(report) => report,
        Err(err) => return miette::miette!("{:#}", err),
    };
    if report.to_string() == outer {
        report
    } else {
        report.wrap_err(outer)
    }
}

fn core_report(err: anyhow::Error) -> Result<Report, anyhow::Error> {
    let err = match err.downcast::<DatacleanError>() {
        Ok(e) => return Ok(Report::new(e)),
        Err(err) => err,
    };
    let err = match err.downcast::<DomainError>() {
        Ok(e) => return Ok(Report::new(e)),
        Err(err) => err,
    };
    err.downcast::<InfrastructureError>().map(Report::new)
}
