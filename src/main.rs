use clap::Parser;
use fin_tracker::args::{Args, Command};
use fin_tracker::{commands, Home, Result};
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e}");
            ExitCode::FAILURE
        }
    }
}

pub async fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let home = Home::new(args.common().fin_home()).await?;

    // Route to appropriate command handler
    let _: () = match args.command() {
        Command::Add(add_args) => commands::add(&home, add_args.clone()).await?.print(),
        Command::Remove(remove_args) => commands::remove(&home, remove_args.clone()).await?.print(),
        Command::List => commands::list(&home).await?.print(),
        Command::Summary => commands::summary(&home).await?.print(),
        Command::Chart(chart_args) => commands::chart(&home, chart_args.clone()).await?.print(),
        Command::Clear => commands::clear(&home).await?.print(),
        Command::Export(export_args) => commands::export(&home, export_args.clone()).await?.print(),
    };
    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            EnvFilter::new(format!(
                "{}={},{}={}",
                env!("CARGO_CRATE_NAME"),
                level,
                env!("CARGO_BIN_NAME"),
                level
            ))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
