//! elbctl - operator CLI for classic load balancers
//!
//! Binary entry point: parses arguments, wires up tracing and config,
//! and dispatches to the command implementations.

use anyhow::Result;
use clap::Parser;
use tracing::{debug, error, info, trace};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod cli;
mod commands;
mod connection;
mod error;
mod prompt;

use cli::{Cli, Commands};
use connection::ConnectionManager;
use elbctl_core::Config;
use error::ElbCtlError;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = if let Some(config_file) = &cli.config_file {
        let path = std::path::PathBuf::from(config_file);
        debug!("Loading config from explicit path: {:?}", path);
        Config::load_from_path(&path)?
    } else {
        debug!("Loading config from default location");
        Config::load()?
    };

    let conn_mgr = ConnectionManager::new(config);

    if let Err(e) = execute_command(&cli, &conn_mgr).await {
        e.print_diagnostic();
        std::process::exit(1);
    }

    Ok(())
}

/// Initialize the tracing subscriber based on verbosity level
fn init_tracing(verbose: u8) {
    // Check for RUST_LOG env var first, then fall back to verbosity flag
    let filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "elbctl=warn,elbctl_core=warn",
            1 => "elbctl=info,elbctl_core=info",
            2 => "elbctl=debug,elbctl_core=debug",
            _ => "elbctl=trace,elbctl_core=trace",
        };
        tracing_subscriber::EnvFilter::new(level)
    };

    // stdout is reserved for command output, diagnostics go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Tracing initialized with verbosity level: {}", verbose);
}

async fn execute_command(cli: &Cli, conn_mgr: &ConnectionManager) -> Result<(), ElbCtlError> {
    trace!("Executing command: {:?}", cli.command);
    info!("Command: {}", format_command(&cli.command));

    let client = conn_mgr.create_client(cli.profile.as_deref()).await?;

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();

    let start = std::time::Instant::now();
    let result = match &cli.command {
        Commands::List { instances } => commands::list::run(&client, *instances, &mut out).await,
        Commands::Attach { instances, to } => {
            commands::attach::run(&client, instances, to.clone(), &mut input, &mut out).await
        }
        Commands::Detach { instances } => commands::detach::run(&client, instances, &mut out).await,
    };

    let duration = start.elapsed();
    match &result {
        Ok(_) => info!("Command completed successfully in {:?}", duration),
        Err(e) => error!("Command failed after {:?}: {}", duration, e),
    }

    result
}

/// Format command for human-readable logging
fn format_command(command: &Commands) -> String {
    match command {
        Commands::List { instances } => {
            if *instances {
                "list -i".to_string()
            } else {
                "list".to_string()
            }
        }
        Commands::Attach { instances, to } => match to {
            Some(target) => format!("attach {} --to {}", instances.join(" "), target),
            None => format!("attach {}", instances.join(" ")),
        },
        Commands::Detach { instances } => format!("detach {}", instances.join(" ")),
    }
}
