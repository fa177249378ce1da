//! CLI command implementations
//!
//! `serve` follows a strict boot sequence: environment → configuration →
//! store connection → HTTP listener. Any failure aborts the boot; there is
//! no retry and no partial startup.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::{docs, ApiServer};
use crate::config::AppConfig;
use crate::store::PgContactStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Loads the environment, initializes tracing, then dispatches. This is the
/// only function that main.rs should call.
pub fn run() -> CliResult<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { port } => serve(port),
        Command::Openapi => openapi(),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Boot the store connection and serve the API.
///
/// Startup sequence:
/// 1. Configuration from the environment (CLI port flag wins)
/// 2. Store connection + migrations (fatal on failure, no retry)
/// 3. Router construction and listener bind
pub fn serve(port: Option<u16>) -> CliResult<()> {
    let mut config = AppConfig::from_env()?;
    if let Some(port) = port {
        config.port = port;
    }

    let database_url = config.require_database_url()?.to_string();

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        let store = PgContactStore::connect(&database_url)
            .await
            .map_err(|e| CliError::boot_failed(e.to_string()))?;

        tracing::info!("connected to store");

        let server = ApiServer::new(config, Arc::new(store));

        server.start().await.map_err(CliError::from)
    })
}

/// Print the machine-readable API description and exit.
pub fn openapi() -> CliResult<()> {
    println!("{}", docs::openapi_json()?);
    Ok(())
}
