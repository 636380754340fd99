//! CLI command implementations
//!
//! Commands load configuration, construct the runtime, and hand off to the
//! HTTP server. The config file is optional: a missing file means defaults,
//! an unreadable or invalid file is an error.

use std::fs;
use std::path::Path;

use crate::http_server::{HttpServer, HttpServerConfig};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run a single CLI command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config, port } => serve(&config, port),
        Command::Config { config } => print_config(&config),
    }
}

fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    if !path.exists() {
        return Ok(HttpServerConfig::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

    serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
}

fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        config.port = port;
    }

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::server_error(format!("Failed to start runtime: {}", e)))?;

    let server = HttpServer::with_config(config);
    runtime
        .block_on(server.start())
        .map_err(|e| CliError::server_error(format!("Server error: {}", e)))
}

fn print_config(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    let json = serde_json::to_string_pretty(&config)
        .map_err(|e| CliError::config_error(format!("Failed to serialize config: {}", e)))?;
    println!("{}", json);
    Ok(())
}
