//! CLI module for blogd
//!
//! Provides the command-line interface:
//! - serve: load configuration and run the HTTP server
//! - config: print the effective configuration and exit

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliResult};
