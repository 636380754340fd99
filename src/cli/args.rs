//! CLI argument definitions using clap
//!
//! Commands:
//! - blogd serve --config <path> [--port <port>]
//! - blogd config --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// blogd - A minimal in-memory blog post API server
#[derive(Parser, Debug)]
#[command(name = "blogd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the blog post API server
    Serve {
        /// Path to configuration file (defaults apply if it does not exist)
        #[arg(long, default_value = "./blogd.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the effective configuration as JSON and exit
    Config {
        /// Path to configuration file
        #[arg(long, default_value = "./blogd.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
