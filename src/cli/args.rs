//! CLI argument definitions using clap
//!
//! Commands:
//! - contacts-api serve [--port <port>]
//! - contacts-api openapi

use clap::{Parser, Subcommand};

/// Contacts API - a CRUD HTTP service for a contact list
#[derive(Parser, Debug)]
#[command(name = "contacts-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Port to listen on (overrides the PORT environment variable)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the OpenAPI description of the HTTP surface and exit
    Openapi,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
