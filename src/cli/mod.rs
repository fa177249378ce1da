//! CLI module for the contacts API
//!
//! Provides the command-line interface:
//! - serve: boot the store connection and enter the serving loop
//! - openapi: print the generated API description and exit

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{openapi, run, run_command, serve};
pub use errors::{CliError, CliResult};
