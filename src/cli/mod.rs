//! CLI module for rosterdb
//!
//! Provides command-line access to the index over a snapshot-backed store:
//! - seed: generate and store one record per day of a year
//! - range / gender / country / select: run one query and print the records
//! - stats: print slot member counts

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{execute, run, run_command};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_json, write_records};
