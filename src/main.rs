//! rosterdb CLI entry point
//!
//! Parses arguments, dispatches to the CLI module, prints errors to stderr and
//! exits non-zero on failure. No other logic lives here.

use rosterdb::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
