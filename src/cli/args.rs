//! CLI argument definitions using clap
//!
//! Commands:
//! - rosterdb seed --year <y>
//! - rosterdb range --from <date> --to <date>
//! - rosterdb gender --gender <g>
//! - rosterdb country --country <c>
//! - rosterdb select --gender <g> --country <c>
//! - rosterdb stats
//!
//! Every command takes `--config <path>`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rosterdb - secondary indexes over a set/sorted-set store
#[derive(Parser, Debug)]
#[command(name = "rosterdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, default_value = "./rosterdb.json")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Store one generated record for every day of a year
    Seed {
        #[arg(long, default_value_t = 1971)]
        year: i32,
    },

    /// Records born in an inclusive date range (YYYY-MM-DD), ascending
    Range {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },

    /// Records of one gender (MALE, FEMALE)
    Gender {
        #[arg(long)]
        gender: String,
    },

    /// Records of one country (INDIA, USA, GB)
    Country {
        #[arg(long)]
        country: String,
    },

    /// Records matching both a gender and a country
    Select {
        #[arg(long)]
        gender: String,
        #[arg(long)]
        country: String,
    },

    /// Member count of every slot, as JSON
    Stats,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_select() {
        let cli = Cli::try_parse_from([
            "rosterdb",
            "select",
            "--gender",
            "female",
            "--country",
            "usa",
            "--config",
            "/tmp/r.json",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("/tmp/r.json"));
        assert_eq!(
            cli.command,
            Command::Select {
                gender: "female".into(),
                country: "usa".into()
            }
        );
    }

    #[test]
    fn test_seed_defaults() {
        let cli = Cli::try_parse_from(["rosterdb", "seed"]).unwrap();
        assert_eq!(cli.command, Command::Seed { year: 1971 });
        assert_eq!(cli.config, PathBuf::from("./rosterdb.json"));
    }

    #[test]
    fn test_range_requires_bounds() {
        assert!(Cli::try_parse_from(["rosterdb", "range", "--from", "1971-05-05"]).is_err());
    }
}
