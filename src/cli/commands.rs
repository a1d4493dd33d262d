//! CLI command implementations
//!
//! Each invocation loads the configuration, opens the store from its snapshot,
//! runs one command and closes the store again. Only `seed` writes the
//! snapshot back.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::{json, Map, Value};

use crate::index::IndexManager;
use crate::observability::{Event, Logger};
use crate::record::{parse_date, Country, Gender};
use crate::seed;
use crate::store::MemoryStore;

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::CliResult;
use super::io::{stdout, write_json, write_records};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(&cli.config, cli.command)
}

/// Load configuration and run `cmd` against stdout
pub fn run_command(config_path: &Path, cmd: Command) -> CliResult<()> {
    let config = Config::load(config_path)?;
    Logger::set_min_severity(config.severity()?);
    Logger::emit(Event::ConfigLoaded, &[("data_dir", config.data_dir.as_str())]);

    execute(&config, cmd, &mut stdout())
}

/// Run `cmd` with an already loaded configuration, writing results to `out`.
pub fn execute<W: Write>(config: &Config, cmd: Command, out: &mut W) -> CliResult<()> {
    let writes = matches!(cmd, Command::Seed { .. });
    let session = Session::open(config)?;
    let outcome = dispatch(&session, cmd, out);
    session.close(writes && outcome.is_ok())?;
    outcome
}

/// One open store plus the index over it.
struct Session {
    index: IndexManager<MemoryStore>,
    snapshot_path: PathBuf,
}

impl Session {
    fn open(config: &Config) -> CliResult<Self> {
        let snapshot_path = config.snapshot_path();
        let store = MemoryStore::load(&snapshot_path)?;
        let path_str = snapshot_path.display().to_string();
        Logger::emit(Event::SnapshotLoaded, &[("path", path_str.as_str())]);

        Ok(Self {
            index: IndexManager::with_config(Arc::new(store), config.index_config()),
            snapshot_path,
        })
    }

    /// Close the store, saving the snapshot first when `persist` is set.
    fn close(self, persist: bool) -> CliResult<()> {
        let store = self.index.backend();
        if persist {
            store.save(&self.snapshot_path)?;
            let path_str = self.snapshot_path.display().to_string();
            Logger::emit(Event::SnapshotSaved, &[("path", path_str.as_str())]);
        }
        store.close();
        Ok(())
    }
}

fn dispatch<W: Write>(session: &Session, cmd: Command, out: &mut W) -> CliResult<()> {
    let index = &session.index;
    match cmd {
        Command::Seed { year } => {
            let report = seed::seed_year(index, year)?;
            write_json(
                out,
                &json!({ "year": year, "stored": report.stored, "skipped": report.skipped }),
            )
        }
        Command::Range { from, to } => {
            let from = parse_date(&from)?;
            let to = parse_date(&to)?;
            let records = index.query_by_date_range(from, to)?;
            write_records(out, &format!("Records born {} to {}:", from, to), &records)
        }
        Command::Gender { gender } => {
            let gender: Gender = gender.parse()?;
            let records = index.query_by_gender(gender)?;
            write_records(out, &format!("Records with gender {}:", gender), &records)
        }
        Command::Country { country } => {
            let country: Country = country.parse()?;
            let records = index.query_by_country(country)?;
            write_records(out, &format!("Records from {}:", country), &records)
        }
        Command::Select { gender, country } => {
            let gender: Gender = gender.parse()?;
            let country: Country = country.parse()?;
            let records = index.query_selection(gender, country)?;
            write_records(
                out,
                &format!("Records with gender {} from {}:", gender, country),
                &records,
            )
        }
        Command::Stats => {
            let mut slots = Map::new();
            for (slot, count) in index.slot_counts()? {
                slots.insert(slot.key().to_string(), Value::from(count));
            }
            write_json(out, &json!({ "slots": slots }))
        }
    }
}
