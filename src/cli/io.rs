//! Console output
//!
//! Results go to stdout, one record per line in display form. Logs go to
//! stderr and never mix with them.

use std::io::{self, Write};

use serde_json::Value;

use crate::record::Record;

use super::errors::CliResult;

/// Write records, one per line, followed by a count line.
pub fn write_records<W: Write>(out: &mut W, heading: &str, records: &[Record]) -> CliResult<()> {
    writeln!(out, "{}", heading)?;
    for record in records {
        writeln!(out, "{}", record)?;
    }
    writeln!(out, "({} records)", records.len())?;
    out.flush()?;
    Ok(())
}

/// Write a JSON value on one line
pub fn write_json<W: Write>(out: &mut W, value: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

pub fn stdout() -> io::StdoutLock<'static> {
    io::stdout().lock()
}
