//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. `execute` returns the
//! command's value; `run` writes it to stdout as JSON.

pub mod analyse;
pub mod check;
pub mod optimise;

use serde::Serialize;
use std::io::Write;

use crate::Result;

/// Write `value` as JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(mut writer: W, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, value)?;
    } else {
        serde_json::to_writer(&mut writer, value)?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Write `value` as JSON to stdout.
pub fn emit<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let stdout = std::io::stdout();
    write_json(stdout.lock(), value, pretty)
}
