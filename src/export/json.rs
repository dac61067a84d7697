//! JSON output
//!
//! Reports serialize with camelCase keys and money as plain numbers, the same
//! shape the snapshot is read in.

use serde::Serialize;
use std::io::Write;

use crate::error::FintrackResult;

/// Write any report as pretty-printed JSON followed by a newline
pub fn export_json<T, W>(value: &T, mut writer: W) -> FintrackResult<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    Ok(())
}
