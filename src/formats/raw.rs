// Bare binary tables: the encoded bytes exactly as a device receives them

use crate::table::{ConfigError, ConfigTable, TableLimits};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RawError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Raw table rejected: {0}")]
    Table(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, RawError>;

/// Load a `.bin` table, rejecting it unless it scans cleanly under @limits
pub fn load_raw(filename: impl AsRef<Path>, limits: TableLimits) -> Result<ConfigTable> {
    let data = fs::read(filename.as_ref())?;
    tracing::debug!(
        "Read {} table bytes from {}",
        data.len(),
        filename.as_ref().display()
    );
    Ok(ConfigTable::validated(data, limits)?)
}

/// Write the entries of @table plus a terminator
///
/// Bytes after the terminator in the source buffer are not written.
pub fn save_raw(filename: impl AsRef<Path>, table: &ConfigTable) -> Result<()> {
    let mut data = table.raw_bytes()?.to_vec();
    data.push(0);
    fs::write(filename, data)?;
    Ok(())
}
