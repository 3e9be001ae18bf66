//! Employee snapshot file
//!
//! The whole Directory as one JSON array of `EmployeeRecord`s.
//! Writes go to a temp file in the target directory which is then
//! renamed over the snapshot, so readers never see a half-written file.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{AdapterError, Result};
use crate::records::EmployeeRecord;

/// Read and parse a snapshot
pub fn read_snapshot(path: &Path) -> Result<Vec<EmployeeRecord>> {
    let content = std::fs::read_to_string(path).map_err(|source| AdapterError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| AdapterError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the snapshot at `path` with `records`
pub fn write_snapshot(path: &Path, records: &[EmployeeRecord]) -> Result<()> {
    let write_err = |source: std::io::Error| AdapterError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    serde_json::to_writer_pretty(&mut file, records)?;
    file.write_all(b"\n").map_err(write_err)?;
    file.as_file().sync_all().map_err(write_err)?;
    file.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
