//! JSON file helpers
//!
//! Stores are small JSON documents. Reads treat a missing file as an empty
//! store; writes go through a sibling temp file and a rename so a crash never
//! leaves a half-written document behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::LedgerError;

fn storage_error(action: &str, path: &Path, err: impl std::fmt::Display) -> LedgerError {
    LedgerError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

/// Read a JSON document, or `T::default()` when the file is absent
pub fn read_json<T, P>(path: P) -> Result<T, LedgerError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(storage_error("open", path, e)),
    };

    serde_json::from_reader(BufReader::new(file)).map_err(|e| storage_error("parse", path, e))
}

/// Replace a JSON document atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), LedgerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_error("create directory", parent, e))?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let result = (|| {
        let file = File::create(&temp_path).map_err(|e| storage_error("create", &temp_path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, data)
            .map_err(|e| storage_error("serialize", path, e))?;
        writer
            .flush()
            .map_err(|e| storage_error("flush", &temp_path, e))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| storage_error("sync", &temp_path, e))?;
        fs::rename(&temp_path, path).map_err(|e| storage_error("replace", path, e))
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}
