//! JSON file access for the data directory
//!
//! Reads distinguish a file that was never written from one that cannot be
//! parsed. Writes replace the file atomically through a sibling temp file.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::ExpenseError;

/// What is currently on disk at a data file path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileState {
    /// Nothing has been saved yet
    Missing,
    /// The file parses as JSON
    Valid,
    /// The file exists but is not JSON; holds the reason
    Unreadable(String),
}

impl std::fmt::Display for FileState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileState::Missing => write!(f, "not created yet"),
            FileState::Valid => write!(f, "ok"),
            FileState::Unreadable(reason) => write!(f, "unreadable ({})", reason),
        }
    }
}

/// Read and parse a JSON file. `Ok(None)` means the file does not exist.
pub fn read_json<T, P>(path: P) -> Result<Option<T>, ExpenseError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ExpenseError::Storage(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    serde_json::from_reader(BufReader::new(file))
        .map(Some)
        .map_err(|e| ExpenseError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Check what is on disk without caring about its shape
pub fn inspect<P: AsRef<Path>>(path: P) -> FileState {
    match read_json::<serde_json::Value, _>(path) {
        Ok(None) => FileState::Missing,
        Ok(Some(_)) => FileState::Valid,
        Err(e) => FileState::Unreadable(e.to_string()),
    }
}

/// Temp file used while replacing `path`: `data/.expenses.json.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replace `path` with pretty-printed JSON of `data`.
///
/// Readers see either the previous file or the complete new one.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), ExpenseError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ExpenseError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut bytes = serde_json::to_vec_pretty(data)
        .map_err(|e| ExpenseError::Storage(format!("Failed to serialize data: {}", e)))?;
    bytes.push(b'\n');

    let temp_path = temp_path_for(path);
    let written = File::create(&temp_path)
        .and_then(|mut file| {
            file.write_all(&bytes)?;
            file.sync_all()
        })
        .and_then(|_| fs::rename(&temp_path, path));

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(ExpenseError::Storage(format!(
            "Failed to write {}: {}",
            path.display(),
            e
        )));
    }

    Ok(())
}
