pub mod discovery;

use crate::errors::ParityError;
use crate::model::VerdictMap;
use chrono::{DateTime, TimeZone};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

pub use discovery::find_latest_ground_truth;

/// Timestamp embedded in artifact file names.
pub const ARTIFACT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

pub fn artifact_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(ARTIFACT_TIMESTAMP_FORMAT).to_string()
}

/// Write `contents` to `path` via a temp file in the same directory, creating
/// parent directories as needed.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), ParityError> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent).map_err(|e| ParityError::io(parent, e))?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| ParityError::io(parent, e))?;
    tmp.write_all(contents)
        .map_err(|e| ParityError::io(tmp.path(), e))?;
    tmp.persist(path)
        .map_err(|e| ParityError::io(path, e.error))?;
    Ok(())
}

/// Load a word -> `{is_correct, suggestions}` JSON object.
pub fn load_verdicts(path: &Path) -> Result<VerdictMap, ParityError> {
    if !path.exists() {
        return Err(ParityError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    let raw = std::fs::read_to_string(path).map_err(|e| ParityError::io(path, e))?;
    serde_json::from_str(&raw).map_err(|e| ParityError::json(path, e))
}
