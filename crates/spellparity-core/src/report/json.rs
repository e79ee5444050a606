use crate::compare::ComparisonResult;
use crate::errors::ParityError;
use crate::storage::{artifact_timestamp, write_atomic};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

pub fn comparison_path(out_dir: &Path, checker: &str, now: &DateTime<Local>) -> PathBuf {
    out_dir.join(format!("{checker}_comparison_{}.json", artifact_timestamp(now)))
}

/// Machine-readable twin of the Markdown report.
pub fn write_comparison_json(
    result: &ComparisonResult,
    checker: &str,
    out_dir: &Path,
    now: &DateTime<Local>,
) -> Result<PathBuf, ParityError> {
    let path = comparison_path(out_dir, checker, now);
    let body = serde_json::to_string_pretty(result).map_err(|e| ParityError::json(&path, e))?;
    write_atomic(&path, body.as_bytes())?;
    tracing::info!(path = %path.display(), "comparison results saved");
    Ok(path)
}
