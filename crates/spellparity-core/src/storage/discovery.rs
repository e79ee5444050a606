//! Locate the newest ground-truth JSON in a results directory.
//!
//! Ranking prefers the `YYYYMMDD_HHMMSS` stamp embedded in the file name.
//! Files without a parseable stamp rank below every stamped file and are
//! ordered among themselves by modification time.

use super::ARTIFACT_TIMESTAMP_FORMAT;
use crate::errors::ParityError;
use chrono::NaiveDateTime;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::SystemTime;

const GROUND_TRUTH_MARKER: &str = "_ground_truth_";

fn stamp_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"_ground_truth_(\d{8}_\d{6})\.json$").expect("valid ground truth pattern")
    })
}

/// Timestamp embedded in a ground-truth file name, if any.
pub fn embedded_timestamp(file_name: &str) -> Option<NaiveDateTime> {
    let caps = stamp_pattern().captures(file_name)?;
    NaiveDateTime::parse_from_str(&caps[1], ARTIFACT_TIMESTAMP_FORMAT).ok()
}

fn is_ground_truth_json(file_name: &str) -> bool {
    file_name.contains(GROUND_TRUTH_MARKER) && file_name.ends_with(".json")
}

pub fn find_latest_ground_truth(dir: &Path) -> Result<PathBuf, ParityError> {
    if !dir.is_dir() {
        return Err(ParityError::GroundTruthDirMissing {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| ParityError::io(dir, e))?;
    let mut best: Option<((Option<NaiveDateTime>, SystemTime), PathBuf)> = None;

    for entry in entries {
        let entry = entry.map_err(|e| ParityError::io(dir, e))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !is_ground_truth_json(name) || !entry.path().is_file() {
            continue;
        }
        let modified = entry
            .metadata()
            .and_then(|m| m.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);
        let key = (embedded_timestamp(name), modified);
        if best.as_ref().map_or(true, |(k, _)| key > *k) {
            best = Some((key, entry.path()));
        }
    }

    best.map(|(_, path)| path)
        .ok_or_else(|| ParityError::GroundTruthNotFound {
            dir: dir.to_path_buf(),
        })
}
