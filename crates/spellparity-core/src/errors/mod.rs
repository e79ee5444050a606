use std::path::PathBuf;
use thiserror::Error;

/// Hard failures. Any of these aborts the run with a non-zero exit.
///
/// Oracle and candidate query problems are not represented here: those are
/// soft failures absorbed into a negative verdict.
#[derive(Debug, Error)]
pub enum ParityError {
    #[error("oracle unavailable: {reason}")]
    OracleUnavailable { reason: String },

    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("no words to process")]
    NoWords,

    #[error("ground truth directory not found: {}", path.display())]
    GroundTruthDirMissing { path: PathBuf },

    #[error("no ground truth files found in {}", dir.display())]
    GroundTruthNotFound { dir: PathBuf },

    #[error("no common words found between ground truth and candidate results")]
    NoOverlap,

    #[error("unsupported spell checker type: {kind}")]
    UnsupportedChecker { kind: String },

    #[error("spell checker type '{kind}' requires --{flag}")]
    MissingCheckerArgument { kind: String, flag: &'static str },

    #[error("executable not found: {}", path.display())]
    ExecutableNotFound { path: PathBuf },

    #[error("failed to get results from spell checker '{checker}'")]
    NoCandidateResults { checker: String },

    #[error("batch size must be at least 1 (got {0})")]
    InvalidBatchSize(usize),

    #[error("suggestion threshold must be within [0, 1] (got {0})")]
    InvalidThreshold(f64),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ParityError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    pub fn oracle_unavailable(reason: impl Into<String>) -> Self {
        Self::OracleUnavailable {
            reason: reason.into(),
        }
    }
}
