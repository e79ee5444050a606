//! Candidate implementations under test. Each runner turns a word list into
//! verdicts of the same shape the oracle produces.

pub mod executable;
pub mod library;
pub mod results_file;

use crate::errors::ParityError;
use crate::model::VerdictMap;
use std::str::FromStr;

pub use executable::ExecutableCandidate;
pub use library::{LibraryCandidate, SpellChecker};
pub use results_file::ResultsFileCandidate;

/// In-process candidates report at most this many suggestions per word.
pub const MAX_CANDIDATE_SUGGESTIONS: usize = 10;

pub trait CandidateRunner {
    /// Name used in reports and artifact file names.
    fn name(&self) -> &str;

    fn collect(&mut self, words: &[String]) -> Result<VerdictMap, ParityError>;
}

/// Candidate kinds selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    /// External executable, one process per word.
    Custom,
    /// Previously saved verdict JSON.
    Results,
}

impl CandidateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::Results => "results",
        }
    }
}

impl FromStr for CandidateKind {
    type Err = ParityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "custom" => Ok(Self::Custom),
            "results" => Ok(Self::Results),
            other => Err(ParityError::UnsupportedChecker {
                kind: other.to_string(),
            }),
        }
    }
}

/// Run `runner` and reject an empty result set.
pub fn collect_nonempty(
    runner: &mut dyn CandidateRunner,
    words: &[String],
) -> Result<VerdictMap, ParityError> {
    let results = runner.collect(words)?;
    if results.is_empty() {
        return Err(ParityError::NoCandidateResults {
            checker: runner.name().to_string(),
        });
    }
    Ok(results)
}
