use super::CandidateRunner;
use crate::errors::ParityError;
use crate::model::VerdictMap;
use crate::storage::load_verdicts;
use std::path::{Path, PathBuf};

/// Candidate verdicts recorded earlier, in ground-truth JSON shape.
///
/// Every recorded verdict is returned whatever words were requested; the
/// comparator decides which of them overlap the ground truth.
#[derive(Debug, Clone)]
pub struct ResultsFileCandidate {
    name: String,
    path: PathBuf,
}

impl ResultsFileCandidate {
    pub fn new(path: &Path) -> Self {
        Self {
            name: "results".to_string(),
            path: path.to_path_buf(),
        }
    }
}

impl CandidateRunner for ResultsFileCandidate {
    fn name(&self) -> &str {
        &self.name
    }

    fn collect(&mut self, _words: &[String]) -> Result<VerdictMap, ParityError> {
        load_verdicts(&self.path)
    }
}
