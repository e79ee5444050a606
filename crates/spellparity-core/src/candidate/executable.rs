use super::CandidateRunner;
use crate::errors::ParityError;
use crate::model::{Verdict, VerdictMap};
use crate::process::run_with_timeout;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

pub const DEFAULT_EXECUTABLE_TIMEOUT: Duration = Duration::from_secs(10);

/// Expected stdout of the candidate executable.
#[derive(Debug, Deserialize)]
struct ExecutableAnswer {
    #[serde(default)]
    is_correct: bool,
    #[serde(default)]
    suggestions: Vec<String>,
}

/// Runs `<executable> <word>` once per word and reads a JSON verdict from
/// stdout. Non-zero exit, timeout or malformed JSON yield `(false, [])`.
#[derive(Debug, Clone)]
pub struct ExecutableCandidate {
    name: String,
    path: PathBuf,
    timeout: Duration,
}

impl ExecutableCandidate {
    pub fn new(path: &Path) -> Result<Self, ParityError> {
        if !path.exists() {
            return Err(ParityError::ExecutableNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            name: "custom".to_string(),
            path: path.to_path_buf(),
            timeout: DEFAULT_EXECUTABLE_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn verdict_for(&self, word: &str) -> Verdict {
        let mut cmd = Command::new(&self.path);
        cmd.arg(word);

        let out = match run_with_timeout(cmd, None, self.timeout) {
            Ok(out) => out,
            Err(e) => {
                tracing::warn!(word, error = %e, "error testing word");
                return Verdict::negative(word);
            }
        };
        if !out.success() {
            tracing::warn!(word, status = %out.status, stderr = %out.stderr.trim(), "candidate exited with non-zero status");
            return Verdict::negative(word);
        }
        match serde_json::from_str::<ExecutableAnswer>(&out.stdout) {
            Ok(answer) => Verdict {
                word: word.to_string(),
                is_correct: answer.is_correct,
                suggestions: answer.suggestions,
            },
            Err(e) => {
                tracing::warn!(word, error = %e, "candidate output is not a JSON verdict");
                Verdict::negative(word)
            }
        }
    }
}

impl CandidateRunner for ExecutableCandidate {
    fn name(&self) -> &str {
        &self.name
    }

    fn collect(&mut self, words: &[String]) -> Result<VerdictMap, ParityError> {
        Ok(words.iter().map(|w| self.verdict_for(w)).collect())
    }
}
