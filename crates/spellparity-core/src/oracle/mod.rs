//! Oracle adapter: one word in, one verdict out, through the oracle's line
//! protocol. Answers are memoized for the lifetime of the client.

pub mod protocol;
pub mod transport;

use crate::config::OracleConfig;
use crate::errors::ParityError;
use crate::model::Verdict;
use crate::process::ProcessError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use transport::{OracleReply, OracleTransport, ProcessTransport};

/// Word used by the availability probe.
pub const PROBE_WORD: &str = "test";

/// What the oracle said, or why it could not be asked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum OracleOutcome {
    Correct,
    Incorrect { suggestions: Vec<String> },
    Unreachable { reason: UnreachableReason },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnreachableReason {
    Timeout,
    NonZeroExit { code: Option<i32> },
    Launch { detail: String },
    UnparseableOutput,
}

impl OracleOutcome {
    pub fn is_reachable(&self) -> bool {
        !matches!(self, Self::Unreachable { .. })
    }

    /// Collapse to the two-state verdict. `Unreachable` becomes `(false, [])`.
    pub fn to_verdict(&self, word: &str) -> Verdict {
        match self {
            Self::Correct => Verdict::correct(word),
            Self::Incorrect { suggestions } => Verdict::incorrect(word, suggestions.clone()),
            Self::Unreachable { .. } => Verdict::negative(word),
        }
    }
}

/// Caching oracle client. Exclusively owns its cache; no eviction.
pub struct OracleClient<T = ProcessTransport> {
    transport: T,
    cache: HashMap<String, OracleOutcome>,
}

impl OracleClient<ProcessTransport> {
    pub fn from_config(config: OracleConfig) -> Self {
        Self::with_transport(ProcessTransport::new(config))
    }
}

impl<T: OracleTransport> OracleClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            cache: HashMap::new(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Verdict for `word`. Soft failures come back as `(false, [])`.
    pub fn query(&mut self, word: &str) -> Verdict {
        self.query_outcome(word).to_verdict(word)
    }

    /// Like [`query`](Self::query) but keeps the unreachable distinction.
    ///
    /// Every outcome is cached, failures included: a word that could not be
    /// asked once is not asked again by this client.
    pub fn query_outcome(&mut self, word: &str) -> OracleOutcome {
        if let Some(hit) = self.cache.get(word) {
            tracing::debug!(word, "oracle cache hit");
            return hit.clone();
        }
        let outcome = self.ask(word);
        self.cache.insert(word.to_string(), outcome.clone());
        outcome
    }

    pub fn cached_words(&self) -> usize {
        self.cache.len()
    }

    fn ask(&self, word: &str) -> OracleOutcome {
        let request = protocol::encode_request(word);
        let reply = match self.transport.exchange(&request) {
            Ok(reply) => reply,
            Err(ProcessError::Timeout(after)) => {
                tracing::warn!(word, timeout_secs = after.as_secs_f64(), "timeout processing word");
                return OracleOutcome::Unreachable {
                    reason: UnreachableReason::Timeout,
                };
            }
            Err(e) => {
                tracing::warn!(word, error = %e, "error processing word");
                return OracleOutcome::Unreachable {
                    reason: UnreachableReason::Launch {
                        detail: e.to_string(),
                    },
                };
            }
        };

        if !reply.success {
            tracing::warn!(
                word,
                code = ?reply.exit_code,
                stderr = %reply.stderr.trim(),
                "oracle exited with non-zero status"
            );
            return OracleOutcome::Unreachable {
                reason: UnreachableReason::NonZeroExit {
                    code: reply.exit_code,
                },
            };
        }

        match protocol::parse_response(&reply.stdout) {
            Some(outcome) => outcome,
            None => {
                tracing::warn!(word, stdout = %reply.stdout.trim(), "unrecognized oracle output");
                OracleOutcome::Unreachable {
                    reason: UnreachableReason::UnparseableOutput,
                }
            }
        }
    }

    /// Fail-fast check run once before a batch: static preflight of the
    /// transport, then one live query for [`PROBE_WORD`].
    pub fn check_availability(&mut self) -> Result<(), ParityError> {
        self.transport.preflight()?;
        match self.query_outcome(PROBE_WORD) {
            OracleOutcome::Unreachable { reason } => Err(ParityError::oracle_unavailable(
                format!("probe query for '{PROBE_WORD}' failed: {reason:?}"),
            )),
            _ => Ok(()),
        }
    }

    pub fn is_available(&mut self) -> bool {
        self.check_availability().is_ok()
    }
}
