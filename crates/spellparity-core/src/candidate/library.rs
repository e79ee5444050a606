use super::{CandidateRunner, MAX_CANDIDATE_SUGGESTIONS};
use crate::errors::ParityError;
use crate::model::{Verdict, VerdictMap};

/// An in-process spell checker.
pub trait SpellChecker {
    fn check(&self, word: &str) -> anyhow::Result<bool>;

    fn suggest(&self, word: &str) -> anyhow::Result<Vec<String>>;
}

/// Adapts a [`SpellChecker`] to the candidate interface.
///
/// `suggest` is only called for words `check` rejects; its output is capped to
/// [`MAX_CANDIDATE_SUGGESTIONS`]. A checker error on a word yields `(false, [])`
/// for that word.
pub struct LibraryCandidate<C> {
    name: String,
    checker: C,
}

impl<C: SpellChecker> LibraryCandidate<C> {
    pub fn new(name: impl Into<String>, checker: C) -> Self {
        Self {
            name: name.into(),
            checker,
        }
    }

    fn verdict_for(&self, word: &str) -> Verdict {
        match self.checker.check(word) {
            Ok(true) => Verdict::correct(word),
            Ok(false) => match self.checker.suggest(word) {
                Ok(mut suggestions) => {
                    suggestions.truncate(MAX_CANDIDATE_SUGGESTIONS);
                    Verdict::incorrect(word, suggestions)
                }
                Err(e) => {
                    tracing::warn!(checker = %self.name, word, error = %e, "suggest failed");
                    Verdict::negative(word)
                }
            },
            Err(e) => {
                tracing::warn!(checker = %self.name, word, error = %e, "check failed");
                Verdict::negative(word)
            }
        }
    }
}

impl<C: SpellChecker> CandidateRunner for LibraryCandidate<C> {
    fn name(&self) -> &str {
        &self.name
    }

    fn collect(&mut self, words: &[String]) -> Result<VerdictMap, ParityError> {
        Ok(words.iter().map(|w| self.verdict_for(w)).collect())
    }
}
