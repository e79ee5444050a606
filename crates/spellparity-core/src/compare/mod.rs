//! Compatibility scoring between a ground-truth verdict set and a candidate's.

pub mod jaccard;

use crate::errors::ParityError;
use crate::model::{percentage, Verdict, VerdictMap};
use serde::{Deserialize, Serialize};

pub use jaccard::jaccard_similarity;

/// Minimum Jaccard similarity for two non-empty suggestion lists to agree.
pub const DEFAULT_SUGGESTION_THRESHOLD: f64 = 0.30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub total_words: usize,
    pub correctness_matches: usize,
    pub suggestion_matches: usize,
    pub correctness_percentage: f64,
    pub suggestion_percentage: f64,
    /// Mean of the two match rates, not the rate of words matching on both.
    pub overall_compatibility: f64,
    pub suggestion_threshold: f64,
    pub ground_truth: GroundTruthStats,
    pub failed_words: Vec<Disagreement>,
}

/// Distribution of the ground truth over the compared words. Context only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundTruthStats {
    pub correct_words: usize,
    pub incorrect_words: usize,
    pub words_with_suggestions: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disagreement {
    pub word: String,
    pub correctness_match: bool,
    pub suggestion_match: bool,
    pub ground_truth: Verdict,
    pub candidate: Verdict,
}

impl Disagreement {
    /// Names of the axes that disagreed, in fixed order.
    pub fn issues(&self) -> Vec<&'static str> {
        let mut out = Vec::with_capacity(2);
        if !self.correctness_match {
            out.push("correctness");
        }
        if !self.suggestion_match {
            out.push("suggestions");
        }
        out
    }
}

/// Pure comparator. Holds only its threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparator {
    threshold: f64,
}

impl Default for Comparator {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SUGGESTION_THRESHOLD,
        }
    }
}

impl Comparator {
    pub fn new(threshold: f64) -> Result<Self, ParityError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ParityError::InvalidThreshold(threshold));
        }
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Empty-vs-empty agrees, empty-vs-nonempty does not, otherwise Jaccard
    /// similarity must reach the threshold.
    pub fn suggestions_match(&self, expected: &[String], actual: &[String]) -> bool {
        match (expected.is_empty(), actual.is_empty()) {
            (true, true) => true,
            (true, false) | (false, true) => false,
            (false, false) => jaccard_similarity(expected, actual) >= self.threshold,
        }
    }

    /// Compare over the words both sides have. Disagreements follow the
    /// ground truth's order.
    pub fn compare(
        &self,
        ground_truth: &VerdictMap,
        candidate: &VerdictMap,
    ) -> Result<ComparisonResult, ParityError> {
        let mut total = 0;
        let mut correctness_matches = 0;
        let mut suggestion_matches = 0;
        let mut stats = GroundTruthStats::default();
        let mut failed_words = Vec::new();

        for expected in ground_truth {
            let Some(actual) = candidate.get(&expected.word) else {
                continue;
            };
            total += 1;

            if expected.is_correct {
                stats.correct_words += 1;
            } else {
                stats.incorrect_words += 1;
            }
            if expected.has_suggestions() {
                stats.words_with_suggestions += 1;
            }

            let correctness_match = expected.is_correct == actual.is_correct;
            let suggestion_match = self.suggestions_match(&expected.suggestions, &actual.suggestions);
            correctness_matches += usize::from(correctness_match);
            suggestion_matches += usize::from(suggestion_match);

            if !correctness_match || !suggestion_match {
                failed_words.push(Disagreement {
                    word: expected.word.clone(),
                    correctness_match,
                    suggestion_match,
                    ground_truth: expected.clone(),
                    candidate: actual.clone(),
                });
            }
        }

        if total == 0 {
            return Err(ParityError::NoOverlap);
        }

        Ok(ComparisonResult {
            total_words: total,
            correctness_matches,
            suggestion_matches,
            correctness_percentage: percentage(correctness_matches, total),
            suggestion_percentage: percentage(suggestion_matches, total),
            overall_compatibility: percentage(correctness_matches + suggestion_matches, 2 * total),
            suggestion_threshold: self.threshold,
            ground_truth: stats,
            failed_words,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn s(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn map(items: Vec<Verdict>) -> VerdictMap {
        items.into_iter().collect()
    }

    #[test]
    fn test_threshold_validation() {
        assert!(Comparator::new(0.0).is_ok());
        assert!(Comparator::new(1.0).is_ok());
        assert!(matches!(
            Comparator::new(1.5),
            Err(ParityError::InvalidThreshold(_))
        ));
        assert!(Comparator::new(f64::NAN).is_err());
    }

    #[test]
    fn test_suggestion_rules() {
        let cmp = Comparator::default();
        assert!(cmp.suggestions_match(&[], &[]));
        assert!(!cmp.suggestions_match(&[], &s(&["a"])));
        assert!(!cmp.suggestions_match(&s(&["a"]), &[]));
        assert!(cmp.suggestions_match(&s(&["a", "b", "c"]), &s(&["a", "b", "d"])));
        assert!(!cmp.suggestions_match(&s(&["a"]), &s(&["b"])));
        // 1/4 = 0.25 is below the default threshold but passes a looser one.
        let loose = Comparator::new(0.25).unwrap();
        assert!(!cmp.suggestions_match(&s(&["a", "b"]), &s(&["a", "c", "d"])));
        assert!(loose.suggestions_match(&s(&["a", "b"]), &s(&["a", "c", "d"])));
    }

    #[test]
    fn test_axes_are_independent() {
        let gt = map(vec![Verdict::incorrect("cjasa", s(&["cjase"]))]);
        let cand = map(vec![Verdict::correct("cjasa")]);
        let res = Comparator::default().compare(&gt, &cand).unwrap();

        assert_eq!(res.correctness_matches, 0);
        assert_eq!(res.suggestion_matches, 0);
        assert_eq!(res.failed_words[0].issues(), vec!["correctness", "suggestions"]);

        let cand = map(vec![Verdict::incorrect("cjasa", s(&["cjase", "cjasis"]))]);
        let res = Comparator::default().compare(&gt, &cand).unwrap();
        assert_eq!(res.correctness_matches, 1);
        assert_eq!(res.suggestion_matches, 1);
        assert!(res.failed_words.is_empty());
    }

    #[test]
    fn test_overall_is_mean_of_rates() {
        let gt = map(vec![
            Verdict::correct("a"),
            Verdict::incorrect("b", s(&["x"])),
        ]);
        // "a" matches on both axes, "b" only on correctness.
        let cand = map(vec![Verdict::correct("a"), Verdict::incorrect("b", s(&["y"]))]);
        let res = Comparator::default().compare(&gt, &cand).unwrap();

        assert_eq!(res.total_words, 2);
        assert_eq!(res.correctness_percentage, 100.0);
        assert_eq!(res.suggestion_percentage, 50.0);
        assert_eq!(res.overall_compatibility, 75.0);
        assert_eq!(res.failed_words.len(), 1);
        assert_eq!(res.failed_words[0].issues(), vec!["suggestions"]);
    }

    #[test]
    fn test_only_common_words_count() {
        let gt = map(vec![Verdict::correct("a"), Verdict::correct("b")]);
        let cand = map(vec![Verdict::correct("b"), Verdict::negative("c")]);
        let res = Comparator::default().compare(&gt, &cand).unwrap();
        assert_eq!(res.total_words, 1);
        assert_eq!(res.ground_truth.correct_words, 1);
    }

    #[test]
    fn test_no_overlap_is_an_error() {
        let gt = map(vec![Verdict::correct("a")]);
        let cand = map(vec![Verdict::correct("b")]);
        assert!(matches!(
            Comparator::default().compare(&gt, &cand),
            Err(ParityError::NoOverlap)
        ));
        assert!(matches!(
            Comparator::default().compare(&VerdictMap::new(), &VerdictMap::new()),
            Err(ParityError::NoOverlap)
        ));
    }

    #[test]
    fn test_ground_truth_distribution() {
        let gt = map(vec![
            Verdict::correct("a"),
            Verdict::negative("b"),
            Verdict::incorrect("c", s(&["cc"])),
        ]);
        let res = Comparator::default().compare(&gt, &gt).unwrap();
        assert_eq!(
            res.ground_truth,
            GroundTruthStats {
                correct_words: 1,
                incorrect_words: 2,
                words_with_suggestions: 1,
            }
        );
    }

    fn arb_verdict() -> impl Strategy<Value = (bool, Vec<String>)> {
        (
            any::<bool>(),
            proptest::collection::vec("[a-e]", 0..4),
        )
    }

    proptest! {
        #[test]
        fn prop_identical_maps_fully_agree(
            entries in proptest::collection::btree_map("[a-z]{1,6}", arb_verdict(), 1..20)
        ) {
            let gt: VerdictMap = entries
                .iter()
                .map(|(w, (ok, sugg))| Verdict { word: w.clone(), is_correct: *ok, suggestions: sugg.clone() })
                .collect();
            let res = Comparator::default().compare(&gt, &gt).unwrap();
            prop_assert_eq!(res.correctness_percentage, 100.0);
            prop_assert_eq!(res.suggestion_percentage, 100.0);
            prop_assert!(res.failed_words.is_empty());
        }

        #[test]
        fn prop_order_independent(
            entries in proptest::collection::btree_map("[a-z]{1,6}", (arb_verdict(), arb_verdict()), 1..20)
        ) {
            let pairs: Vec<(Verdict, Verdict)> = entries
                .iter()
                .map(|(w, ((a_ok, a_s), (b_ok, b_s)))| {
                    (
                        Verdict { word: w.clone(), is_correct: *a_ok, suggestions: a_s.clone() },
                        Verdict { word: w.clone(), is_correct: *b_ok, suggestions: b_s.clone() },
                    )
                })
                .collect();
            let gt: VerdictMap = pairs.iter().map(|(a, _)| a.clone()).collect();
            let cand: VerdictMap = pairs.iter().map(|(_, b)| b.clone()).collect();
            let gt_rev: VerdictMap = pairs.iter().rev().map(|(a, _)| a.clone()).collect();
            let cand_rev: VerdictMap = pairs.iter().rev().map(|(_, b)| b.clone()).collect();

            let cmp = Comparator::default();
            let fwd = cmp.compare(&gt, &cand).unwrap();
            let rev = cmp.compare(&gt_rev, &cand_rev).unwrap();
            let again = cmp.compare(&gt, &cand).unwrap();

            prop_assert_eq!(fwd.total_words, rev.total_words);
            prop_assert_eq!(fwd.correctness_matches, rev.correctness_matches);
            prop_assert_eq!(fwd.suggestion_matches, rev.suggestion_matches);
            prop_assert_eq!(fwd.failed_words.len(), rev.failed_words.len());
            prop_assert_eq!(fwd.failed_words, again.failed_words);
        }
    }
}
