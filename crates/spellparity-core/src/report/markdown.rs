use super::GENERATED_AT_FORMAT;
use crate::compare::{ComparisonResult, Disagreement};
use crate::config::ReportConfig;
use crate::errors::ParityError;
use crate::model::Verdict;
use crate::storage::{artifact_timestamp, write_atomic};
use chrono::{DateTime, Local};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Qualitative band for the overall compatibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Excellent,
    Good,
    Significant,
}

impl Recommendation {
    pub fn for_score(overall: f64) -> Self {
        if overall >= 90.0 {
            Self::Excellent
        } else if overall >= 70.0 {
            Self::Good
        } else {
            Self::Significant
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Self::Excellent => {
                "✅ **Excellent compatibility!** Minor adjustments may further improve alignment."
            }
            Self::Good => {
                "⚠️ **Good compatibility** with room for improvement. Focus on failed cases."
            }
            Self::Significant => {
                "❌ **Significant compatibility issues** detected. Major improvements needed."
            }
        }
    }
}

pub fn report_path(out_dir: &Path, checker: &str, now: &DateTime<Local>) -> PathBuf {
    out_dir.join(format!(
        "{checker}_compatibility_report_{}.md",
        artifact_timestamp(now)
    ))
}

pub fn write_compatibility_report(
    result: &ComparisonResult,
    checker: &str,
    out_dir: &Path,
    cfg: &ReportConfig,
    now: &DateTime<Local>,
) -> Result<PathBuf, ParityError> {
    let path = report_path(out_dir, checker, now);
    let body = render_compatibility_report(result, checker, cfg, now);
    write_atomic(&path, body.as_bytes())?;
    tracing::info!(path = %path.display(), "compatibility report saved");
    Ok(path)
}

pub fn render_compatibility_report(
    result: &ComparisonResult,
    checker: &str,
    cfg: &ReportConfig,
    now: &DateTime<Local>,
) -> String {
    let mut f = String::new();
    let _ = writeln!(f, "# COF Compatibility Report: {checker}\n");
    let _ = writeln!(f, "Generated: {}\n", now.format(GENERATED_AT_FORMAT));

    let _ = writeln!(f, "## Summary\n");
    let _ = writeln!(f, "- **Total Words Tested**: {}", result.total_words);
    let _ = writeln!(
        f,
        "- **Correctness Matches**: {} ({:.1}%)",
        result.correctness_matches, result.correctness_percentage
    );
    let _ = writeln!(
        f,
        "- **Suggestion Matches**: {} ({:.1}%)",
        result.suggestion_matches, result.suggestion_percentage
    );
    let _ = writeln!(
        f,
        "- **Overall Compatibility**: {:.1}%",
        result.overall_compatibility
    );
    let _ = writeln!(
        f,
        "- **Suggestion Threshold**: {:.2} (Jaccard)",
        result.suggestion_threshold
    );
    let _ = writeln!(f, "- **Failed Words**: {}\n", result.failed_words.len());

    let gt = &result.ground_truth;
    let _ = writeln!(f, "## Ground Truth Distribution\n");
    let _ = writeln!(f, "- Correct words: {}", gt.correct_words);
    let _ = writeln!(f, "- Incorrect words: {}", gt.incorrect_words);
    let _ = writeln!(f, "- Words with suggestions: {}\n", gt.words_with_suggestions);

    if !result.failed_words.is_empty() {
        let _ = writeln!(f, "## Failed Words Analysis\n");
        let _ = writeln!(
            f,
            "| Word | Issue | COF Result | Test Result | COF Suggestions | Test Suggestions |"
        );
        let _ = writeln!(
            f,
            "|------|-------|------------|-------------|-----------------|------------------|"
        );
        for fail in result.failed_words.iter().take(cfg.max_failures) {
            let _ = writeln!(f, "{}", failure_row(fail, cfg.suggestions_shown));
        }
        if result.failed_words.len() > cfg.max_failures {
            let _ = writeln!(
                f,
                "\n*... and {} more failures*",
                result.failed_words.len() - cfg.max_failures
            );
        }
    }

    let _ = writeln!(f, "\n## Recommendations\n");
    let _ = writeln!(
        f,
        "{}",
        Recommendation::for_score(result.overall_compatibility).text()
    );
    f
}

fn failure_row(fail: &Disagreement, shown: usize) -> String {
    format!(
        "| {} | {} | {} | {} | {} | {} |",
        escape_cell(&fail.word),
        fail.issues().join(", "),
        mark(&fail.ground_truth),
        mark(&fail.candidate),
        first_suggestions(&fail.ground_truth, shown),
        first_suggestions(&fail.candidate, shown),
    )
}

fn mark(v: &Verdict) -> &'static str {
    if v.is_correct {
        "✅"
    } else {
        "❌"
    }
}

fn first_suggestions(v: &Verdict, shown: usize) -> String {
    let picked: Vec<String> = v
        .suggestions
        .iter()
        .take(shown)
        .map(|s| escape_cell(s))
        .collect();
    picked.join(", ")
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Comparator;
    use crate::model::VerdictMap;
    use chrono::TimeZone;

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap()
    }

    fn result_with_failures(n: usize) -> ComparisonResult {
        let gt: VerdictMap = (0..n)
            .map(|i| Verdict::incorrect(format!("w{i}"), vec!["a".into(), "b".into(), "c".into(), "d".into()]))
            .chain(std::iter::once(Verdict::correct("ok")))
            .collect();
        let cand: VerdictMap = (0..n)
            .map(|i| Verdict::correct(format!("w{i}")))
            .chain(std::iter::once(Verdict::correct("ok")))
            .collect();
        Comparator::default().compare(&gt, &cand).unwrap()
    }

    #[test]
    fn test_recommendation_bands() {
        assert_eq!(Recommendation::for_score(90.0), Recommendation::Excellent);
        assert_eq!(Recommendation::for_score(89.9), Recommendation::Good);
        assert_eq!(Recommendation::for_score(70.0), Recommendation::Good);
        assert_eq!(Recommendation::for_score(69.9), Recommendation::Significant);
    }

    #[test]
    fn test_report_sections_and_rows() {
        let result = result_with_failures(2);
        let md = render_compatibility_report(&result, "custom", &ReportConfig::default(), &now());

        assert!(md.starts_with("# COF Compatibility Report: custom\n"));
        assert!(md.contains("Generated: 2026-10-18 09:00:00"));
        assert!(md.contains("- **Total Words Tested**: 3"));
        assert!(md.contains("- **Correctness Matches**: 1 (33.3%)"));
        assert!(md.contains("- Incorrect words: 2"));
        assert!(md.contains("| w0 | correctness, suggestions | ❌ | ✅ | a, b, c |  |"));
        assert!(!md.contains("more failures"));
        assert!(md.contains("Significant compatibility issues"));
    }

    #[test]
    fn test_failure_table_is_capped() {
        let result = result_with_failures(55);
        let md = render_compatibility_report(&result, "custom", &ReportConfig::default(), &now());
        assert_eq!(md.matches("| w").count(), 50);
        assert!(md.contains("*... and 5 more failures*"));
    }

    #[test]
    fn test_no_failures_omits_table() {
        let gt: VerdictMap = vec![Verdict::correct("cjase")].into_iter().collect();
        let result = Comparator::default().compare(&gt, &gt).unwrap();
        let md = render_compatibility_report(&result, "results", &ReportConfig::default(), &now());
        assert!(!md.contains("## Failed Words Analysis"));
        assert!(md.contains("Excellent compatibility"));
    }

    #[test]
    fn test_write_report() {
        let dir = tempfile::tempdir().unwrap();
        let result = result_with_failures(1);
        let path = write_compatibility_report(
            &result,
            "custom",
            dir.path(),
            &ReportConfig::default(),
            &now(),
        )
        .unwrap();
        assert_eq!(
            path.file_name().unwrap(),
            "custom_compatibility_report_20261018_090000.md"
        );
        assert!(std::fs::read_to_string(path).unwrap().contains("## Recommendations"));
    }
}
