use super::GENERATED_AT_FORMAT;
use crate::engine::GroundTruthRun;
use crate::errors::ParityError;
use crate::model::VerdictMap;
use crate::storage::{artifact_timestamp, write_atomic};
use chrono::{DateTime, Local};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Base name used when the words did not come from a file.
pub const DEFAULT_BASE_NAME: &str = "cof_ground_truth";

/// Paths of the three artifacts written for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundTruthArtifacts {
    pub json: PathBuf,
    pub tsv: PathBuf,
    pub stats: PathBuf,
}

/// Artifact base name: the input file's stem, or [`DEFAULT_BASE_NAME`].
pub fn base_name(input: Option<&Path>) -> String {
    input
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .map(String::from)
        .unwrap_or_else(|| DEFAULT_BASE_NAME.to_string())
}

pub fn write_ground_truth(
    run: &GroundTruthRun,
    out_dir: &Path,
    base: &str,
    now: &DateTime<Local>,
) -> Result<GroundTruthArtifacts, ParityError> {
    let ts = artifact_timestamp(now);
    let artifacts = GroundTruthArtifacts {
        json: out_dir.join(format!("{base}_ground_truth_{ts}.json")),
        tsv: out_dir.join(format!("{base}_ground_truth_{ts}.tsv")),
        stats: out_dir.join(format!("{base}_statistics_{ts}.txt")),
    };

    let json = serde_json::to_string_pretty(&run.verdicts)
        .map_err(|e| ParityError::json(&artifacts.json, e))?;
    write_atomic(&artifacts.json, json.as_bytes())?;
    write_atomic(&artifacts.tsv, render_tsv(&run.verdicts).as_bytes())?;
    write_atomic(
        &artifacts.stats,
        render_statistics(&run.verdicts, &run.unreachable, now).as_bytes(),
    )?;

    tracing::info!(
        json = %artifacts.json.display(),
        tsv = %artifacts.tsv.display(),
        stats = %artifacts.stats.display(),
        "ground truth saved"
    );
    Ok(artifacts)
}

pub fn render_tsv(verdicts: &VerdictMap) -> String {
    let mut out = String::from("word\tcorrect\tsuggestions\n");
    for v in verdicts {
        let _ = writeln!(
            out,
            "{}\t{}\t{}",
            v.word,
            v.is_correct,
            v.suggestions.join(",")
        );
    }
    out
}

pub fn render_statistics(
    verdicts: &VerdictMap,
    unreachable: &[String],
    now: &DateTime<Local>,
) -> String {
    let stats = verdicts.stats();
    let mut out = String::new();
    let _ = writeln!(out, "COF Ground Truth Statistics");
    let _ = writeln!(out, "Generated: {}", now.format(GENERATED_AT_FORMAT));
    let _ = writeln!(out, "Total words: {}", stats.total);
    let _ = writeln!(
        out,
        "Correct words: {} ({:.1}%)",
        stats.correct,
        stats.correct_percentage()
    );
    let _ = writeln!(
        out,
        "Incorrect words: {} ({:.1}%)",
        stats.incorrect,
        stats.incorrect_percentage()
    );
    let _ = writeln!(out, "Words with suggestions: {}", stats.with_suggestions);
    let _ = writeln!(out, "Oracle unreachable: {}", unreachable.len());
    for word in unreachable {
        let _ = writeln!(out, "  - {word}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Verdict;
    use chrono::TimeZone;
    use std::time::Duration;

    fn sample_run() -> GroundTruthRun {
        GroundTruthRun {
            verdicts: vec![
                Verdict::correct("cjase"),
                Verdict::incorrect("gjal", vec!["gjal".into(), "cjal".into()]),
                Verdict::negative("zzz"),
                Verdict::negative("slow"),
            ]
            .into_iter()
            .collect(),
            elapsed: Duration::from_secs(2),
            processed: 4,
            skipped: 0,
            unreachable: vec!["slow".into()],
        }
    }

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 18, 14, 30, 0).unwrap()
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name(Some(Path::new("/data/friulian_words.json"))), "friulian_words");
        assert_eq!(base_name(None), DEFAULT_BASE_NAME);
    }

    #[test]
    fn test_render_tsv() {
        assert_eq!(
            render_tsv(&sample_run().verdicts),
            "word\tcorrect\tsuggestions\n\
             cjase\ttrue\t\n\
             gjal\tfalse\tgjal,cjal\n\
             zzz\tfalse\t\n\
             slow\tfalse\t\n"
        );
    }

    #[test]
    fn test_render_statistics() {
        let text = render_statistics(&sample_run().verdicts, &["slow".to_string()], &fixed_now());
        assert!(text.contains("Generated: 2026-10-18 14:30:00"));
        assert!(text.contains("Total words: 4"));
        assert!(text.contains("Correct words: 1 (25.0%)"));
        assert!(text.contains("Incorrect words: 3 (75.0%)"));
        assert!(text.contains("Words with suggestions: 1"));
        assert!(text.contains("Oracle unreachable: 1\n  - slow"));
    }

    #[test]
    fn test_empty_statistics_do_not_divide_by_zero() {
        let text = render_statistics(&VerdictMap::new(), &[], &fixed_now());
        assert!(text.contains("Correct words: 0 (0.0%)"));
    }

    #[test]
    fn test_write_ground_truth() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("results");
        let artifacts = write_ground_truth(&sample_run(), &out, "words", &fixed_now()).unwrap();

        assert_eq!(
            artifacts.json,
            out.join("words_ground_truth_20261018_143000.json")
        );
        assert!(artifacts.tsv.exists());
        assert_eq!(
            artifacts.stats.file_name().unwrap(),
            "words_statistics_20261018_143000.txt"
        );

        let back = crate::storage::load_verdicts(&artifacts.json).unwrap();
        assert_eq!(back, sample_run().verdicts);
        assert_eq!(
            crate::storage::find_latest_ground_truth(&out).unwrap(),
            artifacts.json
        );
    }
}
