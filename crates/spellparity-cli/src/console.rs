//! Human-facing output. Everything goes to stderr; logs go through `tracing`.

use spellparity_core::compare::ComparisonResult;
use spellparity_core::engine::GroundTruthRun;
use spellparity_core::report::ground_truth::GroundTruthArtifacts;
use spellparity_core::report::progress::{format_progress_line, ProgressEvent, ProgressSink};
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn prefix(self) -> &'static str {
        match self {
            Level::Info => "",
            Level::Success => "ok: ",
            Level::Warning => "warning: ",
            Level::Error => "",
        }
    }
}

pub fn emit(level: Level, message: &str) {
    eprintln!("{}{}", level.prefix(), message);
}

pub fn banner(title: &str) {
    let rule = "=".repeat(60);
    eprintln!("{rule}\n{title}\n{rule}");
}

/// Prints a progress line for every event the batch runner emits.
pub fn progress_sink() -> ProgressSink {
    Arc::new(|ev: ProgressEvent| emit(Level::Info, &format_progress_line(&ev)))
}

pub fn print_ground_truth_summary(run: &GroundTruthRun, artifacts: &GroundTruthArtifacts) {
    let stats = run.verdicts.stats();
    emit(
        Level::Success,
        &format!(
            "Ground truth generated for {} words in {:.1}s",
            stats.total,
            run.elapsed.as_secs_f64()
        ),
    );
    emit(
        Level::Info,
        &format!(
            "Correct: {} ({:.1}%)  Incorrect: {} ({:.1}%)  With suggestions: {}",
            stats.correct,
            stats.correct_percentage(),
            stats.incorrect,
            stats.incorrect_percentage(),
            stats.with_suggestions
        ),
    );
    if run.skipped > 0 {
        emit(Level::Warning, &format!("{} blank entries skipped", run.skipped));
    }
    if !run.unreachable.is_empty() {
        emit(
            Level::Warning,
            &format!(
                "{} words recorded as incorrect because the oracle could not answer",
                run.unreachable.len()
            ),
        );
    }
    print_saved("JSON", &artifacts.json);
    print_saved("TSV", &artifacts.tsv);
    print_saved("Statistics", &artifacts.stats);
}

pub fn print_comparison_summary(checker: &str, result: &ComparisonResult) {
    banner(&format!("Compatibility: {checker}"));
    emit(Level::Info, &format!("Words compared:      {}", result.total_words));
    emit(
        Level::Info,
        &format!(
            "Correctness matches: {} ({:.1}%)",
            result.correctness_matches, result.correctness_percentage
        ),
    );
    emit(
        Level::Info,
        &format!(
            "Suggestion matches:  {} ({:.1}%)",
            result.suggestion_matches, result.suggestion_percentage
        ),
    );
    emit(
        Level::Info,
        &format!("Overall:             {:.1}%", result.overall_compatibility),
    );
    if !result.failed_words.is_empty() {
        emit(
            Level::Warning,
            &format!("{} words disagree with the ground truth", result.failed_words.len()),
        );
    }
}

pub fn print_saved(what: &str, path: &Path) {
    emit(Level::Info, &format!("{what}: {}", path.display()));
}
