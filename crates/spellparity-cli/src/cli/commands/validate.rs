use chrono::Local;
use spellparity_core::candidate::{
    collect_nonempty, CandidateKind, CandidateRunner, ExecutableCandidate, ResultsFileCandidate,
};
use spellparity_core::config::ReportConfig;
use spellparity_core::report::json::write_comparison_json;
use spellparity_core::report::markdown::write_compatibility_report;
use spellparity_core::storage::{find_latest_ground_truth, load_verdicts};
use spellparity_core::{Comparator, ParityError};

use crate::cli::args::ValidateArgs;
use crate::console::{self, Level};
use crate::exit_codes::SUCCESS;

pub fn run(args: ValidateArgs) -> anyhow::Result<i32> {
    let kind: CandidateKind = args.checker.parse()?;
    let comparator = Comparator::new(args.threshold)?;

    let gt_path = match &args.ground_truth {
        Some(path) => path.clone(),
        None => find_latest_ground_truth(&args.ground_truth_dir())?,
    };
    console::emit(
        Level::Info,
        &format!("Loading ground truth from {}", gt_path.display()),
    );
    let ground_truth = load_verdicts(&gt_path)?;
    let words: Vec<String> = ground_truth.words().map(String::from).collect();
    console::emit(
        Level::Info,
        &format!("Loaded ground truth for {} words", words.len()),
    );

    let mut runner = build_runner(kind, &args)?;
    console::emit(Level::Info, &format!("Running '{}' candidate", runner.name()));
    let candidate = collect_nonempty(runner.as_mut(), &words)?;
    let outside = candidate
        .words()
        .filter(|w| !ground_truth.contains(w))
        .count();
    if outside > 0 {
        console::emit(
            Level::Warning,
            &format!("{outside} candidate words have no ground truth and are not scored"),
        );
    }
    let result = comparator.compare(&ground_truth, &candidate)?;

    console::print_comparison_summary(runner.name(), &result);

    let now = Local::now();
    let out_dir = args.report_dir();
    let report = write_compatibility_report(
        &result,
        runner.name(),
        &out_dir,
        &ReportConfig::default(),
        &now,
    )?;
    let json = write_comparison_json(&result, runner.name(), &out_dir, &now)?;
    console::print_saved("Report", &report);
    console::print_saved("Results", &json);

    Ok(SUCCESS)
}

fn build_runner(
    kind: CandidateKind,
    args: &ValidateArgs,
) -> Result<Box<dyn CandidateRunner>, ParityError> {
    match kind {
        CandidateKind::Custom => {
            let exe = args
                .executable
                .as_deref()
                .ok_or(ParityError::MissingCheckerArgument {
                    kind: kind.as_str().to_string(),
                    flag: "executable",
                })?;
            Ok(Box::new(
                ExecutableCandidate::new(exe)?.with_timeout(args.candidate_timeout()),
            ))
        }
        CandidateKind::Results => {
            let path = args
                .results
                .as_deref()
                .ok_or(ParityError::MissingCheckerArgument {
                    kind: kind.as_str().to_string(),
                    flag: "results",
                })?;
            Ok(Box::new(ResultsFileCandidate::new(path)))
        }
    }
}
