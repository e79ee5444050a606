use super::generate::default_ground_truth_dir;
use super::RootArgs;
use spellparity_core::candidate::executable::DEFAULT_EXECUTABLE_TIMEOUT;
use spellparity_core::compare::DEFAULT_SUGGESTION_THRESHOLD;
use std::path::PathBuf;
use std::time::Duration;

#[derive(clap::Args, Clone, Debug)]
pub struct ValidateArgs {
    /// Candidate type: custom | results
    pub checker: String,

    /// Ground truth JSON [default: newest in --ground-truth-dir]
    #[arg(short = 'g', long)]
    pub ground_truth: Option<PathBuf>,

    /// Where to look for ground truth [default: <root>/testing/ground_truth/results]
    #[arg(long)]
    pub ground_truth_dir: Option<PathBuf>,

    /// Executable for the `custom` candidate, called as `<exe> <word>`
    #[arg(short, long)]
    pub executable: Option<PathBuf>,

    /// Per-word timeout for the `custom` executable
    #[arg(
        long,
        default_value_t = DEFAULT_EXECUTABLE_TIMEOUT.as_secs(),
        env = "SPELLPARITY_CANDIDATE_TIMEOUT_SECS"
    )]
    pub candidate_timeout_secs: u64,

    /// Saved verdict JSON for the `results` candidate
    #[arg(long)]
    pub results: Option<PathBuf>,

    /// Report directory [default: <root>/testing/validation/reports]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Minimum Jaccard similarity for suggestion lists to agree
    #[arg(long, default_value_t = DEFAULT_SUGGESTION_THRESHOLD, env = "SPELLPARITY_THRESHOLD")]
    pub threshold: f64,

    #[command(flatten)]
    pub root: RootArgs,
}

impl ValidateArgs {
    pub fn candidate_timeout(&self) -> Duration {
        Duration::from_secs(self.candidate_timeout_secs)
    }

    pub fn ground_truth_dir(&self) -> PathBuf {
        self.ground_truth_dir
            .clone()
            .unwrap_or_else(|| default_ground_truth_dir(&self.root.root))
    }

    pub fn report_dir(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            self.root
                .root
                .join("testing")
                .join("validation")
                .join("reports")
        })
    }
}
