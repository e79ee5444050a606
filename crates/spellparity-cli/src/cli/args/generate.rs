use super::OracleArgs;
use spellparity_core::engine::DEFAULT_BATCH_SIZE;
use std::path::{Path, PathBuf};

#[derive(clap::Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Word list (.json or plain text, one word per line); built-in sample when omitted
    pub input: Option<PathBuf>,

    /// Output directory [default: <root>/testing/ground_truth/results]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    #[command(flatten)]
    pub oracle: OracleArgs,
}

impl GenerateArgs {
    pub fn output_dir(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_ground_truth_dir(self.oracle.root()))
    }
}

pub fn default_ground_truth_dir(root: &Path) -> PathBuf {
    root.join("testing").join("ground_truth").join("results")
}
