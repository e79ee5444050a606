//! Shared argument types used across multiple commands.

use spellparity_core::config::{OracleConfig, DEFAULT_INTERPRETER};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(clap::Args, Clone, Debug)]
pub struct RootArgs {
    /// Oracle checkout (holds script/ and lib/); default output folders live below it
    #[arg(long, default_value = ".", env = "SPELLPARITY_ROOT")]
    pub root: PathBuf,
}

#[derive(clap::Args, Clone, Debug)]
pub struct OracleArgs {
    #[command(flatten)]
    pub root: RootArgs,

    /// Interpreter that runs the oracle script
    #[arg(long, default_value = DEFAULT_INTERPRETER, env = "SPELLPARITY_INTERPRETER")]
    pub interpreter: String,

    /// Per-word timeout for the oracle process
    #[arg(long, default_value_t = 10, env = "SPELLPARITY_TIMEOUT_SECS")]
    pub timeout_secs: u64,
}

impl OracleArgs {
    pub fn root(&self) -> &Path {
        &self.root.root
    }

    pub fn to_config(&self) -> OracleConfig {
        let timeout = Duration::from_secs(self.timeout_secs);
        OracleConfig::from_root(self.root())
            .with_interpreter(self.interpreter.clone())
            .with_query_timeout(timeout)
            .with_probe_timeout(timeout)
    }
}

#[derive(clap::Args, Clone, Debug)]
pub struct ProbeArgs {
    #[command(flatten)]
    pub oracle: OracleArgs,
}
