use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Per-query wait for the oracle process.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(10);
/// Wait for the interpreter `--version` probe.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_INTERPRETER: &str = "perl";

/// Where the oracle lives and how to launch it.
///
/// The process is started as `<interpreter> -I <lib_dir> <script>` with
/// `working_dir` as its current directory.
#[derive(Debug, Clone)]
pub struct OracleConfig {
    pub interpreter: String,
    pub script: PathBuf,
    pub lib_dir: PathBuf,
    pub working_dir: PathBuf,
    pub query_timeout: Duration,
    pub probe_timeout: Duration,
}

impl OracleConfig {
    /// Standard layout under an oracle checkout: `script/cof_oo_cli.pl` and `lib/`.
    pub fn from_root(root: &Path) -> Self {
        Self {
            interpreter: DEFAULT_INTERPRETER.to_string(),
            script: root.join("script").join("cof_oo_cli.pl"),
            lib_dir: root.join("lib"),
            working_dir: root.to_path_buf(),
            query_timeout: DEFAULT_QUERY_TIMEOUT,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Arguments passed to the interpreter, in order.
    pub fn launch_args(&self) -> [&OsStr; 3] {
        [
            OsStr::new("-I"),
            self.lib_dir.as_os_str(),
            self.script.as_os_str(),
        ]
    }
}

/// Knobs for the Markdown compatibility report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Rows shown in the failed-words table.
    pub max_failures: usize,
    /// Suggestions shown per side in each row.
    pub suggestions_shown: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_failures: 50,
            suggestions_shown: 3,
        }
    }
}
