use crate::config::OracleConfig;
use crate::errors::ParityError;
use crate::process::{run_with_timeout, ProcessError, ProcessOutput};
use std::process::Command;

/// What came back from one oracle instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleReply {
    pub exit_code: Option<i32>,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl OracleReply {
    /// A clean exit with the given stdout.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }
}

impl From<ProcessOutput> for OracleReply {
    fn from(out: ProcessOutput) -> Self {
        Self {
            exit_code: out.status.code(),
            success: out.status.success(),
            stdout: out.stdout,
            stderr: out.stderr,
        }
    }
}

/// How a request reaches the oracle. One call is one fresh oracle instance.
pub trait OracleTransport {
    fn exchange(&self, request: &str) -> Result<OracleReply, ProcessError>;

    /// Static checks before the first live query.
    fn preflight(&self) -> Result<(), ParityError> {
        Ok(())
    }
}

/// Launches the oracle script through its interpreter for every request.
#[derive(Debug, Clone)]
pub struct ProcessTransport {
    config: OracleConfig,
}

impl ProcessTransport {
    pub fn new(config: OracleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OracleConfig {
        &self.config
    }
}

impl OracleTransport for ProcessTransport {
    fn exchange(&self, request: &str) -> Result<OracleReply, ProcessError> {
        let mut cmd = Command::new(&self.config.interpreter);
        cmd.args(self.config.launch_args())
            .current_dir(&self.config.working_dir);
        run_with_timeout(cmd, Some(request), self.config.query_timeout).map(OracleReply::from)
    }

    fn preflight(&self) -> Result<(), ParityError> {
        let cfg = &self.config;
        if !cfg.script.exists() {
            return Err(ParityError::oracle_unavailable(format!(
                "oracle script not found at: {}",
                cfg.script.display()
            )));
        }
        if !cfg.lib_dir.exists() {
            return Err(ParityError::oracle_unavailable(format!(
                "oracle lib directory not found at: {}",
                cfg.lib_dir.display()
            )));
        }

        let mut probe = Command::new(&cfg.interpreter);
        probe.arg("--version");
        match run_with_timeout(probe, None, cfg.probe_timeout) {
            Ok(out) if out.success() => Ok(()),
            Ok(out) => Err(ParityError::oracle_unavailable(format!(
                "'{} --version' exited with {}",
                cfg.interpreter, out.status
            ))),
            Err(e) => Err(ParityError::oracle_unavailable(format!(
                "interpreter '{}' not available: {}",
                cfg.interpreter, e
            ))),
        }
    }
}
