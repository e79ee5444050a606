//! Bounded subprocess execution shared by the oracle transport and the
//! executable candidate.
//!
//! stdout and stderr are drained on reader threads while the child runs, so a
//! chatty child never stalls on a full pipe. The child is polled until it exits
//! or the timeout elapses; on timeout it is killed and reaped.

use std::io::{Read, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Cap on captured stderr kept for diagnostics.
const STDERR_CAP: usize = 4096;
const POLL_INTERVAL: Duration = Duration::from_millis(20);

#[derive(Debug)]
pub struct ProcessOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("process I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("process timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),
}

/// Run `command`, optionally feeding `stdin`, and wait at most `timeout`.
pub fn run_with_timeout(
    mut command: Command,
    stdin: Option<&str>,
    timeout: Duration,
) -> Result<ProcessOutput, ProcessError> {
    let program = command.get_program().to_string_lossy().into_owned();
    command
        .stdin(if stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = command
        .spawn()
        .map_err(|source| ProcessError::Spawn { program, source })?;

    let stdout_reader = child.stdout.take().map(|out| drain(out, usize::MAX));
    let stderr_reader = child.stderr.take().map(|err| drain(err, STDERR_CAP));

    if let Some(input) = stdin {
        // Dropping the handle closes the pipe so the child sees EOF.
        if let Some(mut pipe) = child.stdin.take() {
            if let Err(e) = pipe.write_all(input.as_bytes()) {
                if e.kind() != std::io::ErrorKind::BrokenPipe {
                    reap(&mut child);
                    return Err(e.into());
                }
            }
        }
    }

    let status = match child.wait_timeout(timeout) {
        Ok(Some(status)) => status,
        Ok(None) => {
            // Readers are left detached: a grandchild may still hold the pipes.
            reap(&mut child);
            return Err(ProcessError::Timeout(timeout));
        }
        Err(e) => {
            reap(&mut child);
            return Err(e.into());
        }
    };

    let stdout = collect(stdout_reader)?;
    let stderr = collect(stderr_reader)?;

    Ok(ProcessOutput {
        status,
        stdout,
        stderr,
    })
}

fn reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

type Reader = JoinHandle<std::io::Result<Vec<u8>>>;

/// Read `source` to EOF on its own thread, keeping at most `cap` bytes.
fn drain<R: Read + Send + 'static>(mut source: R, cap: usize) -> Reader {
    std::thread::spawn(move || {
        let mut kept = Vec::new();
        let mut chunk = [0u8; 8192];
        loop {
            let n = source.read(&mut chunk)?;
            if n == 0 {
                return Ok(kept);
            }
            let room = cap.saturating_sub(kept.len());
            kept.extend_from_slice(&chunk[..n.min(room)]);
        }
    })
}

fn collect(reader: Option<Reader>) -> Result<String, ProcessError> {
    let Some(handle) = reader else {
        return Ok(String::new());
    };
    let bytes = handle
        .join()
        .map_err(|_| std::io::Error::other("output reader thread panicked"))??;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Extension trait to add `wait_timeout` to `Child`.
trait ChildExt {
    fn wait_timeout(&mut self, timeout: Duration) -> std::io::Result<Option<ExitStatus>>;
}

impl ChildExt for Child {
    fn wait_timeout(&mut self, timeout: Duration) -> std::io::Result<Option<ExitStatus>> {
        let start = Instant::now();
        loop {
            match self.try_wait()? {
                Some(status) => return Ok(Some(status)),
                None => {
                    if start.elapsed() >= timeout {
                        return Ok(None);
                    }
                    std::thread::sleep(POLL_INTERVAL);
                }
            }
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> Command {
        let mut cmd = Command::new("/bin/sh");
        cmd.arg("-c").arg(script);
        cmd
    }

    #[test]
    fn test_stdin_is_delivered_and_closed() {
        let out = run_with_timeout(sh("cat"), Some("s cjase\nq\n"), Duration::from_secs(5)).unwrap();
        assert!(out.success());
        assert_eq!(out.stdout, "s cjase\nq\n");
    }

    #[test]
    fn test_non_zero_exit_is_reported_not_an_error() {
        let out = run_with_timeout(sh("echo boom >&2; exit 3"), None, Duration::from_secs(5)).unwrap();
        assert!(!out.success());
        assert_eq!(out.status.code(), Some(3));
        assert_eq!(out.stderr.trim(), "boom");
    }

    #[test]
    fn test_timeout_kills_child() {
        let err = run_with_timeout(sh("sleep 5"), None, Duration::from_millis(100)).unwrap_err();
        assert!(matches!(err, ProcessError::Timeout(_)));
    }

    #[test]
    fn test_large_stderr_does_not_stall_child() {
        let out = run_with_timeout(
            sh("head -c 100000 /dev/zero | tr '\\0' 'w' >&2; echo ok; exit 0"),
            None,
            Duration::from_secs(5),
        )
        .unwrap();
        assert!(out.success());
        assert_eq!(out.stdout, "ok\n");
        assert_eq!(out.stderr.len(), STDERR_CAP);
    }

    #[test]
    fn test_large_stdout_is_read_in_full() {
        let out = run_with_timeout(
            sh("head -c 200000 /dev/zero | tr '\\0' 'x'"),
            None,
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(out.stdout.len(), 200_000);
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let err = run_with_timeout(
            Command::new("/nonexistent/spellparity-oracle"),
            None,
            Duration::from_secs(1),
        )
        .unwrap_err();
        assert!(matches!(err, ProcessError::Spawn { .. }));
    }
}
