//! Abstraction over subprocess execution to enable testing and mocking.
//!
//! The `CommandRunner` trait allows the collector to invoke the real `virsh`
//! binary in production and a scripted mock in tests.

use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use super::error::CollectError;

/// Interval between `try_wait` polls while waiting for a child.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Abstraction for running a program and capturing its standard output.
pub trait CommandRunner: Send + Sync {
    /// Runs `program` with `args` and returns its standard output.
    ///
    /// # Arguments
    /// * `program` - Program name or path
    /// * `args` - Argument vector (without the program name)
    /// * `timeout` - Upper bound on run time; `None` waits indefinitely
    ///
    /// # Returns
    /// Standard output decoded lossily as UTF-8. Non-zero exit status,
    /// launch failures and timeouts are errors. Standard error is discarded.
    fn run(
        &self,
        program: &str,
        args: &[String],
        timeout: Option<Duration>,
    ) -> Result<String, CollectError>;
}

/// Runner that spawns real processes via `std::process`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    /// Creates a new `SystemRunner` instance.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        timeout: Option<Duration>,
    ) -> Result<String, CollectError> {
        let io_err = |source| CollectError::Io {
            program: program.to_string(),
            source,
        };

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| CollectError::Spawn {
                program: program.to_string(),
                source,
            })?;

        // Drain stdout on a helper thread so a chatty child never blocks on a
        // full pipe while we poll for exit.
        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| io_err(std::io::Error::other("stdout not captured")))?;
        let reader = thread::spawn(move || {
            let mut buf = Vec::new();
            stdout.read_to_end(&mut buf).map(|_| buf)
        });

        let started = Instant::now();
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) => {
                    if let Some(limit) = timeout
                        && started.elapsed() >= limit
                    {
                        let _ = child.kill();
                        let _ = child.wait();
                        return Err(CollectError::Timeout {
                            program: program.to_string(),
                            after: limit,
                        });
                    }
                    thread::sleep(POLL_INTERVAL);
                }
                Err(e) => return Err(io_err(e)),
            }
        };

        let bytes = reader
            .join()
            .map_err(|_| io_err(std::io::Error::other("output reader panicked")))?
            .map_err(io_err)?;

        if !status.success() {
            return Err(CollectError::ExitStatus {
                program: program.to_string(),
                code: status.code(),
            });
        }

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_system_runner_captures_stdout() {
        let runner = SystemRunner::new();
        let out = runner
            .run("sh", &args(&["-c", "echo hello; echo noise >&2"]), None)
            .unwrap();
        assert_eq!(out, "hello\n");
    }

    #[test]
    fn test_system_runner_nonzero_exit() {
        let runner = SystemRunner::new();
        let err = runner.run("sh", &args(&["-c", "exit 3"]), None).unwrap_err();
        assert!(matches!(err, CollectError::ExitStatus { code: Some(3), .. }));
    }

    #[test]
    fn test_system_runner_missing_program() {
        let runner = SystemRunner::new();
        let err = runner
            .run("/nonexistent/virsh-12345", &[], None)
            .unwrap_err();
        assert!(matches!(err, CollectError::Spawn { .. }));
    }

    #[test]
    fn test_system_runner_timeout() {
        let runner = SystemRunner::new();
        let err = runner
            .run(
                "sh",
                &args(&["-c", "exec sleep 5"]),
                Some(Duration::from_millis(100)),
            )
            .unwrap_err();
        assert!(matches!(err, CollectError::Timeout { .. }));
    }
}
