//! Collection error type.

use std::time::Duration;

/// Error type for collection failures.
///
/// Only the primary `domstats` invocation surfaces these to the UI;
/// per-domain `domifaddr` failures are logged and dropped.
#[derive(Debug)]
pub enum CollectError {
    /// The program could not be launched (not installed, not executable).
    Spawn {
        program: String,
        source: std::io::Error,
    },
    /// The program ran but exited unsuccessfully. `code` is `None` when it
    /// was terminated by a signal.
    ExitStatus { program: String, code: Option<i32> },
    /// I/O error while waiting for the program or reading its output.
    Io {
        program: String,
        source: std::io::Error,
    },
    /// The program did not finish within the configured timeout and was killed.
    Timeout { program: String, after: Duration },
}

impl std::fmt::Display for CollectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectError::Spawn { program, source } => {
                write!(f, "failed to execute {}: {}", program, source)
            }
            CollectError::ExitStatus {
                program,
                code: Some(code),
            } => write!(f, "{} exited with status {}", program, code),
            CollectError::ExitStatus {
                program,
                code: None,
            } => write!(f, "{} was terminated by a signal", program),
            CollectError::Io { program, source } => {
                write!(f, "I/O error reading {} output: {}", program, source)
            }
            CollectError::Timeout { program, after } => {
                write!(f, "{} timed out after {:?}", program, after)
            }
        }
    }
}

impl std::error::Error for CollectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CollectError::Spawn { source, .. } | CollectError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_display_messages() {
        let spawn = CollectError::Spawn {
            program: "virsh".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(spawn.to_string(), "failed to execute virsh: not found");

        let exit = CollectError::ExitStatus {
            program: "virsh".into(),
            code: Some(1),
        };
        assert_eq!(exit.to_string(), "virsh exited with status 1");

        let signal = CollectError::ExitStatus {
            program: "virsh".into(),
            code: None,
        };
        assert_eq!(signal.to_string(), "virsh was terminated by a signal");

        let timeout = CollectError::Timeout {
            program: "virsh".into(),
            after: Duration::from_secs(10),
        };
        assert_eq!(timeout.to_string(), "virsh timed out after 10s");
    }

    #[test]
    fn test_source_is_exposed_for_io_errors() {
        use std::error::Error;
        let err = CollectError::Io {
            program: "virsh".into(),
            source: io::Error::other("broken pipe"),
        };
        assert!(err.source().is_some());
        let exit = CollectError::ExitStatus {
            program: "virsh".into(),
            code: Some(2),
        };
        assert!(exit.source().is_none());
    }
}
