//! In-memory command runner that replays scripted outputs.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use crate::collector::error::CollectError;
use crate::collector::traits::CommandRunner;

/// Scripted outcome for one command line.
#[derive(Debug, Clone)]
enum Response {
    Stdout(String),
    Exit(i32),
    NotFound,
}

/// Runner that returns canned output keyed by the full command line.
///
/// Command lines without a scripted response fail as if the program exited
/// with status 1. Every invocation is recorded for later inspection.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: HashMap<Vec<String>, Response>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl MockRunner {
    /// Creates a runner with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    fn key(program: &str, args: &[&str]) -> Vec<String> {
        std::iter::once(program)
            .chain(args.iter().copied())
            .map(str::to_string)
            .collect()
    }

    /// Scripts a successful run with the given standard output.
    pub fn with_stdout(mut self, program: &str, args: &[&str], stdout: impl Into<String>) -> Self {
        self.responses
            .insert(Self::key(program, args), Response::Stdout(stdout.into()));
        self
    }

    /// Scripts a run that exits with a non-zero status.
    pub fn with_exit(mut self, program: &str, args: &[&str], code: i32) -> Self {
        self.responses
            .insert(Self::key(program, args), Response::Exit(code));
        self
    }

    /// Scripts a launch failure (program not found).
    pub fn with_not_found(mut self, program: &str, args: &[&str]) -> Self {
        self.responses
            .insert(Self::key(program, args), Response::NotFound);
        self
    }

    /// Returns every command line run so far, program first.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl CommandRunner for MockRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        _timeout: Option<Duration>,
    ) -> Result<String, CollectError> {
        let mut key = Vec::with_capacity(args.len() + 1);
        key.push(program.to_string());
        key.extend(args.iter().cloned());

        if let Ok(mut calls) = self.calls.lock() {
            calls.push(key.clone());
        }

        match self.responses.get(&key) {
            Some(Response::Stdout(out)) => Ok(out.clone()),
            Some(Response::Exit(code)) => Err(CollectError::ExitStatus {
                program: program.to_string(),
                code: Some(*code),
            }),
            Some(Response::NotFound) => Err(CollectError::Spawn {
                program: program.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            }),
            None => Err(CollectError::ExitStatus {
                program: program.to_string(),
                code: Some(1),
            }),
        }
    }
}
