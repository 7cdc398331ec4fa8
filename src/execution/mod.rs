//! Execution engine: result type, failure taxonomy and the script service.

use serde::Serialize;
use thiserror::Error;

pub mod service;

pub use service::ScriptExecutionService;

/// Exit code reported when no child process ever produced a status.
pub const NO_EXIT_CODE: i32 = -1;

/// Message returned when a script is executed without a discovered interpreter.
pub const UNAVAILABLE_MESSAGE: &str = "Error: PHP is not installed on this system.";

/// Failures that are recovered into an [`ExecutionResult`] instead of propagated.
#[derive(Error, Debug)]
pub enum ExecError {
    #[error("Error: PHP is not installed on this system.")]
    InterpreterUnavailable,

    #[error("Execution error: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Execution error: failed to capture output: {source}")]
    Capture {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// How a finished execution is classified for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// No interpreter was found, or the child never started.
    NotRun,
    /// The interpreter ran and exited with this non-zero status.
    NonZeroExit(i32),
}

/// Combined output of one interpreter invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    pub output: String,
    pub is_error: bool,
    pub exit_code: i32,
}

impl ExecutionResult {
    /// Result of a child that ran to completion. `is_error` follows the exit code.
    pub fn completed(output: String, exit_code: i32) -> Self {
        Self {
            output,
            is_error: exit_code != 0,
            exit_code,
        }
    }

    /// Result synthesized when nothing could be run.
    pub fn from_error(err: &ExecError) -> Self {
        Self {
            output: err.to_string(),
            is_error: true,
            exit_code: NO_EXIT_CODE,
        }
    }

    pub fn unavailable() -> Self {
        Self::from_error(&ExecError::InterpreterUnavailable)
    }

    pub fn failure(&self) -> Option<Failure> {
        match self.exit_code {
            0 => None,
            NO_EXIT_CODE => Some(Failure::NotRun),
            code => Some(Failure::NonZeroExit(code)),
        }
    }
}
