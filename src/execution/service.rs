//! Run user source through the discovered interpreter.

use tracing::{debug, warn};

use super::ExecutionResult;
use crate::{
    interpreter::{php, InterpreterHandle},
    process::ProcessRunner,
};

/// Composes a discovery outcome with a [`ProcessRunner`].
///
/// The handle is fixed at construction; a service built from `None` answers
/// every request with [`ExecutionResult::unavailable`].
#[derive(Debug, Clone)]
pub struct ScriptExecutionService {
    handle: Option<InterpreterHandle>,
    runner: ProcessRunner,
}

impl ScriptExecutionService {
    pub fn new(handle: Option<InterpreterHandle>) -> Self {
        Self::with_runner(handle, ProcessRunner::new())
    }

    pub fn with_runner(handle: Option<InterpreterHandle>, runner: ProcessRunner) -> Self {
        Self { handle, runner }
    }

    pub fn handle(&self) -> Option<&InterpreterHandle> {
        self.handle.as_ref()
    }

    pub fn is_available(&self) -> bool {
        self.handle.is_some()
    }

    /// Execute `source` with `php -r`. Failures come back as results, never as errors.
    pub async fn execute(&self, source: &str) -> ExecutionResult {
        let Some(handle) = &self.handle else {
            warn!("execution requested without an interpreter");
            return ExecutionResult::unavailable();
        };
        debug!(path = %handle.path().display(), source_bytes = source.len(), "executing script");
        self.runner
            .run(handle.path(), &[php::RUN_CODE_FLAG, source])
            .await
    }
}
