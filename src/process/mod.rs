//! Child process execution with combined stdout/stderr capture.

use std::{ffi::OsStr, process::Stdio, time::Instant};

use tokio::{
    io::{AsyncRead, AsyncReadExt},
    process::Command,
};
use tracing::{debug, info};

use crate::execution::{ExecError, ExecutionResult, NO_EXIT_CODE};

/// Spawns one child per call and resolves once it has exited and both of its
/// output streams are drained.
///
/// The runner holds no state; concurrent calls share nothing but the runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }

    /// Run `program` with `args` and capture its output.
    ///
    /// Never fails: a child that cannot be started is reported as an
    /// [`ExecutionResult`] with exit code `-1` and the cause as output.
    pub async fn run<S: AsRef<OsStr>>(
        &self,
        program: impl AsRef<OsStr>,
        args: &[S],
    ) -> ExecutionResult {
        let program = program.as_ref();
        let started = Instant::now();
        match capture(program, args).await {
            Ok(result) => {
                info!(
                    program = %program.to_string_lossy(),
                    exit_code = result.exit_code,
                    output_bytes = result.output.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "child process finished"
                );
                result
            }
            Err(err) => {
                debug!(error = ?err, "child process could not be run");
                ExecutionResult::from_error(&err)
            }
        }
    }
}

async fn capture<S: AsRef<OsStr>>(program: &OsStr, args: &[S]) -> Result<ExecutionResult, ExecError> {
    let name = || program.to_string_lossy().into_owned();

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd.spawn().map_err(|source| ExecError::Spawn {
        program: name(),
        source,
    })?;
    debug!(program = %name(), pid = child.id(), "spawned child process");

    let capture_err = |source| ExecError::Capture {
        program: name(),
        source,
    };
    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| capture_err(std::io::Error::other("stdout was not piped")))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| capture_err(std::io::Error::other("stderr was not piped")))?;

    // Both pipes are drained while waiting; a child that fills one of them
    // would otherwise never exit.
    let (out, err, status) = tokio::try_join!(drain(stdout), drain(stderr), child.wait())
        .map_err(capture_err)?;

    let mut output = String::from_utf8_lossy(&out).into_owned();
    output.push_str(&String::from_utf8_lossy(&err));
    let code = status.code().unwrap_or(NO_EXIT_CODE);
    Ok(ExecutionResult::completed(output, code))
}

async fn drain<R: AsyncRead + Unpin>(mut reader: R) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).await?;
    Ok(buf)
}
