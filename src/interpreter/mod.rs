//! Interpreter discovery: find the first installed binary that answers a probe.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::process::ProcessRunner;

pub mod php;

/// A verified interpreter binary and the version line it reported.
///
/// Produced once by [`InterpreterLocator::locate`] and never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterHandle {
    path: PathBuf,
    version: String,
}

impl InterpreterHandle {
    /// Build a handle without probing. Useful when the caller already trusts
    /// the binary, e.g. in tests.
    pub fn new(path: impl Into<PathBuf>, version: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            version: version.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

/// Ordered list of candidate binaries to probe.
#[derive(Debug, Clone)]
pub struct InterpreterLocator {
    candidates: Vec<PathBuf>,
    runner: ProcessRunner,
}

impl Default for InterpreterLocator {
    fn default() -> Self {
        Self::new(php::DEFAULT_CANDIDATES.iter().map(PathBuf::from))
    }
}

impl InterpreterLocator {
    pub fn new(candidates: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            candidates: candidates.into_iter().collect(),
            runner: ProcessRunner::new(),
        }
    }

    /// Put `extra` ahead of the current candidates, keeping their order.
    pub fn with_preferred(mut self, extra: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut list: Vec<PathBuf> = extra.into_iter().collect();
        list.retain(|p| !p.as_os_str().is_empty());
        list.append(&mut self.candidates);
        self.candidates = list;
        self
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Probe candidates in order and return the first that exists and exits 0
    /// for `--version`. Scanning stops at the first success.
    pub async fn locate(&self) -> Option<InterpreterHandle> {
        for path in &self.candidates {
            if !path.exists() {
                debug!(path = %path.display(), "interpreter candidate missing");
                continue;
            }
            let probe = self.runner.run(path, &[php::VERSION_FLAG]).await;
            if probe.exit_code != 0 {
                debug!(
                    path = %path.display(),
                    exit_code = probe.exit_code,
                    "interpreter candidate rejected by probe"
                );
                continue;
            }
            let version = first_line(&probe.output).to_string();
            info!(path = %path.display(), version = %version, "interpreter located");
            return Some(InterpreterHandle::new(path.clone(), version));
        }
        warn!(candidates = self.candidates.len(), "no usable interpreter found");
        None
    }
}

fn first_line(output: &str) -> &str {
    output.lines().next().unwrap_or("")
}
