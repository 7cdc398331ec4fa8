//! Command handlers for the one-shot subcommands.

use std::path::PathBuf;

use gobi::{config::Config, InterpreterLocator};

pub mod highlight;
pub mod run;
pub mod which;

/// Locator over the configured candidates, the `--interpreter` override
/// first, then `GOBI_INTERPRETER_PATHS`, then the built-in list.
pub fn locator(cfg: &Config, interpreter: Option<PathBuf>) -> InterpreterLocator {
    InterpreterLocator::default()
        .with_preferred(cfg.interpreter_paths())
        .with_preferred(interpreter)
}
