//! Discover a local PHP interpreter, run snippets through it without blocking
//! the caller, and highlight PHP source for display.

pub mod config;
pub mod execution;
pub mod interpreter;
pub mod process;
pub mod syntax;

pub use execution::{ExecError, ExecutionResult, ScriptExecutionService};
pub use interpreter::{InterpreterHandle, InterpreterLocator};
pub use process::ProcessRunner;
pub use syntax::{highlight, HighlightSpan, TokenCategory};
