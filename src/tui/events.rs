//! Custom event types for the TUI application.

use crossterm::event::KeyEvent;
use gobi::{ExecutionResult, InterpreterHandle};

/// Everything the UI loop reacts to. Background tasks only talk to the loop
/// through these.
#[derive(Debug)]
pub enum TuiEvent {
    /// User keyboard input
    Key(KeyEvent),
    /// Bracketed paste content
    Paste(String),
    /// Input poll timed out; used to animate the busy indicator
    Tick,
    /// Interpreter discovery finished
    Discovered(Option<InterpreterHandle>),
    /// Script execution finished
    Executed(ExecutionResult),
}
