//! TUI application state management.

use std::path::PathBuf;

use gobi::{ExecutionResult, InterpreterHandle, ScriptExecutionService};

use crate::utils::unicode::char_to_byte_index;

const TAB: &str = "    ";

/// Interpreter discovery progress.
#[derive(Debug, Clone, PartialEq)]
pub enum Discovery {
    Pending,
    Unavailable,
    Ready,
}

/// Multi-line text buffer with a byte-offset cursor.
#[derive(Debug, Clone)]
pub struct Editor {
    lines: Vec<String>,
    /// Cursor line
    pub row: usize,
    /// Cursor byte offset within the line, always on a char boundary
    pub col: usize,
}

impl Editor {
    pub fn new(text: &str) -> Self {
        let mut lines: Vec<String> = text.split('\n').map(|l| l.replace('\r', "")).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        let row = lines.len() - 1;
        let col = lines[row].len();
        Self { lines, row, col }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn current_line(&self) -> &str {
        &self.lines[self.row]
    }

    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }

    pub fn insert_char(&mut self, c: char) {
        match c {
            '\n' => self.insert_newline(),
            '\r' => {}
            '\t' => {
                self.lines[self.row].insert_str(self.col, TAB);
                self.col += TAB.len();
            }
            c => {
                self.lines[self.row].insert(self.col, c);
                self.col += c.len_utf8();
            }
        }
    }

    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars() {
            self.insert_char(c);
        }
    }

    pub fn insert_newline(&mut self) {
        let rest = self.lines[self.row].split_off(self.col);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    pub fn backspace(&mut self) {
        if self.col > 0 {
            let prev = self.current_line()[..self.col]
                .chars()
                .next_back()
                .map(char::len_utf8)
                .unwrap_or(1);
            self.col -= prev;
            self.lines[self.row].remove(self.col);
        } else if self.row > 0 {
            let line = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.lines[self.row].len();
            self.lines[self.row].push_str(&line);
        }
    }

    pub fn delete(&mut self) {
        if self.col < self.current_line().len() {
            self.lines[self.row].remove(self.col);
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        }
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            let prev = self.current_line()[..self.col]
                .chars()
                .next_back()
                .map(char::len_utf8)
                .unwrap_or(1);
            self.col -= prev;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.current_line().len();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.current_line()[self.col..].chars().next() {
            self.col += c.len_utf8();
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            let chars = self.current_line()[..self.col].chars().count();
            self.row -= 1;
            self.col = char_to_byte_index(self.current_line(), chars);
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            let chars = self.current_line()[..self.col].chars().count();
            self.row += 1;
            self.col = char_to_byte_index(self.current_line(), chars);
        }
    }

    pub fn move_home(&mut self) {
        self.col = 0;
    }

    pub fn move_end(&mut self) {
        self.col = self.current_line().len();
    }
}

/// Application state for the TUI
#[derive(Debug)]
pub struct App {
    pub discovery: Discovery,
    /// Built once discovery finishes; never replaced afterwards
    pub service: Option<ScriptExecutionService>,
    /// Candidates searched, shown on the "not installed" screen
    pub searched: Vec<PathBuf>,
    pub editor: Editor,
    /// Last execution result, `None` before the first run
    pub result: Option<ExecutionResult>,
    pub is_executing: bool,
    pub status_message: String,
    pub show_help: bool,
    pub result_scroll: u16,
    /// Animation frame for the busy indicator
    pub tick: usize,
}

impl App {
    pub fn new(source: &str, searched: Vec<PathBuf>) -> Self {
        Self {
            discovery: Discovery::Pending,
            service: None,
            searched,
            editor: Editor::new(source),
            result: None,
            is_executing: false,
            status_message: "Looking for PHP...".to_string(),
            show_help: false,
            result_scroll: 0,
            tick: 0,
        }
    }

    /// Record the discovery outcome. Later calls are ignored.
    pub fn finish_discovery(&mut self, handle: Option<InterpreterHandle>) {
        if self.discovery != Discovery::Pending {
            return;
        }
        self.discovery = if handle.is_some() {
            Discovery::Ready
        } else {
            Discovery::Unavailable
        };
        self.service = Some(ScriptExecutionService::new(handle));
        self.update_status_message();
    }

    pub fn version(&self) -> Option<&str> {
        self.service
            .as_ref()
            .and_then(|s| s.handle())
            .map(|h| h.version())
    }

    /// Check whether an execution may start now and mark it started.
    /// Returns the service and source to run, or `None` with the status
    /// message explaining why not.
    pub fn begin_execution(&mut self) -> Option<(ScriptExecutionService, String)> {
        if self.is_executing {
            self.status_message = "Already running, wait for the current script to finish".into();
            return None;
        }
        let Some(service) = self.service.clone().filter(|_| self.discovery == Discovery::Ready) else {
            self.status_message = "PHP is not available yet".into();
            return None;
        };
        if self.editor.is_blank() {
            self.status_message = "Nothing to execute".into();
            return None;
        }
        self.is_executing = true;
        self.result = None;
        self.result_scroll = 0;
        self.status_message = "Executing...".into();
        Some((service, self.editor.text()))
    }

    pub fn finish_execution(&mut self, result: ExecutionResult) {
        self.is_executing = false;
        self.result = Some(result);
        self.update_status_message();
    }

    pub fn clear_result(&mut self) {
        if !self.is_executing {
            self.result = None;
            self.result_scroll = 0;
        }
    }

    /// Toggle help display
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn scroll_result_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn scroll_result_down(&mut self) {
        self.result_scroll = self.result_scroll.saturating_add(1);
    }

    fn update_status_message(&mut self) {
        self.status_message = match (&self.discovery, &self.result) {
            (Discovery::Pending, _) => "Looking for PHP...".into(),
            (Discovery::Unavailable, _) => "PHP is not installed | q quit".into(),
            (Discovery::Ready, Some(r)) if r.is_error => {
                format!("Exit code {} | ctrl+r execute | F1 help", r.exit_code)
            }
            (Discovery::Ready, _) => "ctrl+r execute | F1 help | ctrl+c quit".into(),
        };
    }
}
