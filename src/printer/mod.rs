//! Terminal printers for execution results and highlighted source.

use std::io::{self, Write};

use owo_colors::OwoColorize;

use gobi::{highlight, ExecutionResult, TokenCategory};

pub struct ResultPrinter {
    pub color: bool,
}

impl ResultPrinter {
    pub fn print(&self, result: &ExecutionResult) {
        let mut out = io::stdout().lock();
        let text = &result.output;
        let _ = if self.color && result.is_error {
            write!(out, "{}", text.red())
        } else {
            write!(out, "{}", text)
        };
        if !text.is_empty() && !text.ends_with('\n') {
            let _ = writeln!(out);
        }
        let _ = out.flush();
    }
}

pub struct SourcePrinter {
    pub color: bool,
}

impl SourcePrinter {
    pub fn print(&self, source: &str) {
        let mut out = io::stdout().lock();
        let _ = out.write_all(self.render(source).as_bytes());
        let _ = out.flush();
    }

    pub fn render(&self, source: &str) -> String {
        if !self.color {
            return source.to_string();
        }
        let mut rendered = String::with_capacity(source.len() * 2);
        for span in highlight(source) {
            let text = span.text(source);
            let painted = match span.category {
                TokenCategory::Keyword => text.magenta().to_string(),
                TokenCategory::Constant => text.bright_magenta().to_string(),
                TokenCategory::StringLiteral => text.green().to_string(),
                TokenCategory::Comment => text.bright_black().to_string(),
                TokenCategory::Number => text.yellow().to_string(),
                TokenCategory::Variable => text.cyan().to_string(),
                TokenCategory::PlainText => text.to_string(),
            };
            rendered.push_str(&painted);
        }
        rendered
    }
}
