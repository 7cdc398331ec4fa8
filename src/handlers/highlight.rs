//! `gobi highlight`: print a script with syntax colors.

use std::io;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;

use crate::printer::SourcePrinter;

pub fn run(file: &std::path::Path, json: bool) -> Result<()> {
    let source = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read file '{}'", file.display()))?;
    if json {
        let spans = gobi::highlight(&source);
        println!(
            "{}",
            serde_json::to_string_pretty(&spans).context("serializing spans")?
        );
        return Ok(());
    }
    SourcePrinter {
        color: io::stdout().is_terminal(),
    }
    .print(&source);
    Ok(())
}
