//! `gobi run`: execute once and print the combined output.

use std::io;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;

use gobi::{ExecutionResult, ScriptExecutionService};

use crate::{cli::RunArgs, printer::ResultPrinter, utils::read_source};

/// Process exit status for a finished execution.
pub fn exit_status(result: &ExecutionResult) -> i32 {
    match result.exit_code {
        0 => 0,
        code @ 1..=255 => code,
        _ => 1,
    }
}

pub async fn run(service: &ScriptExecutionService, args: &RunArgs) -> Result<i32> {
    let source = match (&args.code, &args.file) {
        (Some(code), _) => code.clone(),
        (None, Some(path)) => read_source(path)?,
        (None, None) => anyhow::bail!("Provide a script file or --eval CODE"),
    };

    let result = service.execute(&source).await;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).context("serializing result")?
        );
    } else {
        ResultPrinter {
            color: io::stdout().is_terminal(),
        }
        .print(&result);
    }
    Ok(exit_status(&result))
}
