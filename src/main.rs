mod cli;
mod handlers;
mod logging;
mod printer;
mod tui;
mod utils;

use anyhow::Result;
use gobi::{config::Config, ScriptExecutionService};

use cli::Command;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let cfg = Config::load();

    let command = args.command.unwrap_or(Command::Edit { file: None });
    let target = match command {
        Command::Edit { .. } => logging::Target::File,
        _ => logging::Target::Stderr,
    };
    let log_guard = logging::init(&cfg, target);
    tracing::debug!(config = %cfg.config_path.display(), "configuration loaded");

    let locator = handlers::locator(&cfg, args.interpreter);

    match command {
        Command::Edit { file } => {
            let source = match file {
                Some(path) => utils::read_source(&path)?,
                None => cfg.default_source(),
            };
            tui::run_editor(locator, &source).await
        }
        Command::Run(run_args) => {
            let service = ScriptExecutionService::new(locator.locate().await);
            let code = handlers::run::run(&service, &run_args).await?;
            drop(log_guard);
            std::process::exit(code);
        }
        Command::Highlight { file, json } => handlers::highlight::run(&file, json),
        Command::Which => {
            let handle = locator.locate().await;
            let code = handlers::which::run(handle.as_ref(), locator.candidates());
            drop(log_guard);
            std::process::exit(code);
        }
    }
}
