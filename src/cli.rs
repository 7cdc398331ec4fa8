use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "gobi", about = "Run PHP snippets against your local interpreter", version)]
pub struct Cli {
    /// Interpreter binary to try before the usual install locations.
    #[arg(long, global = true, value_name = "PATH")]
    pub interpreter: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Open the terminal editor (default).
    Edit {
        /// Script to load into the editor.
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Execute a script once and print its combined output.
    Run(RunArgs),
    /// Print a script with syntax colors.
    Highlight {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Print spans as JSON instead of colored text.
        #[arg(long)]
        json: bool,
    },
    /// Show which interpreter would be used.
    Which,
}

#[derive(Args, Debug, Clone)]
#[command(group(ArgGroup::new("source").args(["file", "code"]).required(true).multiple(false)))]
pub struct RunArgs {
    /// Script file, or `-` for stdin.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Inline code, passed as-is to `php -r`.
    #[arg(short = 'e', long = "eval", value_name = "CODE")]
    pub code: Option<String>,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
