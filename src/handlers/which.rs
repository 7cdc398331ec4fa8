//! `gobi which`: report the discovered interpreter.

use owo_colors::OwoColorize;

use gobi::interpreter::{php, InterpreterHandle};

pub fn run(handle: Option<&InterpreterHandle>, searched: &[std::path::PathBuf]) -> i32 {
    match handle {
        Some(h) => {
            println!("{}", h.path().display());
            println!("{}", h.version());
            0
        }
        None => {
            println!("{}", "PHP is not installed".yellow());
            println!();
            println!("Install with Homebrew:  {}", php::INSTALL_COMMAND.bold());
            println!("Or download from:       {}", php::DOWNLOAD_URL);
            println!();
            println!("Searched:");
            for p in searched {
                println!("  {}", p.display());
            }
            1
        }
    }
}
