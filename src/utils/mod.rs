//! Utilities (script loading, UTF-8 helpers).

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};

pub mod unicode;

/// Read a script from `path`, or from stdin when `path` is `-`.
///
/// A leading `<?php` open tag is removed because `php -r` expects bare code.
pub fn read_source(path: &Path) -> Result<String> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read script from stdin")?;
        buf
    } else {
        if !path.exists() {
            bail!("Script file '{}' does not exist", path.display());
        }
        if !path.is_file() {
            bail!("'{}' is not a file", path.display());
        }
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read file '{}'", path.display()))?
    };
    Ok(strip_open_tag(&text).to_string())
}

/// Drop a leading `<?php` tag (and the whitespace after it).
pub fn strip_open_tag(source: &str) -> &str {
    let trimmed = source.trim_start();
    match trimmed.strip_prefix("<?php") {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => source,
    }
}
