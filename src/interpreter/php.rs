//! PHP command-line interpreter: install locations and invocation flags.

/// Flag used to probe a candidate binary.
pub const VERSION_FLAG: &str = "--version";

/// Flag that makes `php` execute the next argument as source code.
pub const RUN_CODE_FLAG: &str = "-r";

/// Common install locations, most specific package managers first and newer
/// pinned versions before older ones.
pub const DEFAULT_CANDIDATES: &[&str] = &[
    "/opt/homebrew/bin/php",                       // Homebrew, Apple Silicon
    "/opt/homebrew/opt/php/bin/php",               // Homebrew php (latest)
    "/opt/homebrew/opt/php@8.4/bin/php",
    "/opt/homebrew/opt/php@8.3/bin/php",
    "/opt/homebrew/opt/php@8.2/bin/php",
    "/opt/homebrew/opt/php@8.1/bin/php",
    "/usr/local/bin/php",                          // Homebrew, Intel
    "/usr/local/opt/php/bin/php",
    "/usr/bin/php",                                // system package
    "/Applications/MAMP/bin/php/php8.2.0/bin/php", // MAMP
    "/Applications/XAMPP/bin/php",                 // XAMPP
];

/// Shell command suggested when no interpreter is found.
pub const INSTALL_COMMAND: &str = "brew install php";

pub const DOWNLOAD_URL: &str = "https://www.php.net/downloads";
