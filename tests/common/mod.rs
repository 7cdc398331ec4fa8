//! Fake interpreters: small shell scripts speaking the `--version` / `-r CODE` protocol.

#![allow(dead_code)]

use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
    thread,
    time::Duration,
};

use tempfile::TempDir;

pub const FAKE_VERSION: &str = "PHP 8.3.99 (cli) (fake)";

/// `-r CODE` evaluates CODE with the shell, so tests can script output and exit codes.
pub const FAKE_PHP: &str = r#"#!/bin/sh
case "$1" in
  --version)
    echo "PHP 8.3.99 (cli) (fake)"
    echo "Copyright (c) The PHP Group"
    ;;
  -r)
    eval "$2"
    ;;
  *)
    echo "unsupported flag: $1" >&2
    exit 64
    ;;
esac
"#;

pub struct Scratch {
    pub dir: TempDir,
}

impl Scratch {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write an executable script and wait until it can be exec'd.
    pub fn script(&self, name: &str, body: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, body).expect("write script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod script");
        wait_until_executable(&path);
        path
    }

    pub fn fake_php(&self, name: &str) -> PathBuf {
        self.script(name, FAKE_PHP)
    }
}

/// Another test thread may fork while our write fd is still open, which makes
/// exec fail with ETXTBSY for a short moment.
fn wait_until_executable(path: &Path) {
    for _ in 0..100 {
        match std::process::Command::new(path).arg("--version").output() {
            Err(e) if e.raw_os_error() == Some(26) => thread::sleep(Duration::from_millis(10)),
            _ => return,
        }
    }
}
