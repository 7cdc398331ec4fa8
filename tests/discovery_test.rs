#![cfg(unix)]

mod common;

use std::path::PathBuf;

use anyhow::Result;
use gobi::{InterpreterLocator, ScriptExecutionService};

use common::{Scratch, FAKE_VERSION};

#[tokio::test]
async fn test_no_candidate_exists() -> Result<()> {
    let scratch = Scratch::new();
    let locator = InterpreterLocator::new([scratch.path("a/php"), scratch.path("b/php")]);
    let handle = locator.locate().await;
    assert!(handle.is_none());

    let r = ScriptExecutionService::new(handle).execute("echo 1;").await;
    assert!(r.is_error);
    assert_eq!(r.exit_code, -1);
    assert_eq!(r.output, gobi::execution::UNAVAILABLE_MESSAGE);
    Ok(())
}

#[tokio::test]
async fn test_first_working_candidate_wins() -> Result<()> {
    let scratch = Scratch::new();
    let broken = scratch.script("broken", "#!/bin/sh\necho 'cannot start' >&2\nexit 1\n");
    let first = scratch.fake_php("php-first");
    let second = scratch.fake_php("php-second");

    let locator = InterpreterLocator::new([
        scratch.path("missing"),
        broken,
        first.clone(),
        second,
    ]);
    let handle = locator.locate().await.expect("an interpreter");
    assert_eq!(handle.path(), first.as_path());
    assert_eq!(handle.version(), FAKE_VERSION);
    Ok(())
}

#[tokio::test]
async fn test_scan_stops_at_first_success() -> Result<()> {
    let scratch = Scratch::new();
    let winner = scratch.fake_php("php");
    let marker = scratch.path("probed");
    let later = scratch.script(
        "later",
        &format!("#!/bin/sh\ntouch '{}'\necho 'PHP 0'\n", marker.display()),
    );
    // The fixture already ran `later` once while waiting for it to be executable.
    std::fs::remove_file(&marker).ok();

    let locator = InterpreterLocator::new([winner.clone(), later]);
    let handle = locator.locate().await.expect("an interpreter");
    assert_eq!(handle.path(), winner.as_path());
    assert!(!marker.exists(), "candidate after the winner was probed");
    Ok(())
}

#[tokio::test]
async fn test_silent_probe_gives_empty_version() -> Result<()> {
    let scratch = Scratch::new();
    let quiet = scratch.script("quiet", "#!/bin/sh\nexit 0\n");
    let handle = InterpreterLocator::new([quiet]).locate().await.expect("an interpreter");
    assert_eq!(handle.version(), "");
    Ok(())
}

#[tokio::test]
async fn test_directory_candidate_is_skipped() -> Result<()> {
    let scratch = Scratch::new();
    let dir = scratch.path("bin");
    std::fs::create_dir(&dir)?;
    let php = scratch.fake_php("php");
    let handle = InterpreterLocator::new([dir, php.clone()]).locate().await;
    assert_eq!(handle.map(|h| h.path().to_path_buf()), Some(php));
    Ok(())
}

#[tokio::test]
async fn test_preferred_candidates_are_probed_first() -> Result<()> {
    let scratch = Scratch::new();
    let builtin = scratch.fake_php("php-builtin");
    let preferred = scratch.script("php-preferred", "#!/bin/sh\necho 'PHP 9.0.0 (cli)'\n");
    let locator = InterpreterLocator::new([builtin]).with_preferred([PathBuf::new(), preferred.clone()]);
    let handle = locator.locate().await.expect("an interpreter");
    assert_eq!(handle.path(), preferred.as_path());
    assert_eq!(handle.version(), "PHP 9.0.0 (cli)");
    Ok(())
}
