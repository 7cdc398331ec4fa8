#![cfg(unix)]

mod common;

use std::time::Duration;

use anyhow::Result;
use gobi::{
    execution::{Failure, NO_EXIT_CODE},
    InterpreterHandle, ProcessRunner, ScriptExecutionService,
};

use common::{Scratch, FAKE_VERSION};

fn service(scratch: &Scratch) -> ScriptExecutionService {
    let path = scratch.fake_php("php");
    ScriptExecutionService::new(Some(InterpreterHandle::new(path, FAKE_VERSION)))
}

#[tokio::test]
async fn test_execute_returns_exact_output() -> Result<()> {
    let scratch = Scratch::new();
    let r = service(&scratch).execute("printf 'Hello, World!'").await;
    assert_eq!(r.output, "Hello, World!");
    assert!(!r.is_error);
    assert_eq!(r.exit_code, 0);
    Ok(())
}

#[tokio::test]
async fn test_stderr_is_appended_after_stdout() -> Result<()> {
    let scratch = Scratch::new();
    let r = service(&scratch)
        .execute("echo warn >&2; echo out; echo more")
        .await;
    assert_eq!(r.output, "out\nmore\nwarn\n");
    assert!(!r.is_error, "stderr alone does not make an error");
    Ok(())
}

#[tokio::test]
async fn test_error_flag_follows_exit_code() -> Result<()> {
    let scratch = Scratch::new();
    let svc = service(&scratch);
    for code in [0, 1, 2, 3, 42, 255] {
        let r = svc.execute(&format!("exit {}", code)).await;
        assert_eq!(r.exit_code, code);
        assert_eq!(r.is_error, code != 0);
    }
    Ok(())
}

#[tokio::test]
async fn test_nonzero_exit_keeps_output() -> Result<()> {
    let scratch = Scratch::new();
    let r = service(&scratch).execute("echo partial; echo oops >&2; exit 3").await;
    assert_eq!(r.output, "partial\noops\n");
    assert!(r.is_error);
    assert_eq!(r.failure(), Some(Failure::NonZeroExit(3)));
    Ok(())
}

#[tokio::test]
async fn test_syntax_error_reports_diagnostic() -> Result<()> {
    let scratch = Scratch::new();
    let r = service(&scratch).execute("if then fi").await;
    assert!(r.is_error);
    assert_ne!(r.exit_code, 0);
    assert!(!r.output.trim().is_empty(), "expected a diagnostic");
    Ok(())
}

#[tokio::test]
async fn test_large_output_on_both_streams_does_not_deadlock() -> Result<()> {
    let scratch = Scratch::new();
    let code = "head -c 200000 /dev/zero | tr '\\000' x; head -c 150000 /dev/zero | tr '\\000' y >&2";
    let r = tokio::time::timeout(Duration::from_secs(60), service(&scratch).execute(code)).await?;
    assert_eq!(r.exit_code, 0);
    assert_eq!(r.output.len(), 350_000);
    assert!(r.output[..200_000].bytes().all(|b| b == b'x'));
    assert!(r.output[200_000..].bytes().all(|b| b == b'y'));
    Ok(())
}

#[tokio::test]
async fn test_killed_child_has_no_exit_code() -> Result<()> {
    let scratch = Scratch::new();
    let r = service(&scratch).execute("echo before; kill -9 $$").await;
    assert_eq!(r.exit_code, NO_EXIT_CODE);
    assert!(r.is_error);
    assert_eq!(r.output, "before\n");
    Ok(())
}

#[tokio::test]
async fn test_concurrent_executions_are_isolated() -> Result<()> {
    let scratch = Scratch::new();
    let svc = service(&scratch);
    let tasks: Vec<_> = (0..8)
        .map(|i| {
            let svc = svc.clone();
            tokio::spawn(async move { (i, svc.execute(&format!("printf {}; exit {}", i, i % 2)).await) })
        })
        .collect();
    for task in tasks {
        let (i, r) = task.await?;
        assert_eq!(r.output, i.to_string());
        assert_eq!(r.exit_code, i % 2);
    }
    Ok(())
}

#[tokio::test]
async fn test_source_reaches_interpreter_verbatim() -> Result<()> {
    let scratch = Scratch::new();
    let src = "printf '%s|' \"a b\" 'c\"d' '$e'\nprintf 'line2'";
    let r = service(&scratch).execute(src).await;
    assert_eq!(r.output, "a b|c\"d|$e|line2");
    Ok(())
}

#[tokio::test]
async fn test_missing_binary_is_spawn_failure() -> Result<()> {
    let scratch = Scratch::new();
    let handle = InterpreterHandle::new(scratch.path("not-there"), "PHP");
    let r = ScriptExecutionService::new(Some(handle)).execute("echo 1;").await;
    assert_eq!(r.exit_code, NO_EXIT_CODE);
    assert!(r.is_error);
    assert!(r.output.starts_with("Execution error:"), "got {:?}", r.output);
    assert_eq!(r.failure(), Some(Failure::NotRun));
    Ok(())
}

#[tokio::test]
async fn test_non_executable_file_is_spawn_failure() -> Result<()> {
    let scratch = Scratch::new();
    let path = scratch.path("php");
    std::fs::write(&path, common::FAKE_PHP)?;
    let r = ProcessRunner::new().run(&path, &["--version"]).await;
    assert_eq!(r.exit_code, NO_EXIT_CODE);
    assert!(r.is_error);
    Ok(())
}

#[tokio::test]
async fn test_unavailable_service_does_not_run_anything() -> Result<()> {
    let r = ScriptExecutionService::new(None).execute("echo 1;").await;
    assert_eq!(r.output, gobi::execution::UNAVAILABLE_MESSAGE);
    assert_eq!(r.exit_code, -1);
    assert!(r.is_error);
    Ok(())
}
