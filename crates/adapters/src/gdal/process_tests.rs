// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn sh(script: &str) -> ExecRequest {
    ExecRequest::new(vec!["-c".to_string(), script.to_string()])
}

#[tokio::test]
async fn captures_text() {
    let adapter = ProcessGdalAdapter::new("sh");
    let mut request = sh("echo hello");
    request.capture = Some(Capture::Text);

    let output = adapter.execute(request).await.unwrap();
    assert_eq!(output, ExecOutput::Text("hello\n".to_string()));
}

#[tokio::test]
async fn captures_raw_bytes() {
    let adapter = ProcessGdalAdapter::new("sh");
    let mut request = sh("printf 'a\\000b'");
    request.capture = Some(Capture::Raw);

    let output = adapter.execute(request).await.unwrap();
    assert_eq!(output.bytes(), Some(&b"a\0b"[..]));
}

#[tokio::test]
async fn pipes_stdin() {
    let adapter = ProcessGdalAdapter::new("cat");
    let request = ExecRequest {
        stdin: Some("{\"type\": \"FeatureCollection\"}".to_string()),
        capture: Some(Capture::Text),
        ..ExecRequest::default()
    };

    let output = adapter.execute(request).await.unwrap();
    assert_eq!(output.text(), Some("{\"type\": \"FeatureCollection\"}"));
}

#[tokio::test]
async fn passes_environment() {
    let adapter = ProcessGdalAdapter::new("sh");
    let mut request = sh("printf %s \"$CPL_DEBUG\"");
    request.env.insert("CPL_DEBUG".to_string(), "ON".to_string());
    request.capture = Some(Capture::Text);

    let output = adapter.execute(request).await.unwrap();
    assert_eq!(output.text(), Some("ON"));
}

#[tokio::test]
async fn uncaptured_success_is_completed() {
    let adapter = ProcessGdalAdapter::new("sh");
    let output = adapter.execute(sh("true")).await.unwrap();
    assert_eq!(output, ExecOutput::Completed);
}

#[tokio::test]
async fn nonzero_exit_reports_code_and_stderr() {
    let adapter = ProcessGdalAdapter::new("sh");
    let result = adapter.execute(sh("echo 'ERROR 4: no such file' >&2; exit 3")).await;

    match result {
        Err(AdapterError::Failed { code, stderr }) => {
            assert_eq!(code, Some(3));
            assert_eq!(stderr, "ERROR 4: no such file");
        }
        other => panic!("expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn missing_program_is_spawn_error() {
    let adapter = ProcessGdalAdapter::new("/nonexistent/bin/gdal");
    let result = adapter.execute(ExecRequest::new(vec!["--version".to_string()])).await;
    assert!(matches!(result, Err(AdapterError::Spawn { .. })));
}

#[test]
fn failed_error_message() {
    let err = AdapterError::Failed {
        code: Some(1),
        stderr: "boom".to_string(),
    };
    assert_eq!(err.to_string(), "command exited with status 1: boom");
}
