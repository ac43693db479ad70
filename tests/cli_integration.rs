//! Drives the `premium` binary as a subprocess.

mod common;

use std::fs;

use common::{LOW_BODY, StubServer, run_cli, unreachable_endpoint};

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn help_lists_subcommands() {
    let output = run_cli(&["--help"]);
    assert!(output.status.success());
    let text = stdout(&output);
    for name in ["predict", "config", "completions"] {
        assert!(text.contains(name), "help is missing {name}");
    }
}

#[test]
fn blank_city_fails_without_contacting_the_service() {
    let endpoint = unreachable_endpoint();
    let output = run_cli(&["--endpoint", &endpoint, "predict", "--city", "   "]);
    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.contains("Please enter your city name."));
    assert!(!text.contains("Could not connect"));
    assert!(!stderr(&output).contains("Analyzing your profile"));
}

#[test]
fn predict_prints_rendered_prediction() {
    let server = StubServer::start(vec![(200, LOW_BODY.to_string())]);
    let output = run_cli(&[
        "--endpoint",
        &server.endpoint,
        "predict",
        "--city",
        "Delhi",
        "--occupation",
        "student",
    ]);
    let captured = server.finish();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(captured.len(), 1);
    assert!(captured[0].body.contains(r#""occupation":"student""#));

    let text = stdout(&output);
    assert!(text.contains("Predicted Premium Category: LOW"));
    assert!(text.contains("Confidence: 82%"));
    assert!(text.contains("low: 82.0%"));
    assert!(stderr(&output).contains("Analyzing your profile..."));
}

#[test]
fn predict_json_reports_outcome() {
    let server = StubServer::start(vec![(200, LOW_BODY.to_string())]);
    let output = run_cli(&[
        "--endpoint",
        &server.endpoint,
        "predict",
        "--city",
        "Delhi",
        "--json",
    ]);
    server.finish();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["outcome"], "prediction");
    assert_eq!(value["tier"], "low");
    assert_eq!(value["confidence"], "Confidence: 82%");
    assert_eq!(value["probabilities"][0]["label"], "low");
}

#[test]
fn predict_json_reports_http_error_and_exits_nonzero() {
    let server = StubServer::start(vec![(500, "internal error".to_string())]);
    let output = run_cli(&[
        "--endpoint",
        &server.endpoint,
        "predict",
        "--city",
        "Delhi",
        "--json",
    ]);
    server.finish();

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["outcome"], "error");
    assert_eq!(value["kind"], "http");
    assert_eq!(value["message"], "API Error: 500 - internal error");
}

#[test]
fn config_file_endpoint_is_used_and_flag_overrides_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("premium.toml");
    fs::write(
        &path,
        "[api]\nendpoint = \"http://10.0.0.9:9000/predict\"\ntimeout_secs = 5\n",
    )
    .unwrap();
    let path = path.to_string_lossy().into_owned();

    let output = run_cli(&["--config", &path, "config"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("http://10.0.0.9:9000/predict"));
    assert!(text.contains("timeout_secs = 5"));

    let output = run_cli(&[
        "--config",
        &path,
        "--endpoint",
        "http://127.0.0.1:8001/predict",
        "config",
    ]);
    assert!(stdout(&output).contains("http://127.0.0.1:8001/predict"));
}

#[test]
fn missing_config_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let output = run_cli(&["--config", &path.to_string_lossy(), "config"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("PP-1002"));
}

#[test]
fn completions_are_generated() {
    let output = run_cli(&["completions", "bash"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("premium"));
}
