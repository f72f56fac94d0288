//! Binary-level tests for the one-shot CLI.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::logger::TestLogger;

/// Build a `qfetch` command with a hermetic environment: no config file,
/// no credential, and provider endpoints controlled by the test.
fn qfetch() -> Command {
    let mut cmd = Command::cargo_bin("qfetch").expect("binary builds");
    cmd.env("QFETCH_CONFIG", "/nonexistent/qfetch-config.toml")
        .env_remove("QFETCH_API_KEY")
        .env_remove("QFETCH_PRIMARY_URL")
        .env_remove("QFETCH_SECONDARY_URL");
    cmd
}

#[test]
fn help_lists_commands() {
    qfetch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("fetch"))
        .stdout(predicate::str::contains("tui"));
}

#[test]
fn unknown_flag_fails() {
    qfetch().arg("--bogus").assert().failure();
}

#[tokio::test]
async fn fetch_prints_quote_as_json() {
    let log = TestLogger::new("fetch_prints_quote_as_json");
    log.phase("setup");

    let secondary = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/random"))
        .and(query_param("tags", "wisdom"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": "Know thyself.",
            "author": "Socrates",
            "tags": ["wisdom"]
        })))
        .mount(&secondary)
        .await;
    let secondary_url = format!("{}/random", secondary.uri());

    log.phase("execute");
    let output = tokio::task::spawn_blocking(move || {
        qfetch()
            .env("QFETCH_SECONDARY_URL", &secondary_url)
            .args(["fetch", "--tag", "wisdom", "--json"])
            .output()
            .expect("binary runs")
    })
    .await
    .unwrap();

    log.phase("verify");
    assert!(output.status.success(), "stderr: {:?}", output.stderr);
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(payload["quote"]["content"], "Know thyself.");
    assert_eq!(payload["quote"]["author"], "Socrates");
    assert_eq!(payload["quote"]["tagsText"], "wisdom");
    assert_eq!(payload["provider"], "quotable");
    log.finish_ok();
}

#[tokio::test]
async fn fetch_human_output_has_three_regions() {
    let log = TestLogger::new("fetch_human_output_has_three_regions");
    log.phase("setup");

    let secondary = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": "Festina lente.",
            "author": "Augustus",
            "tags": ["patience"]
        })))
        .mount(&secondary)
        .await;
    let secondary_url = format!("{}/random", secondary.uri());

    log.phase("execute");
    let assert = tokio::task::spawn_blocking(move || {
        qfetch()
            .env("QFETCH_SECONDARY_URL", &secondary_url)
            .args(["fetch", "--no-color"])
            .assert()
    })
    .await
    .unwrap();

    log.phase("verify");
    assert
        .success()
        .stdout(predicate::str::contains("Festina lente."))
        .stdout(predicate::str::contains("— Augustus"))
        .stdout(predicate::str::contains("tags: patience"));
    log.finish_ok();
}

#[test]
fn fetch_failure_prints_fixed_message_and_exits_nonzero() {
    // Nothing listens on this port; both-providers-failed path.
    qfetch()
        .env("QFETCH_SECONDARY_URL", "http://127.0.0.1:1/random")
        .args(["fetch", "--no-color"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "Oops! Couldn't fetch a quote right now.",
        ));
}

#[test]
fn fetch_failure_preserves_requested_tag() {
    qfetch()
        .env("QFETCH_SECONDARY_URL", "http://127.0.0.1:1/random")
        .args(["fetch", "--tag", "wisdom", "--no-color"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("tags: wisdom"));
}

#[test]
fn malformed_config_file_is_a_parse_error() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut tmp, b"api_key = [broken").unwrap();

    let mut cmd = Command::cargo_bin("qfetch").expect("binary builds");
    cmd.env("QFETCH_CONFIG", tmp.path())
        .env_remove("QFETCH_API_KEY")
        .env_remove("QFETCH_PRIMARY_URL")
        .env_remove("QFETCH_SECONDARY_URL")
        .arg("fetch")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("config parse error"));
}
