//! Integration tests for the `dotmon` CLI binary.
//!
//! Argument parsing, help output and completions run without any API;
//! the end-to-end cases point `--base-url` at a wiremock server.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `dotmon` binary with env isolation.
///
/// Clears every `DOTMON_*` variable and the UID fallback, and points
/// config directories at a nonexistent path so tests never touch the
/// user's real configuration.
fn dotmon_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("dotmon");
    cmd.env("HOME", "/tmp/dotmon-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/dotmon-cli-test-nonexistent")
        .env_remove("DOTMON_PROFILE")
        .env_remove("DOTMON_BASE_URL")
        .env_remove("DOTMON_OUTPUT")
        .env_remove("DOTMON_INSECURE")
        .env_remove("DOTMON_TIMEOUT")
        .env_remove("DOTCOM_MONITOR_UID")
        .env_remove("RUST_LOG");
    cmd
}

/// A `dotmon` command already pointed at `server` with a UID.
fn api_cmd(server: &MockServer) -> assert_cmd::Command {
    let mut cmd = dotmon_cmd();
    cmd.args(["--base-url", &server.uri(), "--uid", "test-uid"]);
    cmd
}

/// Run a command off the async runtime so the mock server keeps serving.
async fn run(mut cmd: assert_cmd::Command) -> std::process::Output {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

async fn api_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", ".ASPXFORMSAUTH=abc; path=/")
                .set_body_json(json!({ "Success": true })),
        )
        .mount(&server)
        .await;
    server
}

async fn mount_get(server: &MockServer, route: &str, status: u16, body: Option<Value>) {
    let mut response = ResponseTemplate::new(status);
    if let Some(body) = body {
        response = response.set_body_json(body);
    }
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(server)
        .await;
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = dotmon_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    dotmon_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("tasks")
            .and(predicate::str::contains("devices"))
            .and(predicate::str::contains("groups"))
            .and(predicate::str::contains("schedulers"))
            .and(predicate::str::contains("filters"))
            .and(predicate::str::contains("locations")),
    );
}

#[test]
fn test_version_flag() {
    dotmon_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dotmon"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    dotmon_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    dotmon_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_output_format() {
    let output = dotmon_cmd()
        .args(["--output", "invalid", "tasks", "get", "1"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("possible values"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_missing_uid_is_an_auth_error() {
    dotmon_cmd()
        .args(["--base-url", "http://127.0.0.1:9", "tasks", "get", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("UID"));
}

#[test]
fn test_unknown_profile_is_a_usage_error() {
    dotmon_cmd()
        .args(["--profile", "nowhere", "--uid", "x", "devices", "get", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nowhere"));
}

#[test]
fn test_config_show_no_config() {
    dotmon_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[defaults]"));
}

#[test]
fn test_lookup_requires_id_or_name() {
    dotmon_cmd()
        .args(["schedulers", "find"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--id").or(predicate::str::contains("--name")));
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_resource_subcommands_exist() {
    dotmon_cmd()
        .args(["tasks", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("get")
                .and(predicate::str::contains("exists"))
                .and(predicate::str::contains("create"))
                .and(predicate::str::contains("update"))
                .and(predicate::str::contains("delete"))
                .and(predicate::str::contains("find")),
        );
}

#[test]
fn test_config_subcommands_exist() {
    dotmon_cmd()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("init")
                .and(predicate::str::contains("show"))
                .and(predicate::str::contains("set-uid")),
        );
}

// ── Against a mock API ──────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_get_task_as_json() {
    let server = api_server().await;
    mount_get(
        &server,
        "/task/55",
        200,
        Some(json!({
            "Id": 55,
            "Name": "home",
            "Url": "https://example.com",
            "RequestType": "GET",
            "Device_Id": 7,
            "Task_Type_Id": 2,
            "Timeout": 120_000
        })),
    )
    .await;

    let mut cmd = api_cmd(&server);
    cmd.args(["--output", "json", "tasks", "get", "55"]);
    let output = run(cmd).await;
    assert!(output.status.success(), "{}", combined_output(&output));

    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["id"], 55);
    assert_eq!(value["device_id"], 7);
    assert_eq!(value["timeout"], 120);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_missing_task_exits_not_found() {
    let server = api_server().await;
    mount_get(&server, "/task/56", 200, None).await;

    let mut cmd = api_cmd(&server);
    cmd.args(["tasks", "get", "56"]);
    let output = run(cmd).await;
    assert_eq!(output.status.code(), Some(4), "{}", combined_output(&output));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_exists_plain_output() {
    let server = api_server().await;
    mount_get(&server, "/device/9", 200, Some(json!({ "Id": 9, "Name": "web" }))).await;
    mount_get(&server, "/device/10", 200, Some(json!({ "Id": 10 }))).await;

    let mut cmd = api_cmd(&server);
    cmd.args(["-o", "plain", "devices", "exists", "9"]);
    let output = run(cmd).await;
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "true");

    let mut cmd = api_cmd(&server);
    cmd.args(["-o", "plain", "devices", "exists", "10"]);
    let output = run(cmd).await;
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "false");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_group_file_sends_nothing() {
    let server = api_server().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let spec = dir.path().join("group.json");
    std::fs::write(&spec, r#"{ "name": "" }"#).unwrap();

    let mut cmd = api_cmd(&server);
    cmd.args(["groups", "create", "--from-file"]).arg(&spec);
    let output = run(cmd).await;
    assert_eq!(output.status.code(), Some(2), "{}", combined_output(&output));
    assert!(combined_output(&output).contains("notification group"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_with_yes_reports_outcome() {
    let server = api_server().await;
    mount_get(&server, "/filter/2", 200, Some(json!({ "Id": 2, "Name": "quiet" }))).await;
    Mock::given(method("DELETE"))
        .and(path("/filter/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = api_cmd(&server);
    cmd.args(["-y", "filters", "delete", "2"]);
    let output = run(cmd).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Deleted filter 2"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_locations_select_plain_ids() {
    let server = api_server().await;
    mount_get(
        &server,
        "/locations/1",
        200,
        Some(json!([
            { "Id": 1, "Name": "Dallas", "Available": true, "IsDeleted": false, "IsPrivate": false },
            { "Id": 11, "Name": "Hong Kong", "Available": true, "IsDeleted": false, "IsPrivate": false },
            { "Id": 23, "Name": "London", "Available": true, "IsDeleted": false, "IsPrivate": false }
        ])),
    )
    .await;

    let mut cmd = api_cmd(&server);
    cmd.args([
        "-o",
        "plain",
        "locations",
        "select",
        "--scope",
        "public",
        "--exclude-restrictive",
    ]);
    let output = run(cmd).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "1\n23");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_login_exits_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Success": false,
            "ErrorDescription": ["Invalid UID"]
        })))
        .mount(&server)
        .await;

    let output = run({
        let mut cmd = api_cmd(&server);
        cmd.args(["platforms", "list"]);
        cmd
    })
    .await;
    assert_eq!(output.status.code(), Some(3), "{}", combined_output(&output));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_session_lost_mid_command_names_profile() {
    let server = api_server().await;
    Mock::given(method("GET"))
        .and(path("/platforms"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let mut cmd = api_cmd(&server);
    cmd.args(["platforms", "list"]);
    let output = run(cmd).await;
    assert_eq!(output.status.code(), Some(3), "{}", combined_output(&output));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--profile default"), "{stderr}");
    assert!(!stderr.contains("--profile current"), "{stderr}");
}
