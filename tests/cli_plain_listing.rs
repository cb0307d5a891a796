//! CLI integration tests for plain listing mode.
//!
//! These tests spawn the Docket binary as a subprocess against a Wiremock
//! server to verify the printed listing and process exit behaviour.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use docket::api::models::test_support::two_requests_json;
use rstest::{fixture, rstest};
use serde_json::json;
use tempfile::TempDir;
use tokio::runtime::{Builder, Runtime};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Returns the path to the built binary.
fn binary_path() -> PathBuf {
    // cargo test builds binaries in target/debug
    let mut binary = std::env::current_exe()
        .unwrap_or_else(|error| panic!("failed to get current exe path: {error}"));
    binary.pop(); // remove test binary name
    binary.pop(); // remove deps
    binary.push("docket");
    binary
}

fn run_docket_in_dir(args: &[&str], working_dir: &Path) -> Output {
    let mut command = Command::new(binary_path());
    command.args(args);
    command.current_dir(working_dir);

    // Keep the run hermetic even if the developer has Docket settings.
    command
        .env("HOME", working_dir)
        .env("XDG_CONFIG_HOME", working_dir)
        .env_remove("DOCKET_API_URL")
        .env_remove("DOCKET_TOKEN")
        .env_remove("DOCKET_USERNAME")
        .env_remove("DOCKET_PASSWORD")
        .env_remove("DOCKET_CATALOG")
        .env_remove("DOCKET_FILTERS")
        .env_remove("DOCKET_SORT")
        .env_remove("MIQ_TOKEN");

    command
        .output()
        .unwrap_or_else(|error| panic!("failed to execute binary: {error}"))
}

/// Mock API running on its own multi-threaded runtime so the blocking
/// subprocess call does not starve it.
struct MockApi {
    runtime: Runtime,
    server: MockServer,
    working_dir: TempDir,
}

impl MockApi {
    fn respond_with(&self, response: ResponseTemplate) {
        self.runtime.block_on(
            Mock::given(method("GET"))
                .and(path("/api/requests"))
                .and(header("X-Auth-Token", "cli-token"))
                .respond_with(response)
                .mount(&self.server),
        );
    }

    fn run(&self, extra_args: &[&str]) -> Output {
        let uri = self.server.uri();
        let mut args = vec!["--plain", "--api-url", uri.as_str(), "--token", "cli-token"];
        args.extend_from_slice(extra_args);
        run_docket_in_dir(&args, self.working_dir.path())
    }
}

#[fixture]
fn mock_api() -> MockApi {
    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}"));
    let server = runtime.block_on(MockServer::start());
    let working_dir =
        TempDir::new().unwrap_or_else(|error| panic!("failed to create temp dir: {error}"));
    MockApi {
        runtime,
        server,
        working_dir,
    }
}

fn two_requests_response() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "name": "requests",
        "count": 2,
        "subcount": 2,
        "resources": two_requests_json()
    }))
}

#[rstest]
fn plain_listing_prints_requests_in_configured_order(mock_api: MockApi) {
    mock_api.respond_with(two_requests_response());

    let output = mock_api.run(&["--sort", "id"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "listing should succeed: {stdout}");
    let first = stdout.find("#1 [Pending] A (Al,");
    let second = stdout.find("#2 [Approved] B (Bob,");
    assert!(
        matches!((first, second), (Some(a), Some(b)) if a < b),
        "rows should be sorted by id ascending: {stdout}"
    );
    assert!(
        stdout.contains("Sort: Request ID \u{2191} (2 Results)"),
        "missing sort summary: {stdout}"
    );
}

#[rstest]
fn plain_listing_applies_configured_filters(mock_api: MockApi) {
    mock_api.respond_with(two_requests_response());

    let output = mock_api.run(&["--filters", "approval_state=Approved"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "listing should succeed: {stdout}");
    assert!(stdout.contains("#2 [Approved] B"), "missing row: {stdout}");
    assert!(!stdout.contains("#1 "), "filtered row leaked: {stdout}");
    assert!(
        stdout.contains("Filters: Request Status: Approved"),
        "missing filter summary: {stdout}"
    );
}

#[rstest]
fn plain_listing_fails_when_the_api_errors(mock_api: MockApi) {
    mock_api.respond_with(ResponseTemplate::new(500).set_body_string("boom"));

    let output = mock_api.run(&[]);

    assert!(!output.status.success(), "a failed load should fail the run");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("There was an error loading the requests."),
        "stderr should carry the notification: {stderr}"
    );
    assert!(output.stdout.is_empty(), "nothing should be listed");
}

#[rstest]
#[case::missing_url(&["--plain", "--token", "cli-token"], "API URL is required")]
#[case::unknown_sort(
    &["--plain", "--api-url", "https://miq.example.com", "--token", "t", "--sort", "colour"],
    "unknown sort field"
)]
fn invalid_configuration_exits_with_error(#[case] args: &[&str], #[case] expected: &str) {
    let working_dir =
        TempDir::new().unwrap_or_else(|error| panic!("failed to create temp dir: {error}"));

    let output = run_docket_in_dir(args, working_dir.path());

    assert!(!output.status.success(), "invalid configuration should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(expected), "expected `{expected}` in: {stderr}");
}
