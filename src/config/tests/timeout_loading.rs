//! Tests for `timeout_secs` loading and precedence.

use std::time::Duration;

use ortho_config::OrthoConfig;
use rstest::rstest;

use crate::DocketConfig;

/// Helper to test `timeout_secs` loading from environment and/or CLI.
fn test_timeout_loading(
    env_timeout: Option<&str>,
    cli_args: &[&str],
    expected_secs: u64,
    description: &str,
) {
    let temp_dir = tempfile::TempDir::new().expect("temp dir should be created");
    let home = temp_dir.path().to_string_lossy().to_string();

    let _guard = env_lock::lock_env([
        ("DOCKET_TIMEOUT_SECS", env_timeout),
        ("HOME", Some(home.as_str())),
        ("XDG_CONFIG_HOME", Some(home.as_str())),
    ]);

    let mut args: Vec<std::ffi::OsString> = vec![std::ffi::OsString::from("docket")];
    args.extend(cli_args.iter().map(std::ffi::OsString::from));

    let config = DocketConfig::load_from_iter(args).expect("config should load");

    assert_eq!(config.timeout_secs, expected_secs, "{description}");
    assert_eq!(config.timeout(), Duration::from_secs(expected_secs));
}

#[rstest]
fn timeout_loads_from_environment_variable() {
    test_timeout_loading(
        Some("5"),
        &[],
        5,
        "expected DOCKET_TIMEOUT_SECS to set the timeout",
    );
}

#[rstest]
fn timeout_loads_from_cli_flag() {
    test_timeout_loading(
        None,
        &["--timeout-secs", "12"],
        12,
        "expected --timeout-secs to set the timeout",
    );
}

#[rstest]
fn timeout_cli_overrides_environment() {
    test_timeout_loading(
        Some("5"),
        &["--timeout-secs", "12"],
        12,
        "CLI should override environment for timeout_secs",
    );
}
