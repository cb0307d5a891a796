//! Tests for field resolution methods (`require_api_url`,
//! `resolve_credentials`, `applied_filters`, `sort_state`).

use rstest::rstest;

use crate::DocketConfig;
use crate::api::{ApiCredentials, ApiError};
use crate::explorer::{AppliedFilter, FilterField, SortField, SortState};

#[rstest]
fn require_api_url_parses_configured_url() {
    let config = DocketConfig {
        api_url: Some("https://miq.example.com".to_owned()),
        ..Default::default()
    };

    let endpoint = config.require_api_url().expect("URL should parse");
    assert_eq!(endpoint.as_url().host_str(), Some("miq.example.com"));
}

#[rstest]
#[case::missing(None, ApiError::MissingApiUrl)]
#[case::unsupported_scheme(
    Some("ftp://miq.example.com"),
    ApiError::InvalidUrl("ftp://miq.example.com".to_owned())
)]
fn require_api_url_rejects_bad_values(#[case] raw: Option<&str>, #[case] expected: ApiError) {
    let config = DocketConfig {
        api_url: raw.map(str::to_owned),
        ..Default::default()
    };

    let result = config.require_api_url();
    assert_eq!(
        std::mem::discriminant(&result.expect_err("should fail")),
        std::mem::discriminant(&expected)
    );
}

#[rstest]
fn resolve_credentials_prefers_token() {
    let config = DocketConfig {
        token: Some("my-token".to_owned()),
        username: Some("admin".to_owned()),
        password: Some("smartvm".to_owned()),
        ..Default::default()
    };

    let credentials = config.resolve_credentials().expect("token should resolve");
    assert!(matches!(credentials, ApiCredentials::Token(token) if token == "my-token"));
}

#[rstest]
fn resolve_credentials_falls_back_to_legacy_token() {
    let _guard = env_lock::lock_env([("MIQ_TOKEN", Some("legacy-token"))]);
    let config = DocketConfig::default();

    let credentials = config.resolve_credentials().expect("legacy token should resolve");
    assert!(matches!(credentials, ApiCredentials::Token(token) if token == "legacy-token"));
}

#[rstest]
fn resolve_credentials_uses_basic_auth_without_token() {
    let _guard = env_lock::lock_env([("MIQ_TOKEN", None::<&str>)]);
    let config = DocketConfig {
        username: Some("admin".to_owned()),
        password: Some("smartvm".to_owned()),
        ..Default::default()
    };

    let credentials = config.resolve_credentials().expect("basic auth should resolve");
    assert!(matches!(
        credentials,
        ApiCredentials::Basic { username, password } if username == "admin" && password == "smartvm"
    ));
}

#[rstest]
fn resolve_credentials_returns_error_when_none() {
    let _guard = env_lock::lock_env([("MIQ_TOKEN", None::<&str>)]);
    let config = DocketConfig {
        username: Some("admin".to_owned()),
        ..Default::default()
    };

    assert_eq!(
        config.resolve_credentials(),
        Err(ApiError::MissingCredentials),
        "a username without a password is not enough"
    );
}

#[rstest]
fn applied_filters_parse_configured_pairs() {
    let config = DocketConfig {
        filters: Some("requester_name=alice,approval_state=Denied".to_owned()),
        ..Default::default()
    };

    assert_eq!(
        config.applied_filters().expect("filters should parse"),
        vec![
            AppliedFilter::new(FilterField::RequesterName, "alice"),
            AppliedFilter::new(FilterField::ApprovalState, "Denied"),
        ]
    );
}

#[rstest]
fn applied_filters_empty_when_unset() {
    let config = DocketConfig::default();
    assert!(config.applied_filters().expect("no filters").is_empty());
}

#[rstest]
#[case::default(None, false, SortState::default())]
#[case::ascending(Some("id"), false, SortState::new(SortField::Id, true))]
#[case::descending(Some("status"), true, SortState::new(SortField::Status, false))]
fn sort_state_follows_configuration(
    #[case] sort: Option<&str>,
    #[case] descending: bool,
    #[case] expected: SortState,
) {
    let config = DocketConfig {
        sort: sort.map(str::to_owned),
        descending,
        ..Default::default()
    };

    assert_eq!(config.sort_state().expect("sort should parse"), expected);
}

#[rstest]
fn sort_state_rejects_unknown_field() {
    let config = DocketConfig {
        sort: Some("priority".to_owned()),
        ..Default::default()
    };

    assert_eq!(
        config.sort_state(),
        Err(ApiError::InvalidSortField("priority".to_owned()))
    );
}
