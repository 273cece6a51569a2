use super::*;
use std::collections::HashMap;
use std::time::Duration;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect::<HashMap<_, _>>();
    move |name: &str| map.get(name).cloned()
}

#[test]
fn config_defaults_when_env_is_empty() {
    let config = ClientConfig::from_lookup(lookup(&[])).expect("config");
    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.base_url, DEFAULT_API_BASE);
}

#[test]
fn config_reads_env_and_normalizes() {
    let config = ClientConfig::from_lookup(lookup(&[
        (ENV_API_BASE, " https://ops.example.org/ "),
        (ENV_TIMEOUT_MS, "2500"),
        (ENV_API_TOKEN, "  secret "),
    ]))
    .expect("config");
    assert_eq!(config.base_url, "https://ops.example.org");
    assert_eq!(config.timeout, Some(Duration::from_millis(2500)));
    assert_eq!(config.auth_token.as_deref(), Some("secret"));
}

#[test]
fn config_rejects_bad_values() {
    assert!(matches!(
        ClientConfig::from_lookup(lookup(&[(ENV_API_BASE, "ftp://nope")])),
        Err(ClientError::InvalidConfig(_))
    ));
    assert!(matches!(
        ClientConfig::from_lookup(lookup(&[(ENV_TIMEOUT_MS, "soon")])),
        Err(ClientError::InvalidConfig(_))
    ));
    let zero = ClientConfig::from_lookup(lookup(&[(ENV_TIMEOUT_MS, "0")])).expect("config");
    assert_eq!(zero.timeout, None);
}

#[test]
fn status_message_prefers_backend_error_text() {
    let err = ClientError::from_status_body(400, r#"{"error":"budget must be positive"}"#);
    assert_eq!(err.message(), "budget must be positive");
    assert_eq!(err.status(), Some(400));

    let nested = ClientError::from_status_body(422, r#"{"error":{"message":"title required"}}"#);
    assert_eq!(nested.message(), "title required");

    let plain = ClientError::from_status_body(502, "Bad Gateway");
    assert_eq!(plain.message(), "Bad Gateway");

    let html = ClientError::from_status_body(500, "<html>oops</html>");
    assert_eq!(html.message(), "HTTP 500");

    let empty = ClientError::from_status_body(404, "");
    assert_eq!(empty.message(), "HTTP 404");
}

#[test]
fn segments_are_percent_encoded() {
    assert_eq!(encode_segment("0xAbC123"), "0xAbC123");
    assert_eq!(encode_segment("a/b c"), "a%2Fb%20c");
    assert_eq!(DaoService::board_path("0x1"), "/api/arkiv/daos/0x1/board");
    assert_eq!(
        TaskService::by_proposal_path("p/1"),
        "/api/arkiv/tasks/by-proposal/p%2F1"
    );
    assert_eq!(ProposalService::by_dao_path("d"), "/api/arkiv/proposals/by-dao/d");
}
