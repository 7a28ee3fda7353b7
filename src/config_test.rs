use std::collections::HashMap;

use super::*;

fn from_pairs(pairs: &[(&str, &str)]) -> Result<HostConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    HostConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_apply_when_unset() {
    let cfg = from_pairs(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.upstream_url, DEFAULT_UPSTREAM_URL);
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS));
    assert_eq!(cfg.max_body_bytes, DEFAULT_PROXY_MAX_BODY_BYTES);
}

#[test]
fn overrides_are_parsed() {
    let cfg = from_pairs(&[
        ("PORT", "8080"),
        ("API_UPSTREAM_URL", "https://attendance.example.edu/"),
        ("PROXY_TIMEOUT_SECS", "5"),
        ("PROXY_MAX_BODY_BYTES", "1024"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.upstream_url, "https://attendance.example.edu");
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(5));
    assert_eq!(cfg.max_body_bytes, 1024);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = from_pairs(&[("PORT", " "), ("API_UPSTREAM_URL", "")]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.upstream_url, DEFAULT_UPSTREAM_URL);
}

#[test]
fn invalid_port_errors() {
    let err = from_pairs(&[("PORT", "eighty")]).unwrap_err();
    assert_eq!(err, ConfigError::InvalidNumber { var: "PORT", value: "eighty".to_owned() });
    assert!(err.to_string().contains("PORT"));
}

#[test]
fn port_out_of_range_errors() {
    assert!(matches!(from_pairs(&[("PORT", "70000")]), Err(ConfigError::InvalidNumber { var: "PORT", .. })));
}

#[test]
fn non_http_upstream_errors() {
    let err = from_pairs(&[("API_UPSTREAM_URL", "ftp://files.example.edu")]).unwrap_err();
    assert_eq!(err, ConfigError::InvalidUpstream("ftp://files.example.edu".to_owned()));
}
