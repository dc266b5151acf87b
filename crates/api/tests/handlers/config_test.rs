use std::collections::HashMap;

use barbershop_api::config::ApiConfig;
use pretty_assertions::assert_eq;
use tracing::Level;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_defaults() {
    let config =
        ApiConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/barbershop")]))
            .unwrap();

    assert_eq!(config.server_addr(), "0.0.0.0:3333");
    assert_eq!(config.database_url, "postgres://localhost/barbershop");
    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.cors_origins, None);
    assert_eq!(config.request_timeout, 30);
}

#[test]
fn test_overrides() {
    let config = ApiConfig::from_lookup(lookup(&[
        ("DATABASE_URL", "postgres://db/barbershop"),
        ("API_HOST", "127.0.0.1"),
        ("API_PORT", "8080"),
        ("LOG_LEVEL", "DEBUG"),
        ("API_CORS_ORIGINS", "http://localhost:3000, https://app.example.com,"),
        ("API_REQUEST_TIMEOUT_SECONDS", "5"),
    ]))
    .unwrap();

    assert_eq!(config.server_addr(), "127.0.0.1:8080");
    assert_eq!(config.log_level, Level::DEBUG);
    assert_eq!(
        config.cors_origins,
        Some(vec![
            "http://localhost:3000".to_string(),
            "https://app.example.com".to_string(),
        ])
    );
    assert_eq!(config.request_timeout, 5);
}

#[test]
fn test_missing_database_url_is_an_error() {
    let err = ApiConfig::from_lookup(lookup(&[])).unwrap_err();

    assert!(err.to_string().contains("DATABASE_URL"));
}

#[test]
fn test_invalid_port_is_an_error() {
    let result = ApiConfig::from_lookup(lookup(&[
        ("DATABASE_URL", "postgres://localhost/barbershop"),
        ("API_PORT", "seventy"),
    ]));

    assert!(result.is_err());
}

#[test]
fn test_unknown_log_level_falls_back_to_info() {
    let config = ApiConfig::from_lookup(lookup(&[
        ("DATABASE_URL", "postgres://localhost/barbershop"),
        ("LOG_LEVEL", "verbose"),
    ]))
    .unwrap();

    assert_eq!(config.log_level, Level::INFO);
}
