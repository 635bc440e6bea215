use std::collections::HashMap;
use std::sync::Mutex;

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_applies_defaults() {
    let cfg = AdminConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, AdminConfig::default());
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.backend_url, "http://127.0.0.1:8000");
    assert_eq!(cfg.backend_timeout_secs, 30);
    assert_eq!(cfg.comment_query_mode, CommentQueryMode::ApprovalFlag);
    assert_eq!(cfg.locale, Locale::En);
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = AdminConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BACKEND_URL", "https://shop.example.test/"),
        ("BACKEND_TIMEOUT_SECS", "5"),
        ("COMMENT_QUERY_MODE", "status"),
        ("ADMIN_LOCALE", "FA"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "https://shop.example.test");
    assert_eq!(cfg.backend_timeout_secs, 5);
    assert_eq!(cfg.comment_query_mode, CommentQueryMode::Status);
    assert_eq!(cfg.locale, Locale::Fa);
}

#[test]
fn from_lookup_rejects_bad_values() {
    let err = AdminConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));

    let err = AdminConfig::from_lookup(lookup(&[("BACKEND_TIMEOUT_SECS", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "BACKEND_TIMEOUT_SECS", .. }));

    let err = AdminConfig::from_lookup(lookup(&[("BACKEND_URL", "shop.example.test")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "BACKEND_URL", .. }));

    let err = AdminConfig::from_lookup(lookup(&[("COMMENT_QUERY_MODE", "tri")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "COMMENT_QUERY_MODE", .. }));

    let err = AdminConfig::from_lookup(lookup(&[("ADMIN_LOCALE", "de")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "ADMIN_LOCALE", .. }));
}

#[test]
fn client_config_carries_mode_and_locale() {
    let cfg = AdminConfig { comment_query_mode: CommentQueryMode::Status, locale: Locale::Fa, ..AdminConfig::default() };
    let client = cfg.client_config();
    assert_eq!(client.query_mode, CommentQueryMode::Status);
    assert_eq!(client.locale, Locale::Fa);
}

#[test]
fn from_env_reads_process_environment() {
    let _guard = ENV_LOCK.lock().unwrap();
    // SAFETY: ENV_LOCK serializes every test that touches these variables.
    unsafe {
        std::env::set_var("BACKEND_URL", "http://backend.internal:9000//");
        std::env::set_var("COMMENT_QUERY_MODE", "status");
    }

    let cfg = AdminConfig::from_env();

    unsafe {
        std::env::remove_var("BACKEND_URL");
        std::env::remove_var("COMMENT_QUERY_MODE");
    }

    let cfg = cfg.unwrap();
    assert_eq!(cfg.backend_url, "http://backend.internal:9000");
    assert_eq!(cfg.comment_query_mode, CommentQueryMode::Status);
}
