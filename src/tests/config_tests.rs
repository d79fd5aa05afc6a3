use crate::config::AppConfig;
use crate::models::PageSize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    AppConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_without_environment() {
    let config = config_from(&[]);
    assert_eq!(config.bind_address, "127.0.0.1:9090");
    assert_eq!(config.latency, Duration::from_millis(500));
    assert_eq!(config.page_size, PageSize::Ten);
    assert!(config.seed_file.is_none());
}

#[test]
fn environment_overrides_defaults() {
    let config = config_from(&[
        ("TEAM_ADMIN_BIND", "0.0.0.0:8080"),
        ("TEAM_ADMIN_LATENCY_MS", "0"),
        ("TEAM_ADMIN_PAGE_SIZE", "20"),
        ("TEAM_ADMIN_SEED_FILE", "teams.json"),
    ]);

    assert_eq!(config.bind_address, "0.0.0.0:8080");
    assert_eq!(config.latency, Duration::ZERO);
    assert_eq!(config.page_size, PageSize::Twenty);
    assert_eq!(config.seed_file, Some(PathBuf::from("teams.json")));
}

#[test]
fn invalid_values_fall_back() {
    let config = config_from(&[("TEAM_ADMIN_LATENCY_MS", "soon"), ("TEAM_ADMIN_PAGE_SIZE", "15")]);
    assert_eq!(config.latency, Duration::from_millis(500));
    assert_eq!(config.page_size, PageSize::Ten);
}
