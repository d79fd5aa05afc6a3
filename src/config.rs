// src/config.rs
use crate::models::PageSize;
use crate::services::team_workflow::DEFAULT_LATENCY;
use log::warn;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_BIND: &str = "127.0.0.1:9090";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_address: String,
    pub latency: Duration,
    pub page_size: PageSize,
    pub seed_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND.to_string(),
            latency: DEFAULT_LATENCY,
            page_size: PageSize::default(),
            seed_file: None,
        }
    }
}

impl AppConfig {
    // Defaults, overridden by the process environment (main loads .env first)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("TEAM_ADMIN_BIND") {
            config.bind_address = v;
        }

        if let Some(v) = lookup("TEAM_ADMIN_LATENCY_MS") {
            match v.trim().parse::<u64>() {
                Ok(ms) => config.latency = Duration::from_millis(ms),
                Err(_) => warn!("Ignoring invalid TEAM_ADMIN_LATENCY_MS={}", v),
            }
        }

        if let Some(v) = lookup("TEAM_ADMIN_PAGE_SIZE") {
            match v.trim().parse::<usize>().ok().map(PageSize::try_from) {
                Some(Ok(size)) => config.page_size = size,
                _ => warn!("Ignoring invalid TEAM_ADMIN_PAGE_SIZE={}", v),
            }
        }

        if let Some(v) = lookup("TEAM_ADMIN_SEED_FILE") {
            if !v.trim().is_empty() {
                config.seed_file = Some(PathBuf::from(v));
            }
        }

        config
    }
}
