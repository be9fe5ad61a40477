// dataclean-core/src/infrastructure/config/dashboard.rs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::infrastructure::error::InfrastructureError;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Where the integrations view gets its data from.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Remote,
    Fixtures,
}

impl std::str::FromStr for SourceKind {
    type Err = InfrastructureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "remote" => Ok(Self::Remote),
            "fixtures" => Ok(Self::Fixtures),
            other => Err(InfrastructureError::ConfigError(format!(
                "unknown source '{}' (expected 'remote' or 'fixtures')",
                other
            ))),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DashboardConfig {
    #[serde(rename = "api-base-url", default = "default_api_url")]
    pub api_base_url: String,

    /// `None` keeps the HTTP client's own default (no timeout).
    #[serde(rename = "timeout-secs", default)]
    pub timeout_secs: Option<u64>,

    #[serde(rename = "default-schema", default = "default_hackathon")]
    pub default_schema: String,

    #[serde(rename = "default-database", default = "default_hackathon")]
    pub default_database: String,

    #[serde(default)]
    pub source: SourceKind,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_url(),
            timeout_secs: None,
            default_schema: default_hackathon(),
            default_database: default_hackathon(),
            source: SourceKind::default(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}
fn default_hackathon() -> String {
    "hackathon".to_string()
}

// --- LOADER ---

#[instrument(skip(project_dir))]
pub fn load_dashboard_config(project_dir: &Path) -> Result<DashboardConfig, InfrastructureError> {
    // Layering: DATACLEAN_API_URL=http://api:8000 dataclean integrations
    load_with_env(project_dir, |key| std::env::var(key).ok())
}

fn load_with_env<F>(project_dir: &Path, lookup: F) -> Result<DashboardConfig, InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match find_config_file(project_dir) {
        Some(path) => {
            info!(path = ?path, "Loading dashboard configuration");
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)?
        }
        None => {
            info!(dir = ?project_dir, "No dataclean.yaml found, using defaults");
            DashboardConfig::default()
        }
    };

    apply_env_overrides(&mut config, lookup)?;
    validate(&config)?;

    Ok(config)
}

fn find_config_file(root: &Path) -> Option<PathBuf> {
    ["dataclean.yaml", "dataclean.yml"]
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.exists())
}

fn apply_env_overrides<F>(
    config: &mut DashboardConfig,
    lookup: F,
) -> Result<(), InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("DATACLEAN_API_URL") {
        info!(old = %config.api_base_url, new = %val, "Overriding API URL via ENV");
        config.api_base_url = val;
    }
    if let Some(val) = lookup("DATACLEAN_TIMEOUT_SECS") {
        let secs = val.trim().parse::<u64>().map_err(|_| {
            InfrastructureError::ConfigError(format!(
                "DATACLEAN_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                val
            ))
        })?;
        config.timeout_secs = Some(secs);
    }
    if let Some(val) = lookup("DATACLEAN_SOURCE") {
        config.source = val.parse()?;
    }
    Ok(())
}

fn validate(config: &DashboardConfig) -> Result<(), InfrastructureError> {
    let url = config.api_base_url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(InfrastructureError::ConfigError(format!(
            "api-base-url must start with http:// or https://, got '{}'",
            config.api_base_url
        )));
    }
    if config.timeout_secs == Some(0) {
        warn!("timeout-secs is 0: every request will time out immediately");
    }
    Ok(())
}
