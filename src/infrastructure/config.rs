//! Configuration management

use crate::error::{EntixError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use uuid::Uuid;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the journal store API
    pub journal_api_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Application id sent with every store request, when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,

    /// Token used by the diagnostic reporter; reporting is disabled without it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reports_token: Option<String>,

    /// Journal that receives diagnostic reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reports_journal_id: Option<Uuid>,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Config {
    /// Create a config pointing at the given store URL
    pub fn new(journal_api_url: &str) -> Self {
        Config {
            journal_api_url: normalize_url(journal_api_url),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            application_id: None,
            reports_token: None,
            reports_journal_id: None,
        }
    }

    /// Build config from the environment, optionally seeded from the TOML
    /// file named by ENTIX_CONFIG. Environment variables win over the file;
    /// an explicit `url_override` wins over both.
    pub fn from_env(url_override: Option<&str>) -> Result<Self> {
        let mut config = match std::env::var("ENTIX_CONFIG") {
            Ok(path) => Config::load_from_file(Path::new(&path))?,
            Err(_) => Config {
                journal_api_url: String::new(),
                timeout_secs: DEFAULT_TIMEOUT_SECS,
                application_id: None,
                reports_token: None,
                reports_journal_id: None,
            },
        };

        if let Ok(url) = std::env::var("ENTIX_JOURNAL_URL") {
            config.journal_api_url = url;
        }
        if let Ok(raw) = std::env::var("ENTIX_TIMEOUT") {
            config.timeout_secs = raw.parse().map_err(|_| {
                EntixError::Config(format!("Could not parse ENTIX_TIMEOUT as seconds: {}", raw))
            })?;
        }
        if let Ok(app_id) = std::env::var("ENTIX_APPLICATION_ID") {
            config.application_id = Some(app_id);
        }
        if let Ok(token) = std::env::var("ENTIX_REPORTS_TOKEN") {
            config.reports_token = Some(token);
        }
        if let Ok(raw) = std::env::var("ENTIX_REPORTS_JOURNAL_ID") {
            let id = raw.parse().map_err(|_| {
                EntixError::Config(format!(
                    "Could not parse ENTIX_REPORTS_JOURNAL_ID as a UUID: {}",
                    raw
                ))
            })?;
            config.reports_journal_id = Some(id);
        }

        if let Some(url) = url_override {
            config.journal_api_url = url.to_string();
        }

        if config.journal_api_url.is_empty() {
            return Err(EntixError::Config(
                "No journal API URL configured".to_string(),
            ));
        }
        config.journal_api_url = normalize_url(&config.journal_api_url);

        Ok(config)
    }

    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                EntixError::Config(format!("Config file not found: {}", path.display()))
            } else {
                EntixError::Io(e)
            }
        })?;

        let mut config: Config = toml::from_str(&contents)?;
        config.journal_api_url = normalize_url(&config.journal_api_url);
        Ok(config)
    }

    /// Save config to a TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

/// Default to http:// for scheme-less URLs and strip trailing slashes
fn normalize_url(url: &str) -> String {
    let with_scheme = if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else if url.is_empty() {
        return String::new();
    } else {
        format!("http://{}", url)
    };
    with_scheme.trim_end_matches('/').to_string()
}
