//! # Configuration
//!
//! Defaults, overridden by an optional TOML file and then by environment
//! variables.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

pub const DEFAULT_API_URL: &str = "https://learn.zone01kisumu.ke/api/graphql-engine/v1/graphql";
pub const DEFAULT_SIGNIN_URL: &str = "https://learn.zone01kisumu.ke/api/auth/signin";

const APP_DIR: &str = "xpstats";

/// Runtime configuration.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// GraphQL endpoint
    pub api_url: String,
    /// Sign-in endpoint (HTTP Basic → bearer token)
    pub signin_url: String,
    /// Timeout applied to every HTTP request
    pub request_timeout_secs: u64,
    /// How long a fetch-failure banner stays visible
    pub banner_secs: u64,
    /// Result types counted by the success rate; empty means all results
    pub success_rate_types: Vec<String>,
    /// Where the session token is kept; defaults to the user cache dir
    pub session_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            signin_url: DEFAULT_SIGNIN_URL.to_string(),
            request_timeout_secs: 30,
            banner_secs: 5,
            success_rate_types: vec!["tester".to_string(), "user_audit".to_string()],
            session_path: None,
        }
    }
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicit `path` must exist; otherwise the default location is read
    /// if present. Environment overrides are applied last.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| Error::Config(e.to_string()))
    }

    /// Apply `XPSTATS_*` overrides read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("XPSTATS_API_URL") {
            self.api_url = url;
        }
        if let Some(url) = lookup("XPSTATS_SIGNIN_URL") {
            self.signin_url = url;
        }
        if let Some(secs) = lookup("XPSTATS_TIMEOUT_SECS") {
            self.request_timeout_secs = secs
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("XPSTATS_TIMEOUT_SECS is not a number: {secs}")))?;
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn banner_duration(&self) -> Duration {
        Duration::from_secs(self.banner_secs)
    }

    /// Resolved session file location.
    pub fn session_file(&self) -> Result<PathBuf> {
        if let Some(path) = &self.session_path {
            return Ok(path.clone());
        }
        dirs::cache_dir()
            .map(|dir| dir.join(APP_DIR).join("session"))
            .ok_or_else(|| Error::Config("no cache directory available for the session file".to_string()))
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}
