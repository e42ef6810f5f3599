//! Tracker settings and the optional YAML settings file
//!
//! Values are resolved in order: command line flag (or its environment
//! variable), settings file, built-in default.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::proxy::ProxyConfig;
use crate::error::{Result, TrackerError};

/// Configuration repository cloned into the tracker root
pub const REPO_URL: &str =
    "https://git.launchpad.net/~ubuntu-transition-trackers/ubuntu-transition-tracker/+git/configs";

/// Branch checked out from the configuration repository
pub const REPO_BRANCH: &str = "main";

/// Upper bound for the repository clone
pub const CLONE_TIMEOUT: Duration = Duration::from_secs(300);

/// Settings file contents (e.g. `/etc/transition-tracker.yaml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    /// Public endpoint of the report
    #[serde(default)]
    pub url: Option<String>,

    /// Configuration repository to clone
    #[serde(default)]
    pub repo_url: Option<String>,

    /// Branch of the configuration repository
    #[serde(default)]
    pub branch: Option<String>,
}

impl SettingsFile {
    /// Parse settings from YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // An empty document is a valid, empty settings file
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Load settings from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| TrackerError::FileReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        Self::from_yaml(&content).map_err(|e| TrackerError::SettingsParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

/// Where the configuration repository comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSource {
    pub url: String,
    pub branch: String,
    pub timeout: Duration,
}

impl Default for RepoSource {
    fn default() -> Self {
        Self {
            url: REPO_URL.to_string(),
            branch: REPO_BRANCH.to_string(),
            timeout: CLONE_TIMEOUT,
        }
    }
}

/// Fully resolved settings handed to the lifecycle controller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub proxy: ProxyConfig,
    pub repo: RepoSource,
    pub url: Option<String>,
}

impl Settings {
    /// Merge explicit values over a settings file over defaults
    pub fn resolve(
        proxy: ProxyConfig,
        url: Option<String>,
        repo_url: Option<String>,
        branch: Option<String>,
        file: SettingsFile,
    ) -> Self {
        let defaults = RepoSource::default();
        Self {
            proxy,
            repo: RepoSource {
                url: repo_url.or(file.repo_url).unwrap_or(defaults.url),
                branch: branch.or(file.branch).unwrap_or(defaults.branch),
                timeout: defaults.timeout,
            },
            url: url.or(file.url),
        }
    }
}
