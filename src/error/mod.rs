//! Error types and handling for the transition tracker
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostics.
//!
//! Variants are grouped by the step that detects them:
//! - package index and package installation
//! - filesystem layout and asset staging
//! - repository cloning
//! - service manager calls
//! - settings loading

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for transition tracker operations
#[derive(Error, Diagnostic, Debug)]
pub enum TrackerError {
    // Package errors
    #[error("Failed to refresh the package index: {reason}")]
    #[diagnostic(
        code(tracker::packages::index_refresh_failed),
        help("Check network egress and the proxy settings of the unit")
    )]
    IndexRefreshFailed { reason: String },

    #[error("Package '{name}' not found in the package index")]
    #[diagnostic(
        code(tracker::packages::not_found),
        help("Check that the archive providing this package is enabled")
    )]
    PackageNotFound { name: String },

    #[error("Failed to install package '{name}': {reason}")]
    #[diagnostic(code(tracker::packages::install_failed))]
    PackageInstallFailed { name: String, reason: String },

    // File system errors
    #[error("Failed to create directory {path}: {reason}")]
    #[diagnostic(code(tracker::fs::create_dir_failed))]
    DirectoryCreateFailed { path: String, reason: String },

    #[error("Failed to read file {path}: {reason}")]
    #[diagnostic(code(tracker::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file {path}: {reason}")]
    #[diagnostic(code(tracker::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to remove {path}: {reason}")]
    #[diagnostic(code(tracker::fs::remove_failed))]
    FileRemoveFailed { path: String, reason: String },

    #[error("Asset '{name}' not available: {reason}")]
    #[diagnostic(
        code(tracker::assets::missing),
        help("Point --assets at a directory containing script/, nginx/ and systemd/")
    )]
    AssetMissing { name: String, reason: String },

    // Git errors
    #[error("Failed to clone repository {url}: {reason}")]
    #[diagnostic(
        code(tracker::git::clone_failed),
        help("Check that the URL and branch are correct and reachable through the proxy")
    )]
    CloneFailed {
        url: String,
        reason: String,
        /// Output captured from the remote while cloning
        output: String,
    },

    #[error("Cloning {url} did not finish within {timeout_secs} seconds")]
    #[diagnostic(code(tracker::git::clone_timed_out))]
    CloneTimedOut { url: String, timeout_secs: u64 },

    // Service manager errors
    #[error("Failed to {action} {unit}: {reason}")]
    #[diagnostic(
        code(tracker::systemd::failed),
        help("Inspect `journalctl -u {unit}` for details")
    )]
    ServiceFailed {
        action: String,
        unit: String,
        reason: String,
    },

    // Process errors
    #[error("Failed to run {program}: {reason}")]
    #[diagnostic(code(tracker::process::spawn_failed))]
    CommandSpawnFailed { program: String, reason: String },

    // Settings errors
    #[error("Failed to parse settings file {path}: {reason}")]
    #[diagnostic(code(tracker::config::parse_failed))]
    SettingsParseFailed { path: String, reason: String },

    // Output errors
    #[error("Failed to serialize status report: {reason}")]
    #[diagnostic(code(tracker::status::serialize_failed))]
    StatusSerializeFailed { reason: String },
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, TrackerError>;
