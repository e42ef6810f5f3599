//! Static files shipped with the tracker
//!
//! Provisioning and unit installation read their inputs through the
//! [`AssetLoader`] seam. [`EmbeddedAssets`] serves the copies compiled into
//! the binary; [`DirAssetLoader`] reads them from a directory laid out as
//!
//! ```text
//! script/syncmirror
//! nginx/transition.conf
//! systemd/ubuntu-transition-tracker.service
//! systemd/ubuntu-transition-tracker.timer
//! ```

use std::path::PathBuf;

use crate::error::{Result, TrackerError};

/// Name of the tracker service unit
pub const SERVICE_UNIT: &str = "ubuntu-transition-tracker.service";

/// Name of the tracker timer unit
pub const TIMER_UNIT: &str = "ubuntu-transition-tracker.timer";

/// A static file used during provisioning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Asset {
    SyncScript,
    SiteConfig,
    ServiceUnit,
    TimerUnit,
}

impl Asset {
    pub const ALL: [Asset; 4] = [
        Asset::SyncScript,
        Asset::SiteConfig,
        Asset::ServiceUnit,
        Asset::TimerUnit,
    ];

    /// Path relative to an asset directory
    pub fn relative_path(self) -> &'static str {
        match self {
            Asset::SyncScript => "script/syncmirror",
            Asset::SiteConfig => "nginx/transition.conf",
            Asset::ServiceUnit => "systemd/ubuntu-transition-tracker.service",
            Asset::TimerUnit => "systemd/ubuntu-transition-tracker.timer",
        }
    }
}

/// Source of the static files
pub trait AssetLoader {
    fn load(&self, asset: Asset) -> Result<String>;
}

/// Assets compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedAssets;

impl AssetLoader for EmbeddedAssets {
    fn load(&self, asset: Asset) -> Result<String> {
        let text = match asset {
            Asset::SyncScript => include_str!("../../assets/script/syncmirror"),
            Asset::SiteConfig => include_str!("../../assets/nginx/transition.conf"),
            Asset::ServiceUnit => {
                include_str!("../../assets/systemd/ubuntu-transition-tracker.service")
            }
            Asset::TimerUnit => include_str!("../../assets/systemd/ubuntu-transition-tracker.timer"),
        };
        Ok(text.to_string())
    }
}

/// Assets read from a directory at call time
#[derive(Debug, Clone)]
pub struct DirAssetLoader {
    root: PathBuf,
}

impl DirAssetLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetLoader for DirAssetLoader {
    fn load(&self, asset: Asset) -> Result<String> {
        let path = self.root.join(asset.relative_path());
        std::fs::read_to_string(&path).map_err(|e| TrackerError::AssetMissing {
            name: asset.relative_path().to_string(),
            reason: format!("{}: {}", path.display(), e),
        })
    }
}
