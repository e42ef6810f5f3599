//! Fixed filesystem layout of a tracker host
//!
//! ```text
//! /srv/transitions/transition-tracker/   # tracker root, idempotency flag
//! └── config/                            # cloned configuration repository
//!     └── monitor/finished/              # needed by the report generator
//! /srv/mirrors/ubuntu/dists/             # mirrored archive metadata
//! /etc/nginx/conf.d/transition.conf      # reverse-proxy site
//! /usr/bin/syncmirror                    # mirror sync helper
//! /etc/systemd/system/                   # service and timer units
//! ```

use std::path::{Path, PathBuf};

/// Tracker root directory
pub const TRACKER_ROOT: &str = "/srv/transitions/transition-tracker";

/// Mirror root directory
pub const MIRROR_ROOT: &str = "/srv/mirrors";

/// Reverse-proxy site configuration
pub const NGINX_SITE_CONFIG: &str = "/etc/nginx/conf.d/transition.conf";

/// Default nginx site removed during provisioning
pub const NGINX_DEFAULT_SITE: &str = "/etc/nginx/sites-enabled/default";

/// Mirror sync helper
pub const SYNC_SCRIPT: &str = "/usr/bin/syncmirror";

/// systemd unit directory
pub const SYSTEMD_UNIT_DIR: &str = "/etc/systemd/system";

/// Every path the tracker touches on the host.
///
/// `WorkspaceLayout::system()` uses the real locations; `under(root)` re-roots
/// all of them below a prefix directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceLayout {
    pub tracker_root: PathBuf,
    pub mirror_root: PathBuf,
    pub nginx_site_config: PathBuf,
    pub nginx_default_site: PathBuf,
    pub sync_script: PathBuf,
    pub unit_dir: PathBuf,
}

impl WorkspaceLayout {
    pub fn system() -> Self {
        Self::under(Path::new("/"))
    }

    pub fn under(root: &Path) -> Self {
        let at = |path: &str| root.join(path.trim_start_matches('/'));
        Self {
            tracker_root: at(TRACKER_ROOT),
            mirror_root: at(MIRROR_ROOT),
            nginx_site_config: at(NGINX_SITE_CONFIG),
            nginx_default_site: at(NGINX_DEFAULT_SITE),
            sync_script: at(SYNC_SCRIPT),
            unit_dir: at(SYSTEMD_UNIT_DIR),
        }
    }

    pub fn mirror_dists(&self) -> PathBuf {
        self.mirror_root.join("ubuntu").join("dists")
    }

    /// Checkout of the configuration repository
    pub fn config_dir(&self) -> PathBuf {
        self.tracker_root.join("config")
    }

    pub fn finished_dir(&self) -> PathBuf {
        self.config_dir().join("monitor").join("finished")
    }

    pub fn unit_path(&self, unit: &str) -> PathBuf {
        self.unit_dir.join(unit)
    }

    /// True once provisioning has completed on this host
    pub fn is_provisioned(&self) -> bool {
        self.tracker_root.is_dir()
    }
}

impl Default for WorkspaceLayout {
    fn default() -> Self {
        Self::system()
    }
}
