//! Workspace provisioning
//!
//! Runs once per host. The steps, in order:
//! 1. Skip everything if the tracker root already exists
//! 2. Create the tracker root and the mirror dists directory
//! 3. Clone the configuration repository into `<tracker root>/config`
//! 4. Create `config/monitor/finished`, which the report generator expects
//!    but the repository does not carry
//! 5. Install the sync script and the nginx site configuration
//! 6. Remove nginx's default site
//!
//! A failing step is logged and propagated. If the tracker root was created
//! by the failing run it is removed again, so the next run starts over.

use tracing::{debug, warn};

use crate::assets::{Asset, AssetLoader};
use crate::common::fs::{ensure_dir, remove_file_if_exists, write_file};
use crate::config::{ProcessEnvironment, RepoSource, WorkspaceLayout};
use crate::error::{Result, TrackerError};
use crate::git::{CloneRequest, VcsClient};
use crate::transaction::Transaction;

/// Collaborators and inputs of a provisioning run
pub struct Provisioner<'a> {
    pub layout: &'a WorkspaceLayout,
    pub env: &'a ProcessEnvironment,
    pub repo: &'a RepoSource,
    pub vcs: &'a dyn VcsClient,
    pub assets: &'a dyn AssetLoader,
}

/// What a provisioning call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Provisioned,
    AlreadyProvisioned,
}

impl Provisioner<'_> {
    pub fn provision(&self) -> Result<Outcome> {
        // Only once per host, not again on upgrades
        if self.layout.is_provisioned() {
            debug!(
                "{} exists, skipping workspace provisioning",
                self.layout.tracker_root.display()
            );
            return Ok(Outcome::AlreadyProvisioned);
        }

        let mut transaction = Transaction::new();

        ensure_dir(&self.layout.tracker_root)?;
        transaction.track_dir_created(&self.layout.tracker_root);
        ensure_dir(&self.layout.mirror_dists())?;

        self.clone_config()?;

        ensure_dir(&self.layout.finished_dir())?;

        self.install_app_files()?;

        remove_file_if_exists(&self.layout.nginx_default_site)?;
        debug!("Nginx default configuration removed");

        transaction.commit();
        Ok(Outcome::Provisioned)
    }

    fn clone_config(&self) -> Result<()> {
        let dest = self.layout.config_dir();
        let request = CloneRequest {
            url: &self.repo.url,
            branch: &self.repo.branch,
            dest: &dest,
            env: self.env,
            timeout: self.repo.timeout,
        };

        if let Err(e) = self.vcs.clone_repo(&request) {
            match &e {
                TrackerError::CloneFailed { output, .. } => {
                    warn!("Git clone of the config failed: {}: {}", e, output);
                }
                _ => warn!("Git clone of the config failed: {}", e),
            }
            return Err(e);
        }
        debug!("Transition config vcs cloned.");
        Ok(())
    }

    fn install_app_files(&self) -> Result<()> {
        let script = self.assets.load(Asset::SyncScript)?;
        let site = self.assets.load(Asset::SiteConfig)?;

        for path in [&self.layout.sync_script, &self.layout.nginx_site_config] {
            if let Some(parent) = path.parent() {
                ensure_dir(parent)?;
            }
        }

        write_file(&self.layout.sync_script, &script, 0o755)?;
        write_file(&self.layout.nginx_site_config, &site, 0o644)?;
        debug!("App files copied");
        Ok(())
    }
}
