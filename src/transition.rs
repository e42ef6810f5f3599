//! The transition tracker lifecycle controller
//!
//! [`Transition`] is the single entry point the host runtime drives. It keeps
//! no state of its own between calls: whether the host is provisioned or the
//! units are installed is read back from the filesystem every time, so a
//! fresh process can pick up where a previous one stopped.

use serde::Serialize;
use tracing::{debug, error, warn};

use crate::assets::{AssetLoader, SERVICE_UNIT, TIMER_UNIT};
use crate::config::{ProcessEnvironment, ProxyConfig, Settings, WorkspaceLayout};
use crate::error::Result;
use crate::git::VcsClient;
use crate::packages::{PACKAGES, PackageManager, ensure_packages};
use crate::provision::{Outcome, Provisioner};
use crate::systemd::{NGINX_SERVICE, ServiceManager, units};

/// Host collaborators used by the controller
pub struct Collaborators {
    pub packages: Box<dyn PackageManager>,
    pub vcs: Box<dyn VcsClient>,
    pub services: Box<dyn ServiceManager>,
    pub assets: Box<dyn AssetLoader>,
}

/// State of the host as seen from the filesystem
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackerStatus {
    pub provisioned: bool,
    pub units_installed: bool,
    pub service_unit: String,
    pub timer_unit: String,
    pub proxy: ProxyConfig,
}

/// A transition tracker instance on this host
pub struct Transition {
    settings: Settings,
    layout: WorkspaceLayout,
    env: ProcessEnvironment,
    host: Collaborators,
}

impl Transition {
    /// Build a controller; `base_env` is the environment subprocesses inherit
    /// before the proxy overlay.
    pub fn new<I, K, V>(
        settings: Settings,
        layout: WorkspaceLayout,
        base_env: I,
        host: Collaborators,
    ) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        debug!("Transition controller init");
        let env = ProcessEnvironment::new(base_env, &settings.proxy);
        Self {
            settings,
            layout,
            env,
            host,
        }
    }

    pub fn env(&self) -> &ProcessEnvironment {
        &self.env
    }

    pub fn layout(&self) -> &WorkspaceLayout {
        &self.layout
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Install packages, then provision the workspace if it never was.
    pub fn install(&self) -> Result<()> {
        ensure_packages(self.host.packages.as_ref(), PACKAGES, &self.env)?;

        let provisioner = Provisioner {
            layout: &self.layout,
            env: &self.env,
            repo: &self.settings.repo,
            vcs: self.host.vcs.as_ref(),
            assets: self.host.assets.as_ref(),
        };
        match provisioner.provision()? {
            Outcome::Provisioned => debug!("Transition tracker workspace provisioned"),
            Outcome::AlreadyProvisioned => debug!("Transition tracker workspace already present"),
        }
        Ok(())
    }

    /// Write the service and timer units and enable the timer.
    pub fn setup_systemd_units(&self) -> Result<()> {
        units::install_units(
            &self.layout,
            &self.settings.proxy,
            self.host.assets.as_ref(),
            self.host.services.as_ref(),
        )
    }

    /// Restart nginx, then start the tracker service.
    pub fn start(&self) -> Result<()> {
        let services = self.host.services.as_ref();
        let result = services.restart(NGINX_SERVICE).and_then(|()| {
            debug!("Nginx service restarted");
            services.start(SERVICE_UNIT)
        });

        if let Err(e) = result {
            error!("Failed to start systemd service: {}", e);
            return Err(e);
        }
        debug!("{} started", SERVICE_UNIT);
        Ok(())
    }

    /// Record the public endpoint of the report. Diagnostic only.
    pub fn configure(&self, url: &str) {
        debug!("The url in use is {}", url);
        if url::Url::parse(url).is_err() {
            warn!("Configured url {} is not a valid URL", url);
        }
    }

    /// Ask the service manager for an immediate report run.
    pub fn refresh_report(&self) -> Result<()> {
        if let Err(e) = self.host.services.start(SERVICE_UNIT) {
            error!("Refreshing of the tracker failed: {}", e);
            return Err(e);
        }
        debug!("Tracker refresh requested");
        Ok(())
    }

    pub fn status(&self) -> TrackerStatus {
        TrackerStatus {
            provisioned: self.layout.is_provisioned(),
            units_installed: self.layout.unit_path(SERVICE_UNIT).is_file()
                && self.layout.unit_path(TIMER_UNIT).is_file(),
            service_unit: SERVICE_UNIT.to_string(),
            timer_unit: TIMER_UNIT.to_string(),
            proxy: self.settings.proxy.clone(),
        }
    }
}
