//! Tracker service and timer units
//!
//! The service template gets one `Environment=` line per configured proxy,
//! always in the order HTTP, HTTPS, RSYNC, so identical proxy settings render
//! identical unit files. The timer is written as shipped.

use tracing::{debug, error};

use super::ServiceManager;
use crate::assets::{Asset, AssetLoader, SERVICE_UNIT, TIMER_UNIT};
use crate::common::fs::{ensure_dir, write_file};
use crate::config::{ProxyConfig, WorkspaceLayout};
use crate::error::Result;

/// Append the proxy environment lines to a service template
pub fn render_service_unit(template: &str, proxy: &ProxyConfig) -> String {
    let mut text = template.to_string();
    for (name, value) in proxy.env_vars() {
        text.push_str("\nEnvironment=");
        text.push_str(name);
        text.push('=');
        text.push_str(value);
    }
    text
}

/// Write both units, overwriting older versions, then enable the timer.
pub fn install_units(
    layout: &WorkspaceLayout,
    proxy: &ProxyConfig,
    assets: &dyn AssetLoader,
    services: &dyn ServiceManager,
) -> Result<()> {
    ensure_dir(&layout.unit_dir)?;

    let service = render_service_unit(&assets.load(Asset::ServiceUnit)?, proxy);
    let timer = assets.load(Asset::TimerUnit)?;

    write_file(&layout.unit_path(SERVICE_UNIT), &service, 0o644)?;
    write_file(&layout.unit_path(TIMER_UNIT), &timer, 0o644)?;
    debug!("Systemd units created");

    services.daemon_reload()?;
    if let Err(e) = services.enable_now(TIMER_UNIT) {
        error!("Failed to enable the {} timer: {}", TIMER_UNIT, e);
        return Err(e);
    }
    debug!("Timer {} enabled", TIMER_UNIT);

    Ok(())
}
