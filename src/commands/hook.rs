//! Hook command implementation
//!
//! Maps host lifecycle events to controller operations:
//!
//! | Event                      | Operations                              |
//! |----------------------------|-----------------------------------------|
//! | `install`, `upgrade-charm` | `install`, `setup_systemd_units`        |
//! | `config-changed`           | `configure`, `setup_systemd_units`      |
//! | `start`                    | `start`                                 |
//! | `refresh`                  | `refresh_report`                        |
//!
//! Re-running `setup_systemd_units` on `config-changed` picks up proxy
//! changes, since units are always rewritten.

use tracing::info;

use crate::cli::Event;
use crate::error::Result;
use crate::transition::Transition;

/// Handle one lifecycle event
pub fn run(transition: &Transition, event: Event) -> Result<()> {
    info!("Handling {:?} event", event);
    match event {
        Event::Install | Event::UpgradeCharm => {
            transition.install()?;
            transition.setup_systemd_units()
        }
        Event::ConfigChanged => {
            super::configure(transition);
            transition.setup_systemd_units()
        }
        Event::Start => transition.start(),
        Event::Refresh => transition.refresh_report(),
    }
}
