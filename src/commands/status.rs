//! Status command implementation

use crate::error::{Result, TrackerError};
use crate::transition::{TrackerStatus, Transition};

/// Print the host status as text or JSON
pub fn run(transition: &Transition, json: bool) -> Result<()> {
    let status = transition.status();
    if json {
        println!("{}", to_json(&status)?);
    } else {
        print!("{}", render(&status));
    }
    Ok(())
}

/// Pretty-printed JSON form of the status
pub fn to_json(status: &TrackerStatus) -> Result<String> {
    serde_json::to_string_pretty(status).map_err(|e| TrackerError::StatusSerializeFailed {
        reason: e.to_string(),
    })
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

/// Human readable status report
pub fn render(status: &TrackerStatus) -> String {
    let mut out = String::new();
    out.push_str(&format!("Provisioned:     {}\n", yes_no(status.provisioned)));
    out.push_str(&format!(
        "Units installed: {} ({}, {})\n",
        yes_no(status.units_installed),
        status.service_unit,
        status.timer_unit
    ));
    if status.proxy.is_empty() {
        out.push_str("Proxy:           none\n");
    } else {
        for (name, value) in status.proxy.env_vars() {
            out.push_str(&format!("{name:<16} {value}\n"));
        }
    }
    out
}
