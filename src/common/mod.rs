//! Helpers shared by the provisioning steps

pub mod fs;
pub mod process;
