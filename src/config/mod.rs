//! Configuration of a tracker host
//!
//! This module contains:
//! - `proxy` - proxy settings supplied by the host runtime
//! - `environment` - the private subprocess environment derived from them
//! - `layout` - fixed filesystem paths
//! - `settings` - repository source, endpoint URL and the settings file

pub mod environment;
pub mod layout;
pub mod proxy;
pub mod settings;

// Re-export commonly used types
pub use environment::ProcessEnvironment;
pub use layout::WorkspaceLayout;
pub use proxy::ProxyConfig;
pub use settings::{RepoSource, Settings, SettingsFile};
