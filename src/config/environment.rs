//! Private process environment handed to subprocesses

use std::collections::BTreeMap;

use tracing::debug;

use super::proxy::ProxyConfig;

/// A copy of a base environment overlaid with the proxy variables.
///
/// Building one never touches the environment of the running process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessEnvironment {
    vars: BTreeMap<String, String>,
}

impl ProcessEnvironment {
    /// Copy `base` and overlay `HTTP_PROXY`, `HTTPS_PROXY` and `RSYNC_PROXY`
    /// for every proxy that is set.
    pub fn new<I, K, V>(base: I, proxy: &ProxyConfig) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut vars: BTreeMap<String, String> = base
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        for (name, value) in proxy.env_vars() {
            debug!("Setting {} env to {}", name, value);
            vars.insert(name.to_string(), value.to_string());
        }

        Self { vars }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Return a copy with one extra variable set
    #[must_use]
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Proxy to use for a repository URL, chosen by scheme the way git does
    pub fn proxy_for_url(&self, url: &str) -> Option<&str> {
        if url.starts_with("https://") {
            self.get("HTTPS_PROXY")
        } else if url.starts_with("http://") {
            self.get("HTTP_PROXY")
        } else {
            None
        }
    }
}
