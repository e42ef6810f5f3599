//! Proxy settings supplied by the host runtime

use serde::Serialize;
use tracing::warn;

/// Normalized proxy settings.
///
/// `rsync` is derived from `http` and is present exactly when `http` is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProxyConfig {
    pub http: Option<String>,
    pub https: Option<String>,
    pub rsync: Option<String>,
}

impl ProxyConfig {
    /// Build the proxy settings from the raw HTTP and HTTPS proxy URLs.
    ///
    /// Empty values are treated the same as absent ones.
    pub fn new(http: Option<&str>, https: Option<&str>) -> Self {
        let http = http.filter(|v| !v.is_empty()).map(str::to_string);
        let https = https.filter(|v| !v.is_empty()).map(str::to_string);
        let rsync = http.as_deref().map(netloc);

        Self { http, https, rsync }
    }

    /// True when no proxy is configured at all
    pub fn is_empty(&self) -> bool {
        self.http.is_none() && self.https.is_none()
    }

    /// Environment variables derived from these settings, in the fixed order
    /// HTTP, HTTPS, RSYNC.
    pub fn env_vars(&self) -> Vec<(&'static str, &str)> {
        [
            ("HTTP_PROXY", self.http.as_deref()),
            ("HTTPS_PROXY", self.https.as_deref()),
            ("RSYNC_PROXY", self.rsync.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect()
    }
}

/// Network location of a URL: everything between `scheme://` and the path,
/// with userinfo and port exactly as written.
///
/// A URL without an authority yields an empty string.
pub fn netloc(raw: &str) -> String {
    if url::Url::parse(raw).is_err() {
        warn!("Proxy URL {} does not parse as a URL", raw);
    }

    let Some((_, rest)) = raw.split_once("://") else {
        return String::new();
    };
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    rest[..end].to_string()
}
