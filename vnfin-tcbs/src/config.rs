//! Connection settings for the TCBS connector.

use std::time::Duration;

use url::Url;
use vnfin_core::VnfinError;

/// Public TCBS analysis API host.
pub const DEFAULT_BASE_URL: &str = "https://apipubaws.tcbs.com.vn/";

/// Browser-like user agent; the public endpoints reject bare clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Settings used to build the HTTP client behind [`crate::TcbsConnector`].
#[derive(Debug, Clone)]
pub struct TcbsConfig {
    /// Absolute http(s) URL all endpoint paths are joined onto. Always ends with `/`.
    base_url: String,
    /// Optional per-request timeout. `None` waits as long as the provider takes.
    pub timeout: Option<Duration>,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl TcbsConfig {
    /// Replace the base URL (e.g. a proxy or a local mock server).
    ///
    /// # Errors
    /// Returns `InvalidArg` if `base_url` is not an absolute http(s) URL.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, VnfinError> {
        let mut url = Url::parse(base_url)
            .map_err(|e| VnfinError::InvalidArg(format!("invalid base url {base_url}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(VnfinError::InvalidArg(format!(
                "invalid base url {base_url}: unsupported scheme"
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        self.base_url = url.into();
        Ok(self)
    }

    /// Set a per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The normalized base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, VnfinError> {
        Url::parse(&self.base_url)
            .and_then(|base| base.join(path))
            .map_err(|e| VnfinError::InvalidArg(format!("invalid endpoint {path}: {e}")))
    }
}

impl Default for TcbsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_trailing_slash() {
        let cfg = TcbsConfig::default()
            .with_base_url("http://127.0.0.1:8080/proxy")
            .unwrap();
        assert_eq!(cfg.base_url(), "http://127.0.0.1:8080/proxy/");
        let url = cfg.endpoint("tcanalysis/v1/finance/FPT/cash_flow").unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8080/proxy/tcanalysis/v1/finance/FPT/cash_flow"
        );
    }

    #[test]
    fn rejects_non_http_schemes() {
        assert!(TcbsConfig::default().with_base_url("ftp://example.com").is_err());
        assert!(TcbsConfig::default().with_base_url("not a url").is_err());
    }

    #[test]
    fn default_has_no_timeout() {
        let cfg = TcbsConfig::default();
        assert!(cfg.timeout.is_none());
        assert_eq!(cfg.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn default_base_url_resolves_endpoints() {
        let cfg = TcbsConfig::default();
        assert_eq!(
            cfg.with_base_url(DEFAULT_BASE_URL).unwrap().base_url(),
            DEFAULT_BASE_URL
        );
        let url = TcbsConfig::default()
            .endpoint("tcanalysis/v1/ticker/FPT/activity-news")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://apipubaws.tcbs.com.vn/tcanalysis/v1/ticker/FPT/activity-news"
        );
    }
}
