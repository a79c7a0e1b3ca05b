//! Environment-driven settings.

use std::time::Duration;

use vnfin_tcbs::TcbsConfig;

use crate::error::CliError;

/// Optional provider access key.
pub const API_KEY_ENV: &str = "VNSTOCK_API_KEY";
/// Override for the TCBS base URL.
pub const BASE_URL_ENV: &str = "VNFIN_TCBS_BASE_URL";
/// Per-request timeout in whole seconds.
pub const TIMEOUT_ENV: &str = "VNFIN_TIMEOUT_SECS";

/// Raw settings read from the environment. Validation is deferred to
/// [`CliConfig::tcbs`] so a bad value is reported like any other
/// pre-dispatch failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Access key; `None` when unset or empty.
    pub api_key: Option<String>,
    /// Base URL override.
    pub base_url: Option<String>,
    /// Timeout override, unparsed.
    pub timeout_secs: Option<String>,
}

impl CliConfig {
    /// Read settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, so tests need not touch process env.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self {
            api_key: non_empty(API_KEY_ENV),
            base_url: non_empty(BASE_URL_ENV),
            timeout_secs: non_empty(TIMEOUT_ENV),
        }
    }

    /// Connection settings for the TCBS connector.
    ///
    /// # Errors
    /// Returns `CliError::Config` for an unusable base URL or timeout.
    pub fn tcbs(&self) -> Result<TcbsConfig, CliError> {
        let mut cfg = TcbsConfig::default();
        if let Some(url) = &self.base_url {
            cfg = cfg
                .with_base_url(url)
                .map_err(|e| CliError::Config(format!("{BASE_URL_ENV}: {e}")))?;
        }
        if let Some(raw) = &self.timeout_secs {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                CliError::Config(format!("{TIMEOUT_ENV}: expected whole seconds, got {raw}"))
            })?;
            // 0 keeps the default of waiting indefinitely.
            if secs > 0 {
                cfg = cfg.with_timeout(Duration::from_secs(secs));
            }
        }
        Ok(cfg)
    }
}
