//! Request parameters and row types shared by connectors and the CLI.

use core::fmt;

use serde::{Deserialize, Serialize};

/// One provider row: an open mapping from field name to a JSON value.
///
/// The column set is owned by the provider and varies by statement type and
/// provider version, so rows are never coerced into fixed structs.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Typed key for identifying connectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectorKey(pub &'static str);

impl ConnectorKey {
    /// Construct a new typed connector key from a static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the inner static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

/// A ticker symbol as given by the caller.
///
/// No validation or normalization happens here; connectors decide how the
/// symbol is presented to their backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticker(String);

impl Ticker {
    /// Wrap a ticker string.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// Borrow the symbol.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reporting granularity, passed to the provider as an opaque string.
///
/// The well-known values are `"year"` (the default) and `"quarter"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period(String);

impl Period {
    /// Annual reporting period.
    pub const YEAR: &'static str = "year";
    /// Quarterly reporting period.
    pub const QUARTER: &'static str = "quarter";

    /// Wrap a period string.
    pub fn new(period: impl Into<String>) -> Self {
        Self(period.into())
    }

    /// Borrow the period string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Period {
    fn default() -> Self {
        Self(Self::YEAR.to_string())
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Label language for providers that localize field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English labels.
    #[default]
    En,
    /// Vietnamese labels.
    Vi,
}

impl Language {
    /// Two-letter language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Vi => "vi",
        }
    }
}

/// Parameters for income statement, balance sheet, and cash flow requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatementRequest {
    /// Reporting period.
    pub period: Period,
}

impl StatementRequest {
    /// Request for the given period.
    #[must_use]
    pub const fn new(period: Period) -> Self {
        Self { period }
    }
}

/// Parameters for financial ratio requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatioRequest {
    /// Reporting period.
    pub period: Period,
    /// Label language.
    pub language: Language,
    /// Drop rows that contain any missing (`null`) value.
    pub drop_missing: bool,
}

impl RatioRequest {
    /// Request with English labels and missing-value rows dropped.
    #[must_use]
    pub const fn new(period: Period) -> Self {
        Self {
            period,
            language: Language::En,
            drop_missing: true,
        }
    }
}

/// Parameters for news requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NewsRequest {
    /// Number of articles to ask the provider for; `0` means provider default.
    pub limit: usize,
}

/// Provider access level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessTier {
    /// Anonymous access.
    #[default]
    Guest,
    /// Access with a registered key.
    Elevated,
}

impl fmt::Display for AccessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guest => f.write_str("guest"),
            Self::Elevated => f.write_str("elevated"),
        }
    }
}

/// Keep the first `limit` rows; a `limit` of zero keeps everything.
#[must_use]
pub fn truncate_rows(mut rows: Vec<Record>, limit: usize) -> Vec<Record> {
    if limit > 0 && rows.len() > limit {
        rows.truncate(limit);
    }
    rows
}

/// Whether any field of the row is JSON `null`.
#[must_use]
pub fn has_missing(row: &Record) -> bool {
    row.values().any(serde_json::Value::is_null)
}
