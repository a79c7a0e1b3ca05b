use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;
use vnfin_core::{AccessTier, Language, Period, Record, VnfinError};

use crate::config::TcbsConfig;

const CONNECTOR: &str = "vnfin-tcbs";

/// Page size TCBS uses when no explicit news size is requested.
pub const DEFAULT_NEWS_PAGE_SIZE: usize = 100;

/// Financial reports served under `tcanalysis/v1/finance/{symbol}/...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    /// Income statement.
    IncomeStatement,
    /// Balance sheet.
    BalanceSheet,
    /// Cash flow statement.
    CashFlow,
    /// Financial ratios.
    Ratios,
}

impl Report {
    /// Last path segment of the report endpoint.
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::IncomeStatement => "income_statement",
            Self::BalanceSheet => "balance_sheet",
            Self::CashFlow => "cash_flow",
            Self::Ratios => "financialratio",
        }
    }

    /// Human-readable label used in error contexts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::IncomeStatement => "income statement",
            Self::BalanceSheet => "balance sheet",
            Self::CashFlow => "cash flow",
            Self::Ratios => "ratios",
        }
    }
}

/// Reporting granularity understood by the finance endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    /// Annual figures (`yearly=0`).
    Year,
    /// Quarterly figures (`yearly=1`).
    Quarter,
}

impl ReportPeriod {
    /// Value of the `yearly` query parameter.
    #[must_use]
    pub const fn yearly_flag(self) -> &'static str {
        match self {
            Self::Year => "0",
            Self::Quarter => "1",
        }
    }
}

impl TryFrom<&Period> for ReportPeriod {
    type Error = VnfinError;

    fn try_from(period: &Period) -> Result<Self, Self::Error> {
        match period.as_str() {
            Period::YEAR => Ok(Self::Year),
            Period::QUARTER => Ok(Self::Quarter),
            other => Err(VnfinError::InvalidArg(format!(
                "unsupported period: {other} (expected year or quarter)"
            ))),
        }
    }
}

/// Registered access key shared between the connector and its HTTP adapter.
#[derive(Debug, Clone, Default)]
pub struct Credentials(Arc<RwLock<Option<String>>>);

impl Credentials {
    /// Store the key; later requests carry it as a bearer token.
    pub fn set(&self, key: String) {
        let mut slot = self.0.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(key);
    }

    /// Currently registered key, if any.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.0.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Tier implied by the stored key.
    #[must_use]
    pub fn tier(&self) -> AccessTier {
        if self.get().is_some() {
            AccessTier::Elevated
        } else {
            AccessTier::Guest
        }
    }
}

/// Finance report abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait TcbsFinance: Send + Sync {
    /// Fetch all rows of `report` for `symbol`. Default returns `unsupported`.
    async fn report(
        &self,
        report: Report,
        symbol: &str,
        period: ReportPeriod,
        language: Language,
    ) -> Result<Vec<Record>, VnfinError> {
        let _ = (symbol, period, language);
        Err(VnfinError::unsupported(report.path_segment()))
    }
}

/// News abstraction for fetching activity news.
#[async_trait]
pub trait TcbsNews: Send + Sync {
    /// Fetch up to `size` news rows for `symbol`.
    async fn news(&self, symbol: &str, size: usize) -> Result<Vec<Record>, VnfinError>;
}

/// Real adapter backed by a single `reqwest::Client`.
/// `reqwest::Client` is `Clone + Send + Sync`, so no external locking is needed.
#[derive(Clone)]
pub struct RealAdapter {
    http: reqwest::Client,
    config: TcbsConfig,
    credentials: Credentials,
}

impl RealAdapter {
    /// Build the HTTP client from `config`.
    ///
    /// # Errors
    /// Returns an error if the underlying `reqwest::Client` cannot be built.
    pub fn new(config: TcbsConfig, credentials: Credentials) -> Result<Self, VnfinError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| VnfinError::connector(CONNECTOR, format!("http client: {e}")))?;
        Ok(Self {
            http,
            config,
            credentials,
        })
    }

    fn headers(&self, language: Language) -> Result<HeaderMap, VnfinError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(language.code()));
        if let Some(key) = self.credentials.get() {
            let value = HeaderValue::from_str(&format!("Bearer {key}"))
                .map_err(|_| VnfinError::InvalidArg("access key is not a valid header".into()))?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    async fn get_json(
        &self,
        path: &str,
        query: &[(&str, String)],
        language: Language,
        context: &str,
    ) -> Result<Value, VnfinError> {
        let url = self.config.endpoint(path)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "vnfin::tcbs", %url, context, "GET");

        let resp = self
            .http
            .get(url)
            .headers(self.headers(language)?)
            .query(query)
            .send()
            .await
            .map_err(|e| VnfinError::connector(CONNECTOR, format!("request failed: {context}: {e}")))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(VnfinError::not_found(context.to_string()));
        }
        if !status.is_success() {
            return Err(VnfinError::connector(
                CONNECTOR,
                format!("status {}: {context}", status.as_u16()),
            ));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| VnfinError::connector(CONNECTOR, format!("read body: {context}: {e}")))?;
        serde_json::from_str(&body)
            .map_err(|e| VnfinError::Data(format!("malformed response for {context}: {e}")))
    }
}

fn into_records(value: Value, context: &str) -> Result<Vec<Record>, VnfinError> {
    let Value::Array(items) = value else {
        return Err(VnfinError::Data(format!(
            "expected an array of rows for {context}"
        )));
    };
    items
        .into_iter()
        .map(|item| match item {
            Value::Object(row) => Ok(row),
            _ => Err(VnfinError::Data(format!("expected object rows for {context}"))),
        })
        .collect()
}

/// Unwrap `{"listActivityNews": [...]}`; a bare array is accepted as-is.
fn news_records(value: Value, context: &str) -> Result<Vec<Record>, VnfinError> {
    match value {
        Value::Object(mut obj) => match obj.remove("listActivityNews") {
            Some(Value::Null) | None => Ok(Vec::new()),
            Some(list) => into_records(list, context),
        },
        other => into_records(other, context),
    }
}

#[async_trait]
impl TcbsFinance for RealAdapter {
    async fn report(
        &self,
        report: Report,
        symbol: &str,
        period: ReportPeriod,
        language: Language,
    ) -> Result<Vec<Record>, VnfinError> {
        let symbol = symbol.to_uppercase();
        let path = format!(
            "tcanalysis/v1/finance/{symbol}/{}",
            report.path_segment()
        );
        let query = [
            ("yearly", period.yearly_flag().to_string()),
            ("isAll", "true".to_string()),
        ];
        let context = format!("{} for {symbol}", report.label());
        let value = self.get_json(&path, &query, language, &context).await?;
        into_records(value, &context)
    }
}

#[async_trait]
impl TcbsNews for RealAdapter {
    async fn news(&self, symbol: &str, size: usize) -> Result<Vec<Record>, VnfinError> {
        let symbol = symbol.to_uppercase();
        let path = format!("tcanalysis/v1/ticker/{symbol}/activity-news");
        let size = if size == 0 { DEFAULT_NEWS_PAGE_SIZE } else { size };
        let query = [("page", "0".to_string()), ("size", size.to_string())];
        let context = format!("news for {symbol}");
        let value = self
            .get_json(&path, &query, Language::default(), &context)
            .await?;
        news_records(value, &context)
    }
}

struct NoFinance;

impl TcbsFinance for NoFinance {}

/// Helper trait to split a concrete adapter into arc trait objects.
///
/// Defaults leave every report unsupported and news absent, so tests only
/// override what they exercise.
pub trait CloneArcAdapters {
    /// Clone as `Arc<dyn TcbsFinance>`.
    fn clone_arc_finance(&self) -> Arc<dyn TcbsFinance> {
        Arc::new(NoFinance)
    }
    /// Clone as `Arc<dyn TcbsNews>`; `None` means the news capability is absent.
    fn clone_arc_news(&self) -> Option<Arc<dyn TcbsNews>> {
        None
    }
}

impl CloneArcAdapters for RealAdapter {
    fn clone_arc_finance(&self) -> Arc<dyn TcbsFinance> {
        Arc::new(self.clone()) as Arc<dyn TcbsFinance>
    }
    fn clone_arc_news(&self) -> Option<Arc<dyn TcbsNews>> {
        Some(Arc::new(self.clone()) as Arc<dyn TcbsNews>)
    }
}

#[cfg(feature = "test-adapters")]
impl dyn TcbsFinance {
    /// Build a `TcbsFinance` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn TcbsFinance>
    where
        F: Send
            + Sync
            + 'static
            + Fn(Report, String, ReportPeriod, Language) -> Result<Vec<Record>, VnfinError>,
    {
        struct FnFinance<F>(F);
        #[async_trait]
        impl<F> TcbsFinance for FnFinance<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(Report, String, ReportPeriod, Language) -> Result<Vec<Record>, VnfinError>,
        {
            async fn report(
                &self,
                report: Report,
                symbol: &str,
                period: ReportPeriod,
                language: Language,
            ) -> Result<Vec<Record>, VnfinError> {
                (self.0)(report, symbol.to_string(), period, language)
            }
        }
        Arc::new(FnFinance(f))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn TcbsNews {
    /// Build a `TcbsNews` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn TcbsNews>
    where
        F: Send + Sync + 'static + Fn(String, usize) -> Result<Vec<Record>, VnfinError>,
    {
        struct FnNews<F>(F);
        #[async_trait]
        impl<F> TcbsNews for FnNews<F>
        where
            F: Send + Sync + 'static + Fn(String, usize) -> Result<Vec<Record>, VnfinError>,
        {
            async fn news(&self, symbol: &str, size: usize) -> Result<Vec<Record>, VnfinError> {
                (self.0)(symbol.to_string(), size)
            }
        }
        Arc::new(FnNews(f))
    }
}
