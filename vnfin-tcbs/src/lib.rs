//! vnfin-tcbs
//!
//! Connector that implements `VnConnector` on top of the public TCBS analysis
//! API. Exposes income statements, balance sheets, cash flow, financial
//! ratios, activity news, and access-key registration.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `reqwest`.
pub mod adapter;
/// Connection settings.
pub mod config;

use std::io::Write;
use std::sync::Arc;

use adapter::{
    CloneArcAdapters, Credentials, RealAdapter, Report, ReportPeriod, TcbsFinance, TcbsNews,
};
use async_trait::async_trait;
use vnfin_core::{
    AccessTier, Capability, ConnectorKey, Language, NewsRequest, Period, RatioRequest, Record,
    StatementRequest, Ticker, VnfinError, has_missing,
    connector::{
        BalanceSheetProvider, CashflowProvider, CredentialProvider, IncomeStatementProvider,
        NewsProvider, RatioProvider, VnConnector,
    },
};

pub use config::TcbsConfig;

/// Public connector type. Production users construct it with `TcbsConnector::new_default()`.
pub struct TcbsConnector {
    finance: Arc<dyn TcbsFinance>,
    news: Option<Arc<dyn TcbsNews>>,
    credentials: Credentials,
}

impl TcbsConnector {
    /// Static connector key.
    pub const KEY: ConnectorKey = ConnectorKey::new("vnfin-tcbs");

    /// Fixed data source identifier.
    pub const SOURCE: &'static str = "TCBS";

    /// Build against the public TCBS host with default settings.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new_default() -> Result<Self, VnfinError> {
        Self::with_config(TcbsConfig::default())
    }

    /// Build with explicit connection settings.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_config(config: TcbsConfig) -> Result<Self, VnfinError> {
        let credentials = Credentials::default();
        let adapter = RealAdapter::new(config, credentials.clone())?;
        Ok(Self::from_parts(&adapter, credentials))
    }

    /// For tests/injection: build from any adapter bundle.
    ///
    /// Registered keys are tracked by the connector but never reach the
    /// injected adapters.
    pub fn from_adapter<A: CloneArcAdapters + 'static>(adapter: &A) -> Self {
        Self::from_parts(adapter, Credentials::default())
    }

    fn from_parts<A: CloneArcAdapters + ?Sized>(adapter: &A, credentials: Credentials) -> Self {
        Self {
            finance: adapter.clone_arc_finance(),
            news: adapter.clone_arc_news(),
            credentials,
        }
    }

    fn normalize_error(e: VnfinError, what: &str) -> VnfinError {
        match e {
            VnfinError::Other(msg) => VnfinError::connector(Self::KEY.as_str(), msg),
            VnfinError::NotFound { .. } => VnfinError::not_found(what.to_string()),
            other => other,
        }
    }

    async fn fetch_report(
        &self,
        report: Report,
        ticker: &Ticker,
        period: &Period,
        language: Language,
    ) -> Result<Vec<Record>, VnfinError> {
        let period = ReportPeriod::try_from(period)?;
        let what = format!("{} for {ticker}", report.label());
        self.finance
            .report(report, ticker.as_str(), period, language)
            .await
            .map_err(|e| Self::normalize_error(e, &what))
    }
}

#[async_trait]
impl IncomeStatementProvider for TcbsConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "vnfin::tcbs",
            skip(self, ticker, req),
            fields(ticker = %ticker, period = %req.period),
        )
    )]
    async fn income_statement(
        &self,
        ticker: &Ticker,
        req: &StatementRequest,
    ) -> Result<Vec<Record>, VnfinError> {
        self.fetch_report(Report::IncomeStatement, ticker, &req.period, Language::En)
            .await
    }
}

#[async_trait]
impl BalanceSheetProvider for TcbsConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "vnfin::tcbs",
            skip(self, ticker, req),
            fields(ticker = %ticker, period = %req.period),
        )
    )]
    async fn balance_sheet(
        &self,
        ticker: &Ticker,
        req: &StatementRequest,
    ) -> Result<Vec<Record>, VnfinError> {
        self.fetch_report(Report::BalanceSheet, ticker, &req.period, Language::En)
            .await
    }
}

#[async_trait]
impl CashflowProvider for TcbsConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "vnfin::tcbs",
            skip(self, ticker, req),
            fields(ticker = %ticker, period = %req.period),
        )
    )]
    async fn cash_flow(
        &self,
        ticker: &Ticker,
        req: &StatementRequest,
    ) -> Result<Vec<Record>, VnfinError> {
        self.fetch_report(Report::CashFlow, ticker, &req.period, Language::En)
            .await
    }
}

#[async_trait]
impl RatioProvider for TcbsConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "vnfin::tcbs",
            skip(self, ticker, req),
            fields(ticker = %ticker, period = %req.period, lang = req.language.code()),
        )
    )]
    async fn ratios(&self, ticker: &Ticker, req: &RatioRequest) -> Result<Vec<Record>, VnfinError> {
        let rows = self
            .fetch_report(Report::Ratios, ticker, &req.period, req.language)
            .await?;
        if !req.drop_missing {
            return Ok(rows);
        }
        #[cfg(feature = "tracing")]
        let before = rows.len();
        let kept: Vec<Record> = rows.into_iter().filter(|r| !has_missing(r)).collect();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "vnfin::tcbs",
            dropped = before - kept.len(),
            "dropped ratio rows with missing values"
        );
        Ok(kept)
    }
}

#[async_trait]
impl NewsProvider for TcbsConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "vnfin::tcbs",
            skip(self, ticker, req),
            fields(ticker = %ticker, limit = req.limit),
        )
    )]
    async fn news(&self, ticker: &Ticker, req: &NewsRequest) -> Result<Vec<Record>, VnfinError> {
        let news = self.news.as_ref().ok_or(Capability::News)?;
        let what = format!("news for {ticker}");
        news.news(ticker.as_str(), req.limit)
            .await
            .map_err(|e| Self::normalize_error(e, &what))
    }
}

#[async_trait]
impl CredentialProvider for TcbsConnector {
    async fn register(
        &self,
        api_key: &str,
        console: &mut (dyn Write + Send),
    ) -> Result<AccessTier, VnfinError> {
        let key = api_key.trim();
        if key.is_empty() {
            return Err(VnfinError::InvalidArg("access key is empty".into()));
        }
        if key.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(VnfinError::InvalidArg(
                "access key contains whitespace or control characters".into(),
            ));
        }
        self.credentials.set(key.to_string());
        writeln!(
            console,
            "{}: access key registered, using {} tier",
            Self::SOURCE,
            AccessTier::Elevated
        )
        .map_err(|e| VnfinError::Other(format!("console write failed: {e}")))?;
        Ok(self.credentials.tier())
    }

    fn tier(&self) -> AccessTier {
        self.credentials.tier()
    }
}

impl VnConnector for TcbsConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "TCBS"
    }

    fn source(&self) -> &'static str {
        Self::SOURCE
    }

    fn as_income_statement_provider(&self) -> Option<&dyn IncomeStatementProvider> {
        Some(self as &dyn IncomeStatementProvider)
    }
    fn as_balance_sheet_provider(&self) -> Option<&dyn BalanceSheetProvider> {
        Some(self as &dyn BalanceSheetProvider)
    }
    fn as_cashflow_provider(&self) -> Option<&dyn CashflowProvider> {
        Some(self as &dyn CashflowProvider)
    }
    fn as_ratio_provider(&self) -> Option<&dyn RatioProvider> {
        Some(self as &dyn RatioProvider)
    }
    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        if self.news.is_some() {
            Some(self as &dyn NewsProvider)
        } else {
            None
        }
    }
    fn as_credential_provider(&self) -> Option<&dyn CredentialProvider> {
        Some(self as &dyn CredentialProvider)
    }
}
