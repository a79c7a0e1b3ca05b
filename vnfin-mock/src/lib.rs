use std::io::Write;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use vnfin_core::connector::{
    BalanceSheetProvider, CashflowProvider, CredentialProvider, IncomeStatementProvider,
    NewsProvider, RatioProvider, VnConnector,
};
use vnfin_core::{
    AccessTier, NewsRequest, Period, RatioRequest, Record, StatementRequest, Ticker, VnfinError,
    has_missing,
};

mod fixtures;

pub use fixtures::NEWS_COUNT;

/// Mock connector for CI-safe tests. Provides deterministic data from static fixtures.
///
/// The ticker `FAIL` forces a connector error on every data call, and the
/// access key `bad-key` is refused at registration.
pub struct MockConnector {
    news: bool,
    credentials: bool,
    tier: RwLock<AccessTier>,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Connector advertising every capability.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            news: true,
            credentials: true,
            tier: RwLock::new(AccessTier::Guest),
        }
    }

    /// Hide the news capability.
    #[must_use]
    pub fn without_news(mut self) -> Self {
        self.news = false;
        self
    }

    /// Hide the credential capability.
    #[must_use]
    pub fn without_credentials(mut self) -> Self {
        self.credentials = false;
        self
    }

    fn maybe_fail(ticker: &Ticker, capability: &'static str) -> Result<(), VnfinError> {
        if ticker.as_str() == "FAIL" {
            return Err(VnfinError::connector(
                "vnfin-mock",
                format!("forced failure: {capability}"),
            ));
        }
        Ok(())
    }

    fn check_period(period: &Period) -> Result<(), VnfinError> {
        match period.as_str() {
            Period::YEAR | Period::QUARTER => Ok(()),
            other => Err(VnfinError::InvalidArg(format!("unsupported period: {other}"))),
        }
    }
}

impl VnConnector for MockConnector {
    fn name(&self) -> &'static str {
        "vnfin-mock"
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }
    fn source(&self) -> &'static str {
        "MOCK"
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
        self.news.then_some(self as &dyn NewsProvider)
    }
    fn as_credential_provider(&self) -> Option<&dyn CredentialProvider> {
        self.credentials.then_some(self as &dyn CredentialProvider)
    }
}

#[async_trait]
impl IncomeStatementProvider for MockConnector {
    async fn income_statement(
        &self,
        ticker: &Ticker,
        req: &StatementRequest,
    ) -> Result<Vec<Record>, VnfinError> {
        Self::maybe_fail(ticker, "income-statement")?;
        Self::check_period(&req.period)?;
        Ok(fixtures::income_statement(ticker.as_str(), &req.period))
    }
}

#[async_trait]
impl BalanceSheetProvider for MockConnector {
    async fn balance_sheet(
        &self,
        ticker: &Ticker,
        req: &StatementRequest,
    ) -> Result<Vec<Record>, VnfinError> {
        Self::maybe_fail(ticker, "balance-sheet")?;
        Self::check_period(&req.period)?;
        Ok(fixtures::balance_sheet(ticker.as_str(), &req.period))
    }
}

#[async_trait]
impl CashflowProvider for MockConnector {
    async fn cash_flow(
        &self,
        ticker: &Ticker,
        req: &StatementRequest,
    ) -> Result<Vec<Record>, VnfinError> {
        Self::maybe_fail(ticker, "cash-flow")?;
        Self::check_period(&req.period)?;
        Ok(fixtures::cash_flow(ticker.as_str(), &req.period))
    }
}

#[async_trait]
impl RatioProvider for MockConnector {
    async fn ratios(&self, ticker: &Ticker, req: &RatioRequest) -> Result<Vec<Record>, VnfinError> {
        Self::maybe_fail(ticker, "ratios")?;
        Self::check_period(&req.period)?;
        let rows = fixtures::ratios(ticker.as_str(), &req.period);
        if req.drop_missing {
            Ok(rows.into_iter().filter(|r| !has_missing(r)).collect())
        } else {
            Ok(rows)
        }
    }
}

#[async_trait]
impl NewsProvider for MockConnector {
    async fn news(&self, ticker: &Ticker, req: &NewsRequest) -> Result<Vec<Record>, VnfinError> {
        Self::maybe_fail(ticker, "news")?;
        let mut rows = fixtures::news(ticker.as_str());
        if req.limit > 0 {
            rows.truncate(req.limit);
        }
        Ok(rows)
    }
}

#[async_trait]
impl CredentialProvider for MockConnector {
    async fn register(
        &self,
        api_key: &str,
        console: &mut (dyn Write + Send),
    ) -> Result<AccessTier, VnfinError> {
        // Printed before validation so callers can check the console guard on failure too.
        writeln!(console, "Mock: registering access key")
            .map_err(|e| VnfinError::Other(format!("console write failed: {e}")))?;
        match api_key.trim() {
            "" => Err(VnfinError::InvalidArg("access key is empty".into())),
            "bad-key" => Err(VnfinError::connector("vnfin-mock", "access key rejected")),
            _ => {
                let mut tier = self.tier.write().unwrap_or_else(PoisonError::into_inner);
                *tier = AccessTier::Elevated;
                Ok(*tier)
            }
        }
    }

    fn tier(&self) -> AccessTier {
        *self.tier.read().unwrap_or_else(PoisonError::into_inner)
    }
}
