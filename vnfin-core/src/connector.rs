use std::io::Write;

use async_trait::async_trait;

use crate::VnfinError;
use crate::types::{
    AccessTier, ConnectorKey, NewsRequest, RatioRequest, Record, StatementRequest, Ticker,
};

/// Focused role trait for connectors that provide income statements.
#[async_trait]
pub trait IncomeStatementProvider: Send + Sync {
    /// Fetch income statement rows for the given ticker, in provider order.
    async fn income_statement(
        &self,
        ticker: &Ticker,
        req: &StatementRequest,
    ) -> Result<Vec<Record>, VnfinError>;
}

/// Focused role trait for connectors that provide balance sheets.
#[async_trait]
pub trait BalanceSheetProvider: Send + Sync {
    /// Fetch balance sheet rows for the given ticker, in provider order.
    async fn balance_sheet(
        &self,
        ticker: &Ticker,
        req: &StatementRequest,
    ) -> Result<Vec<Record>, VnfinError>;
}

/// Focused role trait for connectors that provide cash flow statements.
#[async_trait]
pub trait CashflowProvider: Send + Sync {
    /// Fetch cash flow rows for the given ticker, in provider order.
    async fn cash_flow(
        &self,
        ticker: &Ticker,
        req: &StatementRequest,
    ) -> Result<Vec<Record>, VnfinError>;
}

/// Focused role trait for connectors that provide financial ratios.
#[async_trait]
pub trait RatioProvider: Send + Sync {
    /// Fetch ratio rows for the given ticker, honoring language and missing-value options.
    async fn ratios(&self, ticker: &Ticker, req: &RatioRequest) -> Result<Vec<Record>, VnfinError>;
}

/// Focused role trait for connectors that provide news articles.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetch news articles for the given ticker.
    async fn news(&self, ticker: &Ticker, req: &NewsRequest) -> Result<Vec<Record>, VnfinError>;
}

/// Focused role trait for connectors that accept an access key.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Register an access key so later calls use the elevated tier.
    ///
    /// Connectors may print a confirmation to `console`; callers that own
    /// stdout are expected to hand in a silenced writer.
    async fn register(
        &self,
        api_key: &str,
        console: &mut (dyn Write + Send),
    ) -> Result<AccessTier, VnfinError>;

    /// Current access tier.
    fn tier(&self) -> AccessTier;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
pub trait VnConnector: Send + Sync {
    /// A stable identifier (e.g. "vnfin-tcbs").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Fixed data source identifier this connector reads from (e.g. "TCBS").
    fn source(&self) -> &'static str;

    /// If implemented, returns a trait object for income statements.
    fn as_income_statement_provider(&self) -> Option<&dyn IncomeStatementProvider> {
        None
    }
    /// If implemented, returns a trait object for balance sheets.
    fn as_balance_sheet_provider(&self) -> Option<&dyn BalanceSheetProvider> {
        None
    }
    /// If implemented, returns a trait object for cash flow statements.
    fn as_cashflow_provider(&self) -> Option<&dyn CashflowProvider> {
        None
    }
    /// If implemented, returns a trait object for financial ratios.
    fn as_ratio_provider(&self) -> Option<&dyn RatioProvider> {
        None
    }
    /// If implemented, returns a trait object for news articles.
    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        None
    }
    /// If implemented, returns a trait object for access-key registration.
    fn as_credential_provider(&self) -> Option<&dyn CredentialProvider> {
        None
    }
}
