//! One operation per command. Each converts every provider failure into a
//! failure envelope; nothing here returns an error.

use vnfin_core::{
    Capability, NewsRequest, Period, RatioRequest, Record, StatementRequest, Ticker, VnConnector,
    VnfinError, truncate_rows,
};

use crate::envelope::Envelope;

/// Message used when the connector has no news capability.
pub const NEWS_UNAVAILABLE: &str = "News not available in current vnstock version";

fn contain(result: Result<Vec<Record>, VnfinError>, limit: usize, what: &str) -> Envelope {
    match result {
        Ok(rows) => {
            tracing::debug!(rows = rows.len(), limit, "{what} fetched");
            Envelope::success(truncate_rows(rows, limit))
        }
        Err(e) => {
            tracing::warn!(error = %e, "{what} failed");
            Envelope::failure(e)
        }
    }
}

/// Income statement rows for `period`, cut to `limit`.
///
/// A connector without the capability yields the same failure envelope as a
/// provider error.
pub async fn income_statement(
    connector: &dyn VnConnector,
    ticker: &Ticker,
    period: &Period,
    limit: usize,
) -> Envelope {
    let result = match connector.as_income_statement_provider() {
        Some(p) => {
            p.income_statement(ticker, &StatementRequest::new(period.clone()))
                .await
        }
        None => Err(Capability::IncomeStatement.into()),
    };
    contain(result, limit, "income statement")
}

/// Balance sheet rows for `period`, cut to `limit`.
pub async fn balance_sheet(
    connector: &dyn VnConnector,
    ticker: &Ticker,
    period: &Period,
    limit: usize,
) -> Envelope {
    let result = match connector.as_balance_sheet_provider() {
        Some(p) => {
            p.balance_sheet(ticker, &StatementRequest::new(period.clone()))
                .await
        }
        None => Err(Capability::BalanceSheet.into()),
    };
    contain(result, limit, "balance sheet")
}

/// Cash flow rows for `period`, cut to `limit`.
pub async fn cash_flow(
    connector: &dyn VnConnector,
    ticker: &Ticker,
    period: &Period,
    limit: usize,
) -> Envelope {
    let result = match connector.as_cashflow_provider() {
        Some(p) => p.cash_flow(ticker, &StatementRequest::new(period.clone())).await,
        None => Err(Capability::CashFlow.into()),
    };
    contain(result, limit, "cash flow")
}

/// Ratios always ask for English labels and drop rows with missing values.
pub async fn ratios(
    connector: &dyn VnConnector,
    ticker: &Ticker,
    period: &Period,
    limit: usize,
) -> Envelope {
    let result = match connector.as_ratio_provider() {
        Some(p) => p.ratios(ticker, &RatioRequest::new(period.clone())).await,
        None => Err(Capability::Ratios.into()),
    };
    contain(result, limit, "ratios")
}

/// Latest activity news. `limit` is passed to the provider as the page size
/// and applied again to the rows it returns.
///
/// Fails with [`NEWS_UNAVAILABLE`] when the connector offers no news.
pub async fn news(connector: &dyn VnConnector, ticker: &Ticker, limit: usize) -> Envelope {
    let Some(p) = connector.as_news_provider() else {
        tracing::debug!(connector = connector.name(), "no news capability");
        return Envelope::failure(NEWS_UNAVAILABLE);
    };
    let result = p.news(ticker, &NewsRequest { limit }).await;
    contain(result, limit, "news")
}
