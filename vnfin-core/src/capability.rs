use core::fmt;
use serde::{Deserialize, Serialize};

/// High-level capability labels for errors and telemetry.
///
/// These map one-to-one with the provider role traits in
/// [`crate::connector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Fundamentals: income statement rows.
    IncomeStatement,
    /// Fundamentals: balance sheet rows.
    BalanceSheet,
    /// Fundamentals: cash flow rows.
    CashFlow,
    /// Fundamentals: financial ratio rows.
    Ratios,
    /// Recent news articles for a ticker.
    News,
    /// Access-key registration for an elevated tier.
    Credentials,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IncomeStatement => "income-statement",
            Self::BalanceSheet => "balance-sheet",
            Self::CashFlow => "cash-flow",
            Self::Ratios => "ratios",
            Self::News => "news",
            Self::Credentials => "credentials",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Capability> for crate::VnfinError {
    fn from(cap: Capability) -> Self {
        Self::unsupported(cap.as_str())
    }
}
