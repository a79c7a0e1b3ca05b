use std::str::FromStr;

use clap::Parser;
use vnfin_core::{Period, Ticker};

use crate::error::CliError;

/// Rows returned when no limit argument is given.
pub const DEFAULT_LIMIT: usize = 10;

/// Positional arguments of `vnstock-cli <command> <ticker> [period] [limit]`.
///
/// Stdout carries nothing but the envelope. clap's `--help` and `--version`
/// flags are off and tokens starting with `-` are plain values, so
/// `vnstock-cli --help` is read as a command name.
#[derive(Parser, Debug, Default, Clone, PartialEq, Eq)]
#[command(
    name = "vnstock-cli",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// income_statement, balance_sheet, cash_flow, ratios or news
    #[arg(allow_hyphen_values = true)]
    pub command: Option<String>,

    /// Ticker symbol, e.g. FPT
    #[arg(allow_hyphen_values = true)]
    pub ticker: Option<String>,

    /// Reporting period: year (default) or quarter. Row limit for news.
    #[arg(allow_hyphen_values = true)]
    pub period: Option<String>,

    /// Maximum rows to return (default 10, 0 for all)
    #[arg(allow_hyphen_values = true)]
    pub limit: Option<String>,

    /// Anything past the fourth argument; ignored.
    #[arg(hide = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

/// Supported commands, matched exactly and case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Command {
    IncomeStatement,
    BalanceSheet,
    CashFlow,
    Ratios,
    News,
}

impl Command {
    /// Name as typed on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IncomeStatement => "income_statement",
            Self::BalanceSheet => "balance_sheet",
            Self::CashFlow => "cash_flow",
            Self::Ratios => "ratios",
            Self::News => "news",
        }
    }
}

impl FromStr for Command {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income_statement" => Ok(Self::IncomeStatement),
            "balance_sheet" => Ok(Self::BalanceSheet),
            "cash_flow" => Ok(Self::CashFlow),
            "ratios" => Ok(Self::Ratios),
            "news" => Ok(Self::News),
            other => Err(CliError::UnknownCommand(other.to_string())),
        }
    }
}

/// A validated invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// What to fetch.
    pub command: Command,
    /// Symbol passed through to the provider as given.
    pub ticker: Ticker,
    /// `year` unless given; ignored by news.
    pub period: Period,
    /// Row cap; 0 keeps every row.
    pub limit: usize,
}

impl Request {
    /// Validate parsed arguments: ticker, then command, then limit.
    ///
    /// # Errors
    /// Returns the pre-dispatch `CliError` for the first problem found.
    pub fn from_args(command: &str, args: &Args) -> Result<Self, CliError> {
        let ticker = match args.ticker.as_deref() {
            Some(t) if !t.is_empty() => Ticker::new(t),
            _ => return Err(CliError::TickerRequired),
        };
        let command = Command::from_str(command)?;
        let (period, raw_limit) = match command {
            Command::News => (Period::default(), args.period.as_deref()),
            _ => (
                args.period.clone().map(Period::new).unwrap_or_default(),
                args.limit.as_deref(),
            ),
        };
        let limit = raw_limit.map_or(Ok(DEFAULT_LIMIT), parse_limit)?;
        Ok(Self {
            command,
            ticker,
            period,
            limit,
        })
    }
}

fn parse_limit(raw: &str) -> Result<usize, CliError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| CliError::InvalidLimit(raw.to_string()))
}
