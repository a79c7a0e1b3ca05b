use std::ffi::OsString;
use std::io::Write;

use clap::Parser;
use vnfin_core::VnConnector;
use vnfin_tcbs::TcbsConnector;

use crate::args::{Args, Command, Request};
use crate::config::CliConfig;
use crate::console::Console;
use crate::envelope::Envelope;
use crate::error::CliError;
use crate::fetch;
use crate::register::register_access_key;

/// Envelope plus the process exit status that goes with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Document printed on stdout.
    pub envelope: Envelope,
    /// Process exit status.
    pub exit_code: u8,
}

impl Outcome {
    /// Pre-dispatch validation failure: exit 1.
    pub fn rejected(err: CliError) -> Self {
        tracing::debug!(error = %err, "invocation rejected");
        Self {
            envelope: Envelope::failure(err),
            exit_code: 1,
        }
    }

    /// Pipeline ran to completion; provider failures still exit 0.
    pub const fn completed(envelope: Envelope) -> Self {
        Self {
            envelope,
            exit_code: 0,
        }
    }
}

/// Dispatch a validated request to the matching fetch operation.
pub async fn dispatch(connector: &dyn VnConnector, req: &Request) -> Envelope {
    tracing::debug!(
        command = req.command.as_str(),
        ticker = %req.ticker,
        period = %req.period,
        limit = req.limit,
        source = connector.source(),
        "dispatching"
    );
    match req.command {
        Command::IncomeStatement => {
            fetch::income_statement(connector, &req.ticker, &req.period, req.limit).await
        }
        Command::BalanceSheet => {
            fetch::balance_sheet(connector, &req.ticker, &req.period, req.limit).await
        }
        Command::CashFlow => fetch::cash_flow(connector, &req.ticker, &req.period, req.limit).await,
        Command::Ratios => fetch::ratios(connector, &req.ticker, &req.period, req.limit).await,
        Command::News => fetch::news(connector, &req.ticker, req.limit).await,
    }
}

/// Run the pipeline for parsed arguments.
///
/// `connect` is only called once a command is present, so a missing
/// command is reported ahead of configuration problems.
pub async fn execute<C, F, W>(
    args: &Args,
    api_key: Option<&str>,
    connect: F,
    console: &mut Console<W>,
) -> Outcome
where
    C: VnConnector,
    F: FnOnce() -> Result<C, CliError>,
    W: Write + Send,
{
    let Some(command) = args.command.as_deref() else {
        return Outcome::rejected(CliError::NoCommand);
    };
    let connector = match connect() {
        Ok(c) => c,
        Err(e) => return Outcome::rejected(e),
    };

    let tier = register_access_key(&connector, api_key, console).await;
    tracing::debug!(registered = tier.is_some(), "access key step done");

    match Request::from_args(command, args) {
        Ok(req) => Outcome::completed(dispatch(&connector, &req).await),
        Err(e) => Outcome::rejected(e),
    }
}

/// Build the production connector from configuration.
///
/// # Errors
/// Returns `CliError::Config` when the settings or HTTP client are unusable.
pub fn connect(config: &CliConfig) -> Result<TcbsConnector, CliError> {
    let tcbs = config.tcbs()?;
    TcbsConnector::with_config(tcbs).map_err(|e| CliError::Config(e.to_string()))
}

/// Parse `argv`, run against the TCBS connector and print exactly one
/// envelope. Returns the process exit status.
pub async fn run<I, T, W>(argv: I, config: &CliConfig, console: &mut Console<W>) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write + Send,
{
    let outcome = match Args::try_parse_from(argv) {
        Ok(args) => {
            if !args.rest.is_empty() {
                tracing::debug!(ignored = ?args.rest, "extra arguments ignored");
            }
            execute(&args, config.api_key.as_deref(), || connect(config), console).await
        }
        Err(e) => Outcome::rejected(CliError::usage(&e)),
    };
    finish(outcome, console)
}

fn finish<W: Write>(outcome: Outcome, console: &mut Console<W>) -> u8 {
    match console.emit(&outcome.envelope) {
        Ok(()) => outcome.exit_code,
        Err(e) => {
            tracing::error!(error = %e, "failed to write envelope");
            1
        }
    }
}
