use thiserror::Error;

/// Failures detected before any provider call.
///
/// `Display` is exactly the message placed in the failure envelope.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CliError {
    /// No command argument at all.
    #[error("No command provided")]
    NoCommand,

    /// Ticker argument absent or empty.
    #[error("Ticker required")]
    TickerRequired,

    /// Limit argument is not a non-negative integer.
    #[error("Invalid limit: {0}")]
    InvalidLimit(String),

    /// Command name outside the supported set.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Argument parser rejected the invocation, e.g. a non-UTF-8 argument.
    #[error("{0}")]
    Usage(String),

    /// Environment configuration could not be turned into a connector.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl CliError {
    /// Keep the first line of a clap error, without its `error: ` prefix.
    pub(crate) fn usage(err: &clap::Error) -> Self {
        let rendered = err.to_string();
        let first = rendered.lines().next().unwrap_or_default().trim();
        Self::Usage(first.strip_prefix("error: ").unwrap_or(first).to_string())
    }
}
