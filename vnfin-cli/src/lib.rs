//! vnfin-cli
//!
//! Command-line adapter behind the `vnstock-cli` binary. Parses
//! `<command> <ticker> [period] [limit]`, optionally registers an access key,
//! dispatches to one fetch operation and prints a single JSON envelope.
//!
//! Exit status is 1 for invocations rejected before any provider call and 0
//! otherwise, even when the provider reports a failure.
#![warn(missing_docs)]

/// Invocation pipeline and exit status.
pub mod app;
/// Positional arguments and request validation.
pub mod args;
/// Environment configuration.
pub mod config;
pub mod console;
pub mod envelope;
/// Pre-dispatch errors.
pub mod error;
pub mod fetch;
/// Diagnostics on stderr.
pub mod logging;
/// Access-key registration.
pub mod register;

pub use app::{Outcome, execute, run};
pub use config::CliConfig;
pub use console::Console;
pub use envelope::Envelope;
pub use error::CliError;
