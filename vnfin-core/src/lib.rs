//! vnfin-core
//!
//! Core types, traits, and errors shared across the vnfin workspace.
//!
//! - `types`: request parameters, tickers, and the open `Record` row type.
//! - `connector`: the `VnConnector` trait and capability provider traits.
//! - `error`: the unified `VnfinError`.
//!
//! Connectors are async (`async-trait`) and assume a Tokio runtime in the
//! binaries that drive them, but nothing in this crate spawns tasks.
#![warn(missing_docs)]

/// Capability labels used in errors and logs.
pub mod capability;
/// Connector capability traits and the primary `VnConnector` interface.
pub mod connector;
/// Unified error type.
pub mod error;
pub mod types;

pub use capability::Capability;
pub use connector::VnConnector;
pub use error::VnfinError;
pub use types::*;
