//! track-reveal CLI library
//!
//! Argument parsing, configuration loading and the command handlers behind
//! the `track-reveal` binary.

#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]
#![warn(missing_docs)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;

pub use commands::{
    Cli, Commands, ConfigArgs, InspectArgs, InspectFormat, PlayArgs, RecordArgs, SnapshotArgs,
};
pub use config::{CliConfig, Verbosity};
pub use error::{CliError, CliResult};
