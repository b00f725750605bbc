//! # rundomizer_cli: Command-Line Front End
//!
//! Wires configuration, entropy selection and output rendering around the
//! generators in `rundomizer_core`. The `rundomizer` binary parses
//! arguments and dispatches to [`commands`].
//!
//! Configuration is read from `rundomizer.toml` (if present), then
//! overridden by `RUNDOMIZER_*` environment variables, then by command-line
//! flags.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod session;

pub use config::{ConfigError, RundomizerConfig};
pub use error::{CliError, Result};
pub use output::OutputFormat;
pub use session::{CliEntropy, Session};
