//! # bt-cli
//!
//! Panel management command-line interface.
//!
//! Provides lifecycle commands (start/stop/restart) for the two managed
//! project kinds:
//! - `go-project` - generic process-style projects
//! - `node` - Node.js projects
//!
//! # Architecture
//!
//! The CLI parses one command per invocation, builds a
//! [`bt_api::PanelClient`] from the global `--bt-url`/`--bt-key` flags, and
//! renders the panel's boolean/message result. A `status = false` answer or
//! any transport/decode failure exits non-zero.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::{Cli, Commands, Format, ProjectArgs, ProjectCommands};
pub use error::CliError;
pub use output::OutputFormat;
