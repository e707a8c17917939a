//! Configuration and command-line surfaces for resolving result messages.
//!
//! The message model and sources live in `result-messages-common`; this crate
//! loads [`MessagesConfig`] from TOML and drives the `result-messages` binary.

pub mod cli;
pub mod config;

pub use cli::{Cli, CliError};
pub use config::{ConfigError, MessagesConfig};
pub use result_messages_common as common;
