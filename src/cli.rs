//! Command-line resolution of result messages.
//!
//! The binary resolves a single message code the same way an application
//! would: configured templates first, bundled Fluent messages second, and the
//! literal `--text` when neither knows the code.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::debug;
use result_messages_common::i18n::{available_locales, resolve_locale};
use result_messages_common::message::{
    MessageArgument, MessageError, ResultMessage, resolve_message_with_locale,
};
use thiserror::Error;

use crate::config::{ConfigError, MessagesConfig};

const LOG_TARGET: &str = "result_messages::cli";

/// Resolve a localised result message.
#[derive(Parser, Debug, Default)]
#[command(name = "result-messages")]
#[command(version, about)]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Resolve a bundled message in Welsh:\n",
    "    $ result-messages --locale cy e-required --arg E-bost\n\n",
    "  Fall back to literal text when the code is unknown:\n",
    "    $ result-messages e-custom --text \"Something went wrong.\"\n\n",
    "  Use templates from a configuration file:\n",
    "    $ result-messages --config messages.toml i-greeting --arg Siân\n",
))]
pub struct Cli {
    /// Message code to resolve. Omit it to print `--text` verbatim.
    pub code: Option<String>,

    /// Positional argument; repeat for `{0}`, `{1}`, …. Integer values are
    /// passed as numbers.
    #[arg(short, long = "arg", value_name = "VALUE")]
    pub args: Vec<String>,

    /// Literal text used when the code cannot be resolved.
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Locale to resolve for [default: configuration, then system locale].
    #[arg(short, long, value_name = "TAG")]
    pub locale: Option<String>,

    /// TOML configuration file with locale settings and message templates.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<Utf8PathBuf>,

    /// List the bundled locales and exit.
    #[arg(long)]
    pub list_locales: bool,
}

/// Errors reported by the command-line interface.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading or applying the configuration failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The message could not be resolved.
    #[error(transparent)]
    Message(#[from] MessageError),

    /// Neither a code nor literal text was supplied.
    #[error("a message code or --text is required")]
    MissingMessage,

    /// Failed to write output.
    #[error("failed to write output")]
    WriteFailed {
        /// The underlying error that caused the write to fail.
        #[source]
        source: std::io::Error,
    },
}

/// Build the message described by the command-line arguments.
///
/// # Errors
///
/// Returns [`CliError::MissingMessage`] when neither a code nor text is given.
pub fn message_from_cli(cli: &Cli) -> Result<ResultMessage, CliError> {
    let args = cli.args.iter().map(|value| parse_argument(value));

    match (&cli.code, &cli.text) {
        (Some(code), Some(text)) => {
            Ok(ResultMessage::from_code_with_args(code, args).with_text(text))
        }
        (Some(code), None) => Ok(ResultMessage::from_code_with_args(code, args)),
        (None, Some(text)) => Ok(ResultMessage::from_text(text)),
        (None, None) => Err(CliError::MissingMessage),
    }
}

fn parse_argument(value: &str) -> MessageArgument {
    value
        .parse::<i64>()
        .map_or_else(|_| MessageArgument::from(value), MessageArgument::Integer)
}

/// Execute the command described by `cli`, writing results to `stdout`.
///
/// # Errors
///
/// Returns a [`CliError`] when configuration cannot be loaded, the message
/// cannot be resolved, or output cannot be written.
pub fn run(cli: &Cli, stdout: &mut dyn Write) -> Result<(), CliError> {
    if cli.list_locales {
        for locale in available_locales() {
            write_line(stdout, locale)?;
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => {
            let loaded = MessagesConfig::load(path)?;
            debug!(
                target: LOG_TARGET,
                "loaded {} configured locale(s) from {path}",
                loaded.messages.len(),
            );
            loaded
        }
        None => MessagesConfig::default(),
    };

    let message = message_from_cli(cli)?;
    let selection = resolve_locale(cli.locale.as_deref(), config.locale());
    selection.log_outcome(LOG_TARGET);

    let source = config.message_source()?;
    let resolved = resolve_message_with_locale(&message, &source, selection.locale())?;
    write_line(stdout, &resolved)
}

fn write_line(stdout: &mut dyn Write, line: &str) -> Result<(), CliError> {
    writeln!(stdout, "{line}").map_err(|source| CliError::WriteFailed { source })
}

/// Map the outcome of [`run`] to a process exit code, reporting errors on
/// `stderr`.
pub fn exit_code_for_run_result(result: Result<(), CliError>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            if writeln!(stderr, "{err}").is_err() {
                // Best-effort reporting; the exit code still signals failure.
            }
            1
        }
    }
}
