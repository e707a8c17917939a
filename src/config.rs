//! Application configuration for result message resolution.
//!
//! `MessagesConfig` is read from a TOML file. It pins a preferred locale,
//! names the fallback locale for configured messages, and registers message
//! templates per locale. Those templates take precedence over the bundled
//! Fluent messages, which remain available as the parent source.

use std::collections::BTreeMap;
use std::fs;
use std::str::FromStr;

use camino::{Utf8Path, Utf8PathBuf};
use result_messages_common::i18n::{FALLBACK_LANGUAGE, Localiser, normalise_locale};
use result_messages_common::message::StaticMessageSource;
use serde::Deserialize;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

/// Errors raised while loading or applying configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration from {path}")]
    Read {
        /// Path that was read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML for [`MessagesConfig`].
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A locale tag in the configuration could not be parsed.
    #[error("invalid locale `{locale}` in configuration")]
    InvalidLocale {
        /// The offending tag.
        locale: String,
    },
}

/// Message configuration loaded from TOML.
///
/// ```
/// use result_messages::MessagesConfig;
///
/// let config = MessagesConfig::from_toml(concat!(
///     "locale = \"cy\"\n",
///     "[messages.en-GB]\n",
///     "i-greeting = \"Hello, {0}!\"\n",
/// ))
/// .expect("configuration should parse");
///
/// assert_eq!(config.locale(), Some("cy"));
/// assert_eq!(config.messages["en-GB"]["i-greeting"], "Hello, {0}!");
/// ```
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MessagesConfig {
    /// Preferred locale when none is given on the command line.
    ///
    /// Whitespace-only values are treated as absent, so `locale = ""` falls
    /// through to the system locale.
    pub locale: Option<String>,
    /// Locale consulted for configured messages when the requested locale has
    /// no template. Defaults to `en-GB`.
    pub fallback_locale: Option<String>,
    /// Message templates keyed by locale tag, then by code. Templates use
    /// `{0}`, `{1}`, … for positional arguments.
    pub messages: BTreeMap<String, BTreeMap<String, String>>,
}

impl MessagesConfig {
    /// Read and parse the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when it is not valid configuration.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        Self::load_with(path, |candidate| {
            fs::read_to_string(candidate).map_err(|source| ConfigError::Read {
                path: candidate.to_owned(),
                source,
            })
        })
    }

    /// Parse the configuration at `path` using the supplied reader.
    ///
    /// This keeps file access injectable so tests can stub it.
    ///
    /// # Errors
    ///
    /// Propagates the reader's error, or [`ConfigError::Parse`] when the text
    /// is not valid configuration.
    pub fn load_with<F>(path: &Utf8Path, read: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(&Utf8Path) -> Result<String, ConfigError>,
    {
        let source = read(path)?;
        Self::from_toml(&source)
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not valid configuration.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Returns the configured locale override, if present.
    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        normalise_locale(self.locale.as_deref())
    }

    /// Returns the fallback locale for configured messages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLocale`] when the tag cannot be parsed.
    pub fn fallback_locale(&self) -> Result<LanguageIdentifier, ConfigError> {
        normalise_locale(self.fallback_locale.as_deref()).map_or(Ok(FALLBACK_LANGUAGE), parse_locale)
    }

    /// Build the message source described by this configuration.
    ///
    /// Configured templates are consulted first; codes they do not define are
    /// resolved from the bundled Fluent messages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLocale`] when a locale tag cannot be
    /// parsed.
    pub fn message_source(&self) -> Result<StaticMessageSource, ConfigError> {
        let mut source = StaticMessageSource::new()
            .with_fallback_locale(self.fallback_locale()?)
            .with_parent(Localiser::default());

        for (tag, templates) in &self.messages {
            let locale = parse_locale(tag)?;
            source.add_messages(
                &locale,
                templates
                    .iter()
                    .map(|(code, template)| (code.as_str(), template.as_str())),
            );
        }

        Ok(source)
    }
}

fn parse_locale(tag: &str) -> Result<LanguageIdentifier, ConfigError> {
    LanguageIdentifier::from_str(&tag.replace('_', "-")).map_err(|_| ConfigError::InvalidLocale {
        locale: tag.to_owned(),
    })
}
