use std::env;
use std::fmt;

use log::{debug, warn};
use unic_langid::LanguageIdentifier;

use super::FALLBACK_LANGUAGE;

/// Environment variables consulted for the system locale, highest priority first.
const SYSTEM_LOCALE_VARIABLES: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Source for a resolved locale.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LocaleSource {
    /// Locale supplied explicitly by the caller.
    ExplicitArgument,
    /// Locale taken from the configuration file.
    Configuration,
    /// Locale derived from `LC_ALL`, `LC_MESSAGES`, or `LANG`.
    System,
    /// Bundled fallback locale.
    Fallback,
}

impl fmt::Display for LocaleSource {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExplicitArgument => formatter.write_str("explicit locale override"),
            Self::Configuration => formatter.write_str("configuration locale"),
            Self::System => formatter.write_str("system locale"),
            Self::Fallback => formatter.write_str("fallback locale"),
        }
    }
}

/// Outcome of locale resolution including the effective locale and provenance.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LocaleSelection {
    locale: LanguageIdentifier,
    source: LocaleSource,
}

impl LocaleSelection {
    const fn new(locale: LanguageIdentifier, source: LocaleSource) -> Self {
        Self { locale, source }
    }

    /// Returns the effective locale source.
    #[must_use]
    pub const fn source(&self) -> LocaleSource {
        self.source
    }

    /// Returns the resolved locale.
    #[must_use]
    pub fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    /// Consumes the selection, yielding the locale.
    #[must_use]
    pub fn into_locale(self) -> LanguageIdentifier {
        self.locale
    }

    /// Emit a debug log summarising the resolved locale.
    pub fn log_outcome(&self, target: &str) {
        debug!(
            target: target,
            "resolved {} to `{}`",
            self.source(),
            self.locale(),
        );
    }
}

/// Parse a POSIX locale value such as `cy_GB.UTF-8@euro` into an identifier.
///
/// Encodings and modifiers are dropped and `_` separators become `-`. The
/// `C` and `POSIX` locales carry no language and yield `None`.
///
/// ```
/// use result_messages_common::i18n::parse_system_locale;
///
/// let locale = parse_system_locale("cy_GB.UTF-8").map(|id| id.to_string());
/// assert_eq!(locale.as_deref(), Some("cy-GB"));
/// assert!(parse_system_locale("C.UTF-8").is_none());
/// ```
#[must_use]
pub fn parse_system_locale(raw: &str) -> Option<LanguageIdentifier> {
    let tag = raw
        .split(['.', '@'])
        .next()
        .map(str::trim)
        .filter(|tag| !tag.is_empty())?;

    if tag.eq_ignore_ascii_case("C") || tag.eq_ignore_ascii_case("POSIX") {
        return None;
    }

    tag.replace('_', "-").parse().ok()
}

/// Read the process locale from `LC_ALL`, `LC_MESSAGES`, then `LANG`.
///
/// The first variable holding a non-blank value decides the outcome, even
/// when that value does not name a language.
#[must_use]
pub fn system_locale() -> Option<LanguageIdentifier> {
    let raw = SYSTEM_LOCALE_VARIABLES.iter().find_map(|name| {
        env::var(name)
            .ok()
            .filter(|value| !value.trim().is_empty())
    })?;

    parse_system_locale(&raw)
}

/// Locale used when a caller does not specify one: the system locale, or
/// [`FALLBACK_LOCALE`](super::FALLBACK_LOCALE) when the system has none.
#[must_use]
pub fn default_locale() -> LanguageIdentifier {
    system_locale().unwrap_or(FALLBACK_LANGUAGE)
}

/// Attempt to resolve a locale candidate from the given source.
fn try_resolve_candidate(source: LocaleSource, raw: Option<&str>) -> Option<LocaleSelection> {
    let candidate = normalise_locale(raw)?;

    match candidate.replace('_', "-").parse::<LanguageIdentifier>() {
        Ok(locale) => Some(LocaleSelection::new(locale, source)),
        Err(error) => {
            warn!(
                target: "result_messages::locale",
                "skipping unparsable {source} `{candidate}` ({error}); trying the next candidate",
            );
            None
        }
    }
}

/// Resolve a locale from an explicit override and configuration.
///
/// The resolver considers candidates in the following order:
///
/// 1. The explicit locale supplied by the caller.
/// 2. The configured locale.
/// 3. The system locale (see [`system_locale`]).
/// 4. [`FALLBACK_LOCALE`](super::FALLBACK_LOCALE) when no candidate is valid.
#[must_use]
pub fn resolve_locale(explicit: Option<&str>, configuration: Option<&str>) -> LocaleSelection {
    let candidates = [
        (LocaleSource::ExplicitArgument, explicit),
        (LocaleSource::Configuration, configuration),
    ];

    candidates
        .into_iter()
        .find_map(|(source, raw)| try_resolve_candidate(source, raw))
        .or_else(|| system_locale().map(|locale| LocaleSelection::new(locale, LocaleSource::System)))
        .unwrap_or_else(|| LocaleSelection::new(FALLBACK_LANGUAGE, LocaleSource::Fallback))
}

/// Trim whitespace and discard empty locale candidates.
#[must_use]
pub fn normalise_locale(input: Option<&str>) -> Option<&str> {
    input
        .map(str::trim)
        .and_then(|value| if value.is_empty() { None } else { Some(value) })
}
