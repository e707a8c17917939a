use std::borrow::Cow;
use std::collections::HashMap;
use std::str::FromStr;

use fluent_templates::Loader;
use fluent_templates::fluent_bundle::FluentValue;
use unic_langid::LanguageIdentifier;

use super::locales::supports_locale;
use super::{FALLBACK_LANGUAGE, LOADER};
use crate::message::{MessageArgument, MessageError, MessageSource};

/// `HashMap` wrapper used when passing Fluent arguments to lookups.
pub type Arguments = HashMap<Cow<'static, str>, FluentValue<'static>>;

/// Convert positional arguments into Fluent variables `arg0`, `arg1`, ….
///
/// ```
/// use result_messages_common::i18n::fluent_arguments;
/// use result_messages_common::message::MessageArgument;
///
/// let args = fluent_arguments(&[MessageArgument::from("Order"), 7_i32.into()]);
/// assert_eq!(args.len(), 2);
/// assert!(args.contains_key("arg0"));
/// assert!(args.contains_key("arg1"));
/// ```
#[must_use]
pub fn fluent_arguments(args: &[MessageArgument]) -> Arguments {
    args.iter()
        .enumerate()
        .map(|(index, argument)| (Cow::Owned(format!("arg{index}")), fluent_value(argument)))
        .collect()
}

fn fluent_value(argument: &MessageArgument) -> FluentValue<'static> {
    match argument {
        MessageArgument::Text(value) => FluentValue::from(value.clone()),
        MessageArgument::Integer(value) => FluentValue::from(*value),
        MessageArgument::Boolean(value) => FluentValue::from(value.to_string()),
    }
}

/// Resolve bundled Fluent messages.
///
/// The localiser eagerly falls back to `en-GB` when the requested locale is
/// not bundled. As a [`MessageSource`] it honours the locale passed to each
/// lookup instead, letting Fluent walk from that locale to `en-GB`.
#[derive(Clone, Debug)]
pub struct Localiser {
    language: LanguageIdentifier,
    tag: String,
    fallback_used: bool,
}

impl Localiser {
    /// Create a localiser for `locale`, falling back to [`FALLBACK_LOCALE`].
    ///
    /// ```
    /// use result_messages_common::i18n::{available_locales, Localiser};
    ///
    /// let locale = Localiser::new(Some("cy"));
    /// assert!(available_locales().contains(&"cy".to_string()));
    /// assert_eq!(locale.locale(), "cy");
    /// assert!(!locale.used_fallback());
    ///
    /// let fallback = Localiser::new(Some("zz"));
    /// assert_eq!(fallback.locale(), "en-GB");
    /// assert!(fallback.used_fallback());
    /// ```
    ///
    /// [`FALLBACK_LOCALE`]: super::FALLBACK_LOCALE
    #[must_use]
    pub fn new(locale: Option<&str>) -> Self {
        match locale {
            Some(value) if supports_locale(value) => match LanguageIdentifier::from_str(value) {
                Ok(identifier) => Self::from_language(identifier, false),
                Err(_) => Self::fallback(),
            },
            _ => Self::fallback(),
        }
    }

    /// Return the resolved locale identifier.
    #[must_use]
    pub fn language(&self) -> &LanguageIdentifier {
        &self.language
    }

    /// Return the resolved locale as a string slice.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.tag
    }

    /// Whether the fallback locale was used.
    #[must_use]
    pub fn used_fallback(&self) -> bool {
        self.fallback_used
    }

    /// Fetch the message for `code` in this localiser's locale.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::NoSuchMessage`] when no bundle defines `code`.
    pub fn localise(&self, code: &str, args: &[MessageArgument]) -> Result<String, MessageError> {
        lookup(&self.language, code, args)
    }

    fn from_language(language: LanguageIdentifier, fallback_used: bool) -> Self {
        Self {
            tag: language.to_string(),
            language,
            fallback_used,
        }
    }

    fn fallback() -> Self {
        Self::from_language(FALLBACK_LANGUAGE, true)
    }
}

impl Default for Localiser {
    fn default() -> Self {
        Self::fallback()
    }
}

impl MessageSource for Localiser {
    fn message(
        &self,
        code: &str,
        args: &[MessageArgument],
        locale: &LanguageIdentifier,
    ) -> Result<String, MessageError> {
        lookup(locale, code, args)
    }
}

fn lookup(
    language: &LanguageIdentifier,
    code: &str,
    args: &[MessageArgument],
) -> Result<String, MessageError> {
    let maybe_value = if args.is_empty() {
        LOADER.try_lookup(language, code)
    } else {
        LOADER.try_lookup_with_args(language, code, &fluent_arguments(args))
    };

    maybe_value.ok_or_else(|| MessageError::no_such_message(code, language))
}
