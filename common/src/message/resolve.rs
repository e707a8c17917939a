use log::{Level, debug, log_enabled};
use unic_langid::LanguageIdentifier;

use super::{MessageError, MessageSource, ResultMessage, ResultMessages};
use crate::i18n::default_locale;

const LOG_TARGET: &str = "result_messages::resolve";

/// Resolve `message` for the default locale.
///
/// See [`resolve_message_with_locale`]; the locale comes from
/// [`default_locale`].
///
/// # Errors
///
/// Returns [`MessageError::NoSuchMessage`] when the code is unknown and the
/// message has no literal text to fall back to.
pub fn resolve_message<S>(message: &ResultMessage, source: &S) -> Result<String, MessageError>
where
    S: MessageSource + ?Sized,
{
    resolve_message_with_locale(message, source, &default_locale())
}

/// Resolve `message` for `locale` through `source`.
///
/// Messages without a code yield their text and never reach `source`. When
/// the lookup fails and the message carries text, the text is returned and
/// the miss is logged at debug level.
///
/// ```
/// use result_messages_common::i18n::FALLBACK_LANGUAGE;
/// use result_messages_common::message::{
///     ResultMessage, StaticMessageSource, resolve_message_with_locale,
/// };
///
/// let mut source = StaticMessageSource::new();
/// source.add_message("i.saved", &FALLBACK_LANGUAGE, "{0} saved.");
///
/// let found = ResultMessage::from_code_with_args("i.saved", ["Order"]);
/// let missing = ResultMessage::from_code("i.gone").with_text("Gone.");
///
/// assert_eq!(
///     resolve_message_with_locale(&found, &source, &FALLBACK_LANGUAGE).as_deref(),
///     Ok("Order saved."),
/// );
/// assert_eq!(
///     resolve_message_with_locale(&missing, &source, &FALLBACK_LANGUAGE).as_deref(),
///     Ok("Gone."),
/// );
/// ```
///
/// # Errors
///
/// Returns the source's [`MessageError`] unchanged when the code is unknown
/// and the message has no text.
pub fn resolve_message_with_locale<S>(
    message: &ResultMessage,
    source: &S,
    locale: &LanguageIdentifier,
) -> Result<String, MessageError>
where
    S: MessageSource + ?Sized,
{
    let Some(code) = message.code() else {
        return Ok(message.text().unwrap_or_default().to_owned());
    };

    match source.message(code, message.args(), locale) {
        Ok(resolved) => Ok(resolved),
        Err(error) => match message.text() {
            Some(text) => {
                if log_enabled!(target: LOG_TARGET, Level::Debug) {
                    debug!(
                        target: LOG_TARGET,
                        "{error}; using message text `{text}` instead",
                    );
                }
                Ok(text.to_owned())
            }
            None => Err(error),
        },
    }
}

/// Resolve every message in `messages`, preserving order.
///
/// # Errors
///
/// Stops at and returns the first failure that
/// [`resolve_message_with_locale`] propagates.
pub fn resolve_messages<S>(
    messages: &ResultMessages,
    source: &S,
    locale: &LanguageIdentifier,
) -> Result<Vec<String>, MessageError>
where
    S: MessageSource + ?Sized,
{
    messages
        .iter()
        .map(|message| resolve_message_with_locale(message, source, locale))
        .collect()
}
