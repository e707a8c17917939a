use thiserror::Error;
use unic_langid::LanguageIdentifier;

use super::MessageArgument;

/// Error raised when a message source cannot satisfy a lookup.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MessageError {
    /// No message is registered under `code` for `locale`.
    #[error("no message found under code `{code}` for locale `{locale}`")]
    NoSuchMessage {
        /// Code that was looked up.
        code: String,
        /// Locale the lookup was made for.
        locale: String,
    },
}

impl MessageError {
    /// Build a [`MessageError::NoSuchMessage`] for `code` in `locale`.
    #[must_use]
    pub fn no_such_message(code: &str, locale: &LanguageIdentifier) -> Self {
        Self::NoSuchMessage {
            code: code.to_owned(),
            locale: locale.to_string(),
        }
    }
}

/// Locale-aware lookup of message templates by code.
///
/// Implementations substitute `args` into the template registered for `code`
/// and fail with [`MessageError::NoSuchMessage`] when the code is unknown.
#[cfg_attr(test, mockall::automock)]
pub trait MessageSource {
    /// Resolve `code` with positional `args` for `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::NoSuchMessage`] when no message is registered
    /// under `code`.
    fn message(
        &self,
        code: &str,
        args: &[MessageArgument],
        locale: &LanguageIdentifier,
    ) -> Result<String, MessageError>;
}

impl<S: MessageSource + ?Sized> MessageSource for &S {
    fn message(
        &self,
        code: &str,
        args: &[MessageArgument],
        locale: &LanguageIdentifier,
    ) -> Result<String, MessageError> {
        (**self).message(code, args, locale)
    }
}

impl<S: MessageSource + ?Sized> MessageSource for Box<S> {
    fn message(
        &self,
        code: &str,
        args: &[MessageArgument],
        locale: &LanguageIdentifier,
    ) -> Result<String, MessageError> {
        (**self).message(code, args, locale)
    }
}

impl<S: MessageSource + ?Sized> MessageSource for std::sync::Arc<S> {
    fn message(
        &self,
        code: &str,
        args: &[MessageArgument],
        locale: &LanguageIdentifier,
    ) -> Result<String, MessageError> {
        (**self).message(code, args, locale)
    }
}
