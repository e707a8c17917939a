//! Result messages for user-facing feedback: a message model, the
//! [`MessageSource`] lookup seam, Fluent-backed and in-memory sources, and
//! resolution helpers that fall back to literal text.

pub mod i18n;
pub mod message;
pub mod testing;

pub use i18n::{
    FALLBACK_LANGUAGE, FALLBACK_LOCALE, LocaleSelection, LocaleSource, Localiser,
    available_locales, default_locale, normalise_locale, resolve_locale, supports_locale,
    system_locale,
};
pub use message::{
    MessageArgument, MessageError, MessageSource, ParseMessageTypeError, ResultMessage,
    ResultMessageType, ResultMessages, StaticMessageSource, resolve_message,
    resolve_message_with_locale, resolve_messages,
};
