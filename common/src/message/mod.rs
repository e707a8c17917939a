//! Result message model and resolution helpers.
//!
//! A [`ResultMessage`] names a message by code, carries positional arguments,
//! and optionally holds literal text. [`resolve_message`] turns it into a
//! user-facing string through any [`MessageSource`], falling back to the
//! literal text when the source has no translation for the code.

mod argument;
mod messages;
mod resolve;
mod result_message;
mod source;
mod static_source;

pub use argument::MessageArgument;
pub use messages::{ParseMessageTypeError, ResultMessageType, ResultMessages};
pub use resolve::{resolve_message, resolve_message_with_locale, resolve_messages};
pub use result_message::ResultMessage;
#[cfg(test)]
pub(crate) use source::MockMessageSource;
pub use source::{MessageError, MessageSource};
pub use static_source::StaticMessageSource;
