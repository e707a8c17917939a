use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{MessageArgument, ResultMessage};

/// Category of a [`ResultMessages`] collection, used by views to pick a style.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultMessageType {
    /// The operation completed.
    Success,
    /// Neutral information.
    Info,
    /// Something needs attention but the operation went ahead.
    Warning,
    /// The operation failed.
    Error,
    /// The operation failed and may have lasting consequences.
    Danger,
}

impl ResultMessageType {
    /// Lowercase name of the type, e.g. `"warning"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for ResultMessageType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Raised when a string does not name a [`ResultMessageType`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown result message type `{0}`")]
pub struct ParseMessageTypeError(String);

impl FromStr for ResultMessageType {
    type Err = ParseMessageTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "success" => Ok(Self::Success),
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "danger" => Ok(Self::Danger),
            other => Err(ParseMessageTypeError(other.to_owned())),
        }
    }
}

/// Ordered collection of [`ResultMessage`]s sharing one [`ResultMessageType`].
///
/// ```
/// use result_messages_common::message::{ResultMessageType, ResultMessages};
///
/// let messages = ResultMessages::error()
///     .add_code("e.required")
///     .add_text("Check the highlighted fields.");
///
/// assert_eq!(messages.kind(), ResultMessageType::Error);
/// assert_eq!(messages.len(), 2);
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ResultMessages {
    #[serde(rename = "type")]
    kind: ResultMessageType,
    #[serde(rename = "list")]
    messages: Vec<ResultMessage>,
}

impl ResultMessages {
    /// Create an empty collection of the given type.
    #[must_use]
    pub const fn new(kind: ResultMessageType) -> Self {
        Self {
            kind,
            messages: Vec::new(),
        }
    }

    /// Empty [`ResultMessageType::Success`] collection.
    #[must_use]
    pub const fn success() -> Self {
        Self::new(ResultMessageType::Success)
    }

    /// Empty [`ResultMessageType::Info`] collection.
    #[must_use]
    pub const fn info() -> Self {
        Self::new(ResultMessageType::Info)
    }

    /// Empty [`ResultMessageType::Warning`] collection.
    #[must_use]
    pub const fn warning() -> Self {
        Self::new(ResultMessageType::Warning)
    }

    /// Empty [`ResultMessageType::Error`] collection.
    #[must_use]
    pub const fn error() -> Self {
        Self::new(ResultMessageType::Error)
    }

    /// Empty [`ResultMessageType::Danger`] collection.
    #[must_use]
    pub const fn danger() -> Self {
        Self::new(ResultMessageType::Danger)
    }

    /// Append `message`.
    #[must_use]
    pub fn with_message(mut self, message: ResultMessage) -> Self {
        self.messages.push(message);
        self
    }

    /// Append a message resolved through `code`.
    #[must_use]
    pub fn add_code(self, code: impl Into<String>) -> Self {
        self.with_message(ResultMessage::from_code(code))
    }

    /// Append a message resolved through `code` with positional `args`.
    #[must_use]
    pub fn add_code_with_args<I>(self, code: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<MessageArgument>,
    {
        self.with_message(ResultMessage::from_code_with_args(code, args))
    }

    /// Append a literal message.
    #[must_use]
    pub fn add_text(self, text: impl Into<String>) -> Self {
        self.with_message(ResultMessage::from_text(text))
    }

    /// Append every message from `messages`, preserving order.
    #[must_use]
    pub fn add_all(mut self, messages: impl IntoIterator<Item = ResultMessage>) -> Self {
        self.messages.extend(messages);
        self
    }

    /// Type shared by every message in the collection.
    #[must_use]
    pub const fn kind(&self) -> ResultMessageType {
        self.kind
    }

    /// Number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether no message has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Whether at least one message has been added.
    #[must_use]
    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Borrow the messages as a slice.
    #[must_use]
    pub fn messages(&self) -> &[ResultMessage] {
        &self.messages
    }

    /// Iterate over the messages in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ResultMessage> {
        self.messages.iter()
    }
}

impl IntoIterator for ResultMessages {
    type Item = ResultMessage;
    type IntoIter = std::vec::IntoIter<ResultMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultMessages {
    type Item = &'a ResultMessage;
    type IntoIter = std::slice::Iter<'a, ResultMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
