use serde::Serialize;

use super::MessageArgument;

/// Descriptor for a user-facing message: a lookup code, positional
/// arguments, and literal text used when the code cannot be resolved.
///
/// Every message carries a code, a text, or both. The constructors uphold
/// that invariant, so a message without a code always has text to show.
///
/// ```
/// use result_messages_common::message::ResultMessage;
///
/// let saved = ResultMessage::from_code_with_args("i.saved", ["order-7"])
///     .with_text("Saved.");
/// assert_eq!(saved.code(), Some("i.saved"));
/// assert_eq!(saved.args().len(), 1);
/// assert_eq!(saved.text(), Some("Saved."));
///
/// let literal = ResultMessage::from_text("Nothing to do.");
/// assert_eq!(literal.code(), None);
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct ResultMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    args: Vec<MessageArgument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl ResultMessage {
    /// Create a message resolved through `code` with no arguments.
    #[must_use]
    pub fn from_code(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            args: Vec::new(),
            text: None,
        }
    }

    /// Create a message resolved through `code` with positional `args`.
    #[must_use]
    pub fn from_code_with_args<I>(code: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<MessageArgument>,
    {
        Self::from_code(code).with_args(args)
    }

    /// Create a message that is displayed verbatim and never looked up.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            code: None,
            args: Vec::new(),
            text: Some(text.into()),
        }
    }

    /// Replace the positional arguments.
    #[must_use]
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<MessageArgument>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Attach literal text shown when the code has no translation.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Lookup code, if any.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Positional arguments passed to the message source.
    #[must_use]
    pub fn args(&self) -> &[MessageArgument] {
        &self.args
    }

    /// Literal text, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    fn equal_messages_hash_alike() {
        let first = ResultMessage::from_code_with_args("e.required", ["name"]);
        let second = ResultMessage::from_code("e.required").with_args(["name"]);

        assert_eq!(first, second);
        let set: HashSet<_> = [first, second].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[rstest]
    #[case(ResultMessage::from_code("a"), ResultMessage::from_code("b"))]
    #[case(
        ResultMessage::from_code_with_args("a", [1_i32]),
        ResultMessage::from_code_with_args("a", [2_i32])
    )]
    #[case(ResultMessage::from_code("a"), ResultMessage::from_code("a").with_text("A"))]
    fn differing_fields_break_equality(#[case] left: ResultMessage, #[case] right: ResultMessage) {
        assert_ne!(left, right);
    }

    #[rstest]
    fn text_only_messages_carry_no_arguments() {
        let message = ResultMessage::from_text("plain");

        assert_eq!(message.code(), None);
        assert!(message.args().is_empty());
        assert_eq!(message.text(), Some("plain"));
    }

    #[rstest]
    fn serialisation_skips_absent_fields() {
        let message = ResultMessage::from_code_with_args("i.saved", ["order", "7"]);
        let json = serde_json::to_string(&message).expect("message should serialise");

        assert_eq!(json, r#"{"code":"i.saved","args":["order","7"]}"#);
    }
}
