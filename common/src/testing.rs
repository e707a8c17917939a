//! Message-source doubles shared by unit, behaviour, and downstream tests.

use std::borrow::Cow;
use std::cell::RefCell;

use unic_langid::LanguageIdentifier;

use crate::message::{MessageArgument, MessageError, MessageSource};

/// Test double that fails every lookup with [`MessageError::NoSuchMessage`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FailingSource;

impl MessageSource for FailingSource {
    fn message(
        &self,
        code: &str,
        _args: &[MessageArgument],
        locale: &LanguageIdentifier,
    ) -> Result<String, MessageError> {
        Err(MessageError::no_such_message(code, locale))
    }
}

/// A lookup observed by [`RecordingSource`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordedLookup {
    /// Code passed to the source.
    pub code: String,
    /// Arguments passed to the source.
    pub args: Vec<MessageArgument>,
    /// Locale passed to the source.
    pub locale: LanguageIdentifier,
}

/// Wraps a source and records every lookup made through it.
#[derive(Debug, Default)]
pub struct RecordingSource<S> {
    inner: S,
    lookups: RefCell<Vec<RecordedLookup>>,
}

impl<S> RecordingSource<S> {
    /// Record lookups forwarded to `inner`.
    #[must_use]
    pub const fn new(inner: S) -> Self {
        Self {
            inner,
            lookups: RefCell::new(Vec::new()),
        }
    }

    /// Lookups observed so far, oldest first.
    #[must_use]
    pub fn lookups(&self) -> Vec<RecordedLookup> {
        self.lookups.borrow().clone()
    }

    /// Whether no lookup has been made.
    #[must_use]
    pub fn is_untouched(&self) -> bool {
        self.lookups.borrow().is_empty()
    }
}

impl<S: MessageSource> MessageSource for RecordingSource<S> {
    fn message(
        &self,
        code: &str,
        args: &[MessageArgument],
        locale: &LanguageIdentifier,
    ) -> Result<String, MessageError> {
        self.lookups.borrow_mut().push(RecordedLookup {
            code: code.to_owned(),
            args: args.to_vec(),
            locale: locale.clone(),
        });
        self.inner.message(code, args, locale)
    }
}

/// Source that answers every lookup with the same text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FixedSource {
    text: Cow<'static, str>,
}

impl FixedSource {
    /// Answer every lookup with `text`.
    #[must_use]
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self { text: text.into() }
    }
}

impl MessageSource for FixedSource {
    fn message(
        &self,
        _code: &str,
        _args: &[MessageArgument],
        _locale: &LanguageIdentifier,
    ) -> Result<String, MessageError> {
        Ok(self.text.clone().into_owned())
    }
}
