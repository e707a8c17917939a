//! In-memory message source populated programmatically or from configuration.

use std::collections::HashMap;
use std::fmt;

use unic_langid::LanguageIdentifier;

use super::{MessageArgument, MessageError, MessageSource};

type ParentSource = Box<dyn MessageSource + Send + Sync>;

/// Message source backed by templates registered at runtime.
///
/// Templates use `{0}`, `{1}`, … for positional arguments. A lookup tries the
/// exact locale tag, then the bare language, then the fallback locale, and
/// finally delegates to the parent source when one is configured.
#[derive(Default)]
pub struct StaticMessageSource {
    templates: HashMap<String, HashMap<String, String>>,
    fallback_locale: Option<LanguageIdentifier>,
    parent: Option<ParentSource>,
}

impl StaticMessageSource {
    /// Create an empty source without fallback locale or parent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consult `locale` when neither the requested tag nor its language match.
    #[must_use]
    pub fn with_fallback_locale(mut self, locale: LanguageIdentifier) -> Self {
        self.fallback_locale = Some(locale);
        self
    }

    /// Delegate unknown codes to `parent`.
    #[must_use]
    pub fn with_parent(mut self, parent: impl MessageSource + Send + Sync + 'static) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// Register `template` under `code` for `locale`, replacing any previous one.
    pub fn add_message(
        &mut self,
        code: impl Into<String>,
        locale: &LanguageIdentifier,
        template: impl Into<String>,
    ) {
        self.templates
            .entry(locale.to_string())
            .or_default()
            .insert(code.into(), template.into());
    }

    /// Register several `(code, template)` pairs for `locale`.
    pub fn add_messages<I, C, T>(&mut self, locale: &LanguageIdentifier, messages: I)
    where
        I: IntoIterator<Item = (C, T)>,
        C: Into<String>,
        T: Into<String>,
    {
        let table = self.templates.entry(locale.to_string()).or_default();
        table.extend(
            messages
                .into_iter()
                .map(|(code, template)| (code.into(), template.into())),
        );
    }

    /// Whether a template is registered for `code` under any locale.
    #[must_use]
    pub fn contains_code(&self, code: &str) -> bool {
        self.templates.values().any(|table| table.contains_key(code))
    }

    fn candidate_tags(&self, locale: &LanguageIdentifier) -> Vec<String> {
        let mut tags = vec![locale.to_string()];
        let language = locale.language.as_str().to_owned();
        if !tags.contains(&language) {
            tags.push(language);
        }
        if let Some(fallback) = &self.fallback_locale {
            let tag = fallback.to_string();
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        tags
    }

    fn template(&self, code: &str, locale: &LanguageIdentifier) -> Option<&str> {
        self.candidate_tags(locale)
            .iter()
            .find_map(|tag| self.templates.get(tag)?.get(code))
            .map(String::as_str)
    }
}

impl fmt::Debug for StaticMessageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticMessageSource")
            .field("templates", &self.templates)
            .field("fallback_locale", &self.fallback_locale)
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}

impl MessageSource for StaticMessageSource {
    fn message(
        &self,
        code: &str,
        args: &[MessageArgument],
        locale: &LanguageIdentifier,
    ) -> Result<String, MessageError> {
        if let Some(template) = self.template(code, locale) {
            return Ok(format_template(template, args));
        }

        match &self.parent {
            Some(parent) => parent.message(code, args, locale),
            None => Err(MessageError::no_such_message(code, locale)),
        }
    }
}

/// Substitute `{n}` placeholders with the matching positional argument.
///
/// Placeholders without a matching argument, and braces that do not enclose
/// an index, are copied through unchanged.
fn format_template(template: &str, args: &[MessageArgument]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some((head, tail)) = rest.split_once('{') {
        output.push_str(head);
        let placeholder = tail.split_once('}').and_then(|(index, after)| {
            let argument = args.get(index.parse::<usize>().ok()?)?;
            Some((argument, after))
        });

        if let Some((argument, after)) = placeholder {
            output.push_str(&argument.to_string());
            rest = after;
        } else {
            output.push('{');
            rest = tail;
        }
    }

    output.push_str(rest);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use unic_langid::langid;

    const EN_GB: LanguageIdentifier = langid!("en-GB");
    const EN: LanguageIdentifier = langid!("en");
    const CY: LanguageIdentifier = langid!("cy");

    #[fixture]
    fn source() -> StaticMessageSource {
        let mut source = StaticMessageSource::new().with_fallback_locale(EN_GB);
        source.add_messages(
            &EN_GB,
            [
                ("e.required", "{0} is required."),
                ("e.range", "{0} must be between {1} and {2}."),
                ("i.welcome", "Welcome!"),
            ],
        );
        source.add_message("i.colour", &EN, "Colour");
        source.add_message("i.welcome", &CY, "Croeso!");
        source
    }

    #[rstest]
    #[case("{0} is required.", &["Name"], "Name is required.")]
    #[case("{1} before {0}", &["b", "a"], "a before b")]
    #[case("{0}{0}", &["x"], "xx")]
    #[case("{2} stays", &["only"], "{2} stays")]
    #[case("{name} stays", &["x"], "{name} stays")]
    #[case("unterminated {0", &["x"], "unterminated {0")]
    #[case("no placeholders", &[], "no placeholders")]
    fn formats_positional_placeholders(
        #[case] template: &str,
        #[case] args: &[&str],
        #[case] expected: &str,
    ) {
        let args: Vec<MessageArgument> = args.iter().copied().map(Into::into).collect();
        assert_eq!(format_template(template, &args), expected);
    }

    #[rstest]
    fn resolves_exact_locale(source: StaticMessageSource) {
        let message = source
            .message("i.welcome", &[], &CY)
            .expect("welsh welcome should resolve");
        assert_eq!(message, "Croeso!");
    }

    #[rstest]
    fn falls_back_to_the_language(source: StaticMessageSource) {
        let message = source
            .message("i.colour", &[], &langid!("en-US"))
            .expect("language-only template should match");
        assert_eq!(message, "Colour");
    }

    #[rstest]
    fn falls_back_to_the_configured_locale(source: StaticMessageSource) {
        let args = [MessageArgument::from("Age"), 1_i32.into(), 99_i32.into()];
        let message = source
            .message("e.range", &args, &CY)
            .expect("fallback locale should supply the template");
        assert_eq!(message, "Age must be between 1 and 99.");
    }

    #[rstest]
    fn unknown_codes_fail_with_the_requested_locale(source: StaticMessageSource) {
        let error = source
            .message("e.unknown", &[], &CY)
            .expect_err("unknown code should fail");
        assert_eq!(
            error,
            MessageError::NoSuchMessage {
                code: "e.unknown".into(),
                locale: "cy".into(),
            }
        );
    }

    #[rstest]
    fn delegates_unknown_codes_to_the_parent(source: StaticMessageSource) {
        let mut child = StaticMessageSource::new().with_parent(source);
        child.add_message("i.welcome", &EN_GB, "Hello from the child");

        assert_eq!(
            child.message("i.welcome", &[], &EN_GB).as_deref(),
            Ok("Hello from the child")
        );
        assert_eq!(
            child
                .message("e.required", &["Email".into()], &EN_GB)
                .as_deref(),
            Ok("Email is required.")
        );
    }

    #[rstest]
    fn reports_registered_codes(source: StaticMessageSource) {
        assert!(source.contains_code("i.colour"));
        assert!(!source.contains_code("i.missing"));
    }
}
