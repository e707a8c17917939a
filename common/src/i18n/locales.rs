//! Bundled locale inventory.

use once_cell::sync::Lazy;

use fluent_templates::Loader;
use unic_langid::LanguageIdentifier;

use super::LOADER;

/// Bundled locale tags in canonical form, sorted for binary search.
static BUNDLED: Lazy<Vec<String>> = Lazy::new(|| {
    let mut tags: Vec<String> = LOADER.locales().map(ToString::to_string).collect();
    tags.sort_unstable();
    tags.dedup();
    tags
});

/// Locale tags with a Fluent bundle, sorted.
#[must_use]
pub fn available_locales() -> &'static [String] {
    &BUNDLED
}

/// Whether `locale` names a bundled locale once canonicalised.
///
/// Tags are compared after parsing, so `en-gb` and `en_GB` match `en-GB`.
#[must_use]
pub fn supports_locale(locale: &str) -> bool {
    locale
        .replace('_', "-")
        .parse::<LanguageIdentifier>()
        .is_ok_and(|identifier| BUNDLED.binary_search(&identifier.to_string()).is_ok())
}
