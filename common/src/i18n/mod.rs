//! Localisation loader and locale selection for result messages.
//!
//! The loader embeds Fluent resources under `locales/` so applications can
//! resolve translated messages without touching the filesystem at runtime.
//! [`Localiser`] exposes the bundles as a [`MessageSource`], passing positional
//! arguments to Fluent as `$arg0`, `$arg1`, and so on.
//!
//! Locale selection is handled by [`resolve_locale`], which evaluates explicit
//! overrides, configuration, and the system locale in priority order before
//! falling back to the bundled locale. [`default_locale`] is the locale used
//! when callers do not pass one.
//!
//! [`MessageSource`]: crate::message::MessageSource

use fluent_templates::static_loader;
use unic_langid::{LanguageIdentifier, langid};

/// Re-export the Fluent value type used for message arguments.
pub use fluent_templates::fluent_bundle::FluentValue;

static_loader! {
    pub(crate) static LOADER = {
        locales: "../locales",
        fallback_language: "en-GB",
        customise: |bundle| bundle.set_use_isolating(false),
    };
}

/// Locale tag bundled with every build and used when nothing else matches.
pub const FALLBACK_LOCALE: &str = "en-GB";

/// [`FALLBACK_LOCALE`] as a parsed identifier.
pub const FALLBACK_LANGUAGE: LanguageIdentifier = langid!("en-GB");

mod loader;
mod locales;
mod selection;

pub use loader::{Arguments, Localiser, fluent_arguments};
pub use locales::{available_locales, supports_locale};
pub use selection::{
    LocaleSelection, LocaleSource, default_locale, normalise_locale, parse_system_locale,
    resolve_locale, system_locale,
};
