//! Internationalization for the page chrome of `academy-ui`.
//!
//! Navigation, section headings and calls to action are translated; lesson
//! and catalog content stays English.
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/academy-ui.ftl   (fallback/reference)
//!   es-ES/academy-ui.ftl
//!   fr-FR/academy-ui.ftl
//! ```
//!
//! Usage in a component:
//! ```ignore
//! crate::i18n::init(); // idempotent
//! let label = crate::t!("nav-home");
//! ```
//!
//! `fl!` checks every key against the en-US file at compile time, so a new
//! `t!` call needs its key added there first. Messages avoid placeables: the
//! loader would wrap arguments in bidi isolation marks.
//!
//! Platform notes:
//! - Desktop/mobile: `DesktopLanguageRequester` (OS locale list).
//! - Web/WASM: `WebLanguageRequester` (`navigator.languages`); assets are
//!   always embedded there (`debug-embed`).
use std::sync::Once;

use dioxus::prelude::*;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{info, warn};
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translate a message through the shared loader.
///
/// ```ignore
/// t!("nav-home")
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "academy-ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load the bundles for the user's preferred languages (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!(%err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Switch language at runtime. Unparseable tags and languages without an
/// embedded bundle are ignored; the current bundle stays selected.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        warn!(tag, "ignoring unparseable language tag");
        return Ok(());
    };
    let canonical = lang.to_string();
    if !available_languages().contains(&canonical) {
        warn!(tag, "ignoring language without an embedded bundle");
        return Ok(());
    }
    i18n_embed::select(&*LOADER, &Localizations, &[lang])?;
    info!(tag, "language switched");
    Ok(())
}

/// Language the loader currently serves first, e.g. `fr-FR` after the OS
/// locale was picked up by [`init`].
pub fn current_language() -> String {
    LOADER
        .current_languages()
        .first()
        .map(|lang| lang.to_string())
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
}

/// Embedded language identifiers, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Subscribe the calling component to the platform's language signal and
/// return the current code. Views render it into a hidden marker so a
/// language switch re-renders their `t!` lookups.
pub fn use_language_marker() -> String {
    let code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    code.map(|c| c())
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
