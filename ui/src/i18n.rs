//! Internationalization for the Sunrise site.
//!
//! Every UI string lives in a Fluent file per locale:
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/sunrise-ui.ftl   (fallback/reference)
//!   ar/sunrise-ui.ftl
//! ```
//!
//! Unlike a single global loader, the site keeps one loader per [`Lang`] so a
//! component renders in whatever language the current signal holds without
//! re-selecting a global. Arabic messages missing from `ar/` resolve through
//! the `en-US` fallback bundle.
//!
//! ```ignore
//! let lang = use_lang()();
//! let home = t!(lang, "nav-home");
//! let rights = t!(lang, "footer-rights", year = 2024);
//! ```
use api::Lang;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::config::SiteConfig;

pub use i18n_embed_fl::fl;

/// Translation lookup in an explicit language.
///
/// ```text
/// t!(lang, "nav-home")
/// t!(lang, "footer-rights", year = 2024)
/// ```
#[macro_export]
macro_rules! t {
    ($lang:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key)
    };
    ($lang:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "sunrise-ui";
const FALLBACK: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

static ENGLISH: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Lang::English));
static ARABIC: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Lang::Arabic));

fn fallback_id() -> LanguageIdentifier {
    FALLBACK
        .parse()
        .unwrap_or_else(|_| LanguageIdentifier::default())
}

fn build_loader(lang: Lang) -> FluentLanguageLoader {
    let loader = FluentLanguageLoader::new(DOMAIN, fallback_id());

    let requested: Vec<LanguageIdentifier> = match lang.locale().parse() {
        Ok(id) => vec![id],
        Err(err) => {
            tracing::warn!(locale = lang.locale(), "bad locale identifier: {err}");
            Vec::new()
        }
    };
    if let Err(err) = i18n_embed::select(&loader, &Localizations, &requested) {
        tracing::warn!(
            locale = lang.locale(),
            "failed selecting languages ({err}); continuing with fallback"
        );
    }
    // Applies to the bundles built by `select`; bidi isolation marks would
    // show up inside RTL text runs.
    loader.set_use_isolating(false);
    loader
}

/// Loader that renders messages in `lang`.
pub fn loader(lang: Lang) -> &'static FluentLanguageLoader {
    match lang {
        Lang::English => &*ENGLISH,
        Lang::Arabic => &*ARABIC,
    }
}

/// Embedded language folders, e.g. `["ar", "en-US"]`.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Language the site opens in: the configured default, or the first
/// supported entry of the host preference list when configured to follow it.
pub fn initial_language(config: &SiteConfig) -> Lang {
    if config.follow_system_language {
        let preferred = requested_languages()
            .iter()
            .find_map(|id| Lang::from_language_tag(&id.to_string()));
        if let Some(lang) = preferred {
            return lang;
        }
    }
    config.default_language
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
