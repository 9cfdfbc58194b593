use api::{ContentClient, Lang};
use dioxus::prelude::*;

use crate::config::{self, SiteConfig};
use crate::core::platform;
use crate::i18n;

const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Root class; the `dark` class switches the palette.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }
}

/// Current language signal provided by [`SiteRoot`].
pub fn use_lang() -> Signal<Lang> {
    use_context::<Signal<Lang>>()
}

pub fn use_theme() -> Signal<Theme> {
    use_context::<Signal<Theme>>()
}

pub fn use_site_config() -> SiteConfig {
    try_use_context::<SiteConfig>().unwrap_or_default()
}

pub fn use_content_client() -> ContentClient {
    try_use_context::<ContentClient>().unwrap_or_default()
}

/// Application root: provides configuration, language, theme and the
/// content client to every page, and mirrors language and theme onto the
/// document.
#[component]
pub fn SiteRoot(children: Element) -> Element {
    let config = use_context_provider(config::load);
    use_context_provider(|| ContentClient::new(config.content.base_url.clone()));

    let lang = use_signal(|| i18n::initial_language(&config));
    use_context_provider(|| lang);
    let theme = use_signal(Theme::default);
    use_context_provider(|| theme);

    use_effect(move || {
        let (lang, theme) = (lang(), theme());
        tracing::debug!(lang = lang.code(), dark = theme.is_dark(), "document attributes");
        platform::apply_document_attributes(lang, theme.is_dark());
    });

    let lang = lang();
    let theme = theme();

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        div {
            class: "site {theme.class()}",
            dir: lang.dir(),
            lang: lang.code(),
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_toggles_and_maps_to_class() {
        assert!(!Theme::default().is_dark());
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.class(), "dark");
        assert_eq!(Theme::Light.class(), "");
    }
}
