use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;
use once_cell::sync::OnceCell;

use crate::components::site_root::{use_lang, use_theme};
use crate::core::platform;
use crate::core::trigger::Subscription;
use crate::page::Page;
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platform hook for router links.
///
/// `ui` never names a platform's `Route` enum. Each platform registers a
/// builder that turns a [`Page`] plus its localized label into a router
/// `Link` (with the label as its only child):
///
/// ```ignore
/// fn nav_link(page: Page, label: &str) -> Element {
///     let to = match page {
///         Page::Home => Route::Home {},
///         // ...
///     };
///     rsx!(Link { to, active_class: "is-active", "{label}" })
/// }
/// register_nav(NavBuilder { link: nav_link });
/// ```
///
/// Without a registered builder, plain anchors to [`Page::path`] are used.
pub struct NavBuilder {
    pub link: fn(page: Page, label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::debug!("navigation builder already registered");
    }
}

/// Link to `page` through the registered builder.
pub fn nav_link(page: Page, label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.link)(page, label),
        None => rsx! {
            a { href: page.path(), "{label}" }
        },
    }
}

/// Whether the page has scrolled past the header threshold.
fn use_page_scrolled() -> ReadOnlySignal<bool> {
    let mut scrolled = use_signal(|| false);
    let listener: Rc<RefCell<Option<Subscription>>> = use_hook(Default::default);

    let updates = use_coroutine(move |mut rx: UnboundedReceiver<bool>| async move {
        while let Some(next) = rx.next().await {
            if *scrolled.peek() != next {
                scrolled.set(next);
            }
        }
    });

    let slot = listener.clone();
    use_effect(move || {
        if slot.borrow().is_some() {
            return;
        }
        let tx = updates.tx();
        let sub = platform::watch_scroll(Box::new(move |offset| {
            let _ = tx.unbounded_send(platform::is_scrolled(offset));
        }));
        *slot.borrow_mut() = Some(sub);
    });

    use_drop(move || drop(listener.borrow_mut().take()));

    scrolled.into()
}

#[component]
pub fn SiteHeader() -> Element {
    let mut lang = use_lang();
    let mut theme = use_theme();
    let mut menu_open = use_signal(|| false);
    let scrolled = use_page_scrolled();

    let current = lang();
    let theme_label = if theme().is_dark() {
        t!(current, "theme-to-light")
    } else {
        t!(current, "theme-to-dark")
    };
    let theme_icon = if theme().is_dark() { "☀" } else { "☾" };
    let menu_label = if menu_open() {
        t!(current, "nav-close-menu")
    } else {
        t!(current, "nav-open-menu")
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: if scrolled() { "navbar navbar--scrolled" } else { "navbar" },
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-spark", aria_hidden: "true" }
                    div { class: "navbar__brand-text",
                        span { class: "navbar__brand-mark", {t!(current, "brand-name")} }
                        span { class: "navbar__brand-subtitle", {t!(current, "brand-tagline")} }
                    }
                }

                nav { class: "navbar__links",
                    for page in Page::HEADER {
                        {nav_link(page, &page.label(current))}
                    }
                }

                div { class: "navbar__actions",
                    button {
                        class: "icon-button navbar__theme",
                        aria_label: "{theme_label}",
                        title: "{theme_label}",
                        onclick: move |_| theme.with_mut(|mode| *mode = mode.toggled()),
                        "{theme_icon}"
                    }
                    button {
                        class: "navbar__lang",
                        aria_label: t!(current, "lang-toggle-label"),
                        onclick: move |_| lang.with_mut(|l| *l = l.toggled()),
                        {t!(current, "lang-toggle")}
                    }
                    div { class: "navbar__cta",
                        {nav_link(Page::Sessions, &t!(current, "common-book-now"))}
                    }
                    button {
                        class: "icon-button navbar__menu-toggle",
                        aria_label: "{menu_label}",
                        aria_expanded: "{menu_open()}",
                        onclick: move |_| {
                            let open = menu_open();
                            menu_open.set(!open);
                        },
                        if menu_open() { "✕" } else { "☰" }
                    }
                }
            }

            if menu_open() {
                // Any link click inside closes the menu.
                nav {
                    class: "navbar__mobile",
                    onclick: move |_| menu_open.set(false),
                    for page in Page::HEADER {
                        {nav_link(page, &page.label(current))}
                    }
                    div { class: "navbar__cta",
                        {nav_link(Page::Sessions, &t!(current, "common-book-now"))}
                    }
                }
            }
        }
    }
}
