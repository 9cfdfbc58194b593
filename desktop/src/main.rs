#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::{register_nav, NavBuilder, SiteFooter, SiteHeader, SiteRoot};
use ui::views::{About, Blog, Contact, Faq, Gallery, Home, Policies, Programs, Services, Sessions};
use ui::Page;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopLayout)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/services")]
    Services {},
    #[route("/programs")]
    Programs {},
    #[route("/sessions")]
    Sessions {},
    #[route("/blog")]
    Blog {},
    #[route("/gallery")]
    Gallery {},
    #[route("/faq")]
    Faq {},
    #[route("/contact")]
    Contact {},
    #[route("/policies")]
    Policies {},
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Route::Home {},
            Page::About => Route::About {},
            Page::Services => Route::Services {},
            Page::Programs => Route::Programs {},
            Page::Sessions => Route::Sessions {},
            Page::Blog => Route::Blog {},
            Page::Gallery => Route::Gallery {},
            Page::Faq => Route::Faq {},
            Page::Contact => Route::Contact {},
            Page::Policies => Route::Policies {},
        }
    }
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme from ui/; desktop keeps no copy of its own.

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Sunrise – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_link(page: Page, label: &str) -> Element {
    rsx!(Link { to: Route::from(page), active_class: "is-active", "{label}" })
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder { link: nav_link });

    rsx! {
        // Always inline the embedded theme (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        SiteRoot {
            Router::<Route> {}
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the shared ui crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../ui/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Shared header and footer around the desktop-specific `Route` outlet.
#[component]
fn DesktopLayout() -> Element {
    rsx! {
        SiteHeader {}
        main { Outlet::<Route> {} }
        SiteFooter {}
    }
}
