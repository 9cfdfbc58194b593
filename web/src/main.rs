use dioxus::prelude::*;

use ui::components::{register_nav, NavBuilder, SiteFooter, SiteHeader, SiteRoot};
use ui::views::{About, Blog, Contact, Faq, Gallery, Home, Policies, Programs, Services, Sessions};
use ui::Page;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
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

fn nav_link(page: Page, label: &str) -> Element {
    rsx!(Link {
        to: Route::from(page),
        active_class: "is-active",
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder { link: nav_link });

    rsx! {
        SiteRoot {
            Router::<Route> {}
        }
    }
}

/// Shared header and footer around the web-specific `Route` outlet.
#[component]
fn WebLayout() -> Element {
    rsx! {
        SiteHeader {}
        main { Outlet::<Route> {} }
        SiteFooter {}
    }
}
