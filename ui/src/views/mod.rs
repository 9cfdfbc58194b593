//! Routed pages. Each page is a component named after its route.

use api::ContentRecord;
use dioxus::prelude::*;

use crate::components::site_root::{use_content_client, use_lang};
use crate::core::platform;
use crate::t;

mod about;
mod blog;
mod contact;
mod faq;
mod gallery;
mod home;
mod policies;
mod programs;
mod services;
mod sessions;

pub use about::About;
pub use blog::Blog;
pub use contact::Contact;
pub use faq::Faq;
pub use gallery::Gallery;
pub use home::Home;
pub use policies::Policies;
pub use programs::Programs;
pub use services::Services;
pub use sessions::Sessions;

/// Reset the scroll position when a page mounts.
fn use_scroll_to_top() {
    use_effect(platform::scroll_to_top);
}

/// Records of `T` from the content service, or the built-in list when the
/// service has none or fails. `None` while the request is in flight.
fn use_content<T: ContentRecord + 'static>() -> Resource<Vec<T>> {
    let client = use_content_client();
    use_resource(move || {
        let client = client.clone();
        async move { client.load::<T>().await }
    })
}

/// Gradient banner with the page title.
#[component]
fn PageHero(title: String, subtitle: String) -> Element {
    rsx! {
        section { class: "page-hero",
            div { class: "container page-hero__inner",
                h1 { class: "page-hero__title", "{title}" }
                p { class: "page-hero__subtitle", "{subtitle}" }
            }
        }
    }
}

#[component]
fn Loading() -> Element {
    let lang = use_lang()();
    rsx! {
        div { class: "loading", role: "status", {t!(lang, "common-loading")} }
    }
}
