use dioxus::prelude::*;

use crate::components::site_header::nav_link;
use crate::components::site_root::use_lang;
use crate::content;
use crate::page::Page;
use crate::t;

use super::{use_scroll_to_top, PageHero};

#[component]
pub fn Services() -> Element {
    use_scroll_to_top();
    let lang = use_lang()();
    let book_now = t!(lang, "common-book-now");

    rsx! {
        div { class: "page page-services",
            PageHero { title: t!(lang, "services-title"), subtitle: t!(lang, "services-subtitle") }
            section { class: "section",
                div { class: "container card-grid",
                    for service in content::services(lang) {
                        div { key: "{service.title}", class: "card card--media",
                            img {
                                class: "card__image",
                                src: service.image,
                                alt: "{service.title}",
                                loading: "lazy",
                            }
                            div { class: "card__body",
                                div { class: "card__heading",
                                    span { class: "card__icon", aria_hidden: "true", "{service.icon}" }
                                    h2 { class: "card__title", "{service.title}" }
                                }
                                p { class: "card__text", "{service.description}" }
                                div { class: "button button--primary",
                                    {nav_link(Page::Sessions, &book_now)}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
