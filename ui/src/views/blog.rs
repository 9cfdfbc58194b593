use dioxus::prelude::*;

use crate::components::site_root::use_lang;
use crate::content;
use crate::t;

use super::{use_scroll_to_top, PageHero};

#[component]
pub fn Blog() -> Element {
    use_scroll_to_top();
    let lang = use_lang()();
    let by = t!(lang, "blog-by");
    let read_more = t!(lang, "blog-read-more");

    rsx! {
        div { class: "page page-blog",
            PageHero { title: t!(lang, "blog-title"), subtitle: t!(lang, "blog-subtitle") }
            section { class: "section",
                div { class: "container card-grid card-grid--three",
                    for post in content::articles(lang) {
                        article { key: "{post.title}", class: "card card--media",
                            img {
                                class: "card__image",
                                src: post.image,
                                alt: "{post.title}",
                                loading: "lazy",
                            }
                            div { class: "card__body",
                                p { class: "card__meta",
                                    span { "{post.date}" }
                                    span { " · {by} {post.author}" }
                                }
                                h2 { class: "card__title", "{post.title}" }
                                p { class: "card__text", "{post.excerpt}" }
                                span { class: "card__more", "{read_more}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
