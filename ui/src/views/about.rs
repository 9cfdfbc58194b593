use dioxus::prelude::*;

use crate::components::site_root::use_lang;
use crate::t;

use super::{use_scroll_to_top, PageHero};

#[component]
pub fn About() -> Element {
    use_scroll_to_top();
    let lang = use_lang()();

    let sections = [
        ("🎯", t!(lang, "about-mission"), t!(lang, "about-mission-text")),
        ("👁", t!(lang, "about-vision"), t!(lang, "about-vision-text")),
        ("🏅", t!(lang, "about-values"), t!(lang, "about-values-text")),
        ("👥", t!(lang, "about-team"), t!(lang, "about-team-text")),
    ];

    rsx! {
        div { class: "page page-about",
            PageHero { title: t!(lang, "about-title"), subtitle: t!(lang, "about-subtitle") }
            section { class: "section",
                div { class: "container",
                    p { class: "lead", {t!(lang, "about-intro")} }
                    div { class: "card-grid card-grid--two",
                        for (icon, title, text) in sections {
                            div { key: "{title}", class: "card",
                                div { class: "feature__icon", aria_hidden: "true", "{icon}" }
                                h2 { class: "card__title", "{title}" }
                                p { class: "card__text", "{text}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
