use api::Program;
use dioxus::prelude::*;

use crate::components::site_root::use_lang;
use crate::content::ProgramIcon;
use crate::t;

use super::{use_content, use_scroll_to_top, Loading, PageHero};

#[component]
pub fn Programs() -> Element {
    use_scroll_to_top();
    let lang = use_lang()();
    let programs = use_content::<Program>();

    let body = match &*programs.read_unchecked() {
        None => rsx! { Loading {} },
        Some(list) => rsx! {
            div { class: "container card-grid",
                for program in list.iter() {
                    {
                        let title = program.title(lang);
                        let icon = ProgramIcon::for_title(title).glyph();
                        rsx! {
                            div { key: "{program.id}", class: "card card--media",
                                img {
                                    class: "card__image",
                                    src: "{program.image}",
                                    alt: "{title}",
                                    loading: "lazy",
                                }
                                div { class: "card__body",
                                    div { class: "card__heading",
                                        span { class: "card__icon", aria_hidden: "true", "{icon}" }
                                        h2 { class: "card__title", "{title}" }
                                    }
                                    p { class: "card__text", {program.description(lang)} }
                                }
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div { class: "page page-programs",
            PageHero { title: t!(lang, "programs-title"), subtitle: t!(lang, "programs-subtitle") }
            section { class: "section", {body} }
        }
    }
}
