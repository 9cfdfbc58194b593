use api::FaqEntry;
use dioxus::prelude::*;

use crate::components::site_root::use_lang;
use crate::t;

use super::{use_content, use_scroll_to_top, Loading, PageHero};

/// Questions as a single-open accordion.
#[component]
pub fn Faq() -> Element {
    use_scroll_to_top();
    let lang = use_lang()();
    let faqs = use_content::<FaqEntry>();
    let mut open = use_signal(|| None::<String>);

    let body = match &*faqs.read_unchecked() {
        None => rsx! { Loading {} },
        Some(list) => rsx! {
            div { class: "container container--narrow accordion",
                for faq in list.iter() {
                    {
                        let id = faq.id.clone();
                        let expanded = open().as_deref() == Some(id.as_str());
                        let toggle_id = id.clone();
                        rsx! {
                            div {
                                key: "{id}",
                                class: if expanded { "accordion__item accordion__item--open" } else { "accordion__item" },
                                button {
                                    class: "accordion__trigger",
                                    aria_expanded: "{expanded}",
                                    onclick: move |_| {
                                        let next = if expanded { None } else { Some(toggle_id.clone()) };
                                        open.set(next);
                                    },
                                    span { {faq.question(lang)} }
                                    span { class: "accordion__chevron", aria_hidden: "true", "⌄" }
                                }
                                if expanded {
                                    div { class: "accordion__content", {faq.answer(lang)} }
                                }
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div { class: "page page-faq",
            PageHero { title: t!(lang, "faq-title"), subtitle: t!(lang, "faq-subtitle") }
            section { class: "section", {body} }
        }
    }
}
