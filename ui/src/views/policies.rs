use api::Policy;
use dioxus::prelude::*;

use crate::components::site_root::use_lang;
use crate::t;

use super::{use_content, use_scroll_to_top, Loading, PageHero};

#[component]
pub fn Policies() -> Element {
    use_scroll_to_top();
    let lang = use_lang()();
    let policies = use_content::<Policy>();

    let body = match &*policies.read_unchecked() {
        None => rsx! { Loading {} },
        Some(list) => rsx! {
            div { class: "container container--narrow stack",
                for policy in list.iter() {
                    div { key: "{policy.id}", class: "card",
                        h2 { class: "card__title", {policy.title(lang)} }
                        p { class: "card__text", {policy.text(lang)} }
                    }
                }
            }
        },
    };

    rsx! {
        div { class: "page page-policies",
            PageHero { title: t!(lang, "policies-title"), subtitle: t!(lang, "policies-subtitle") }
            section { class: "section", {body} }
        }
    }
}
