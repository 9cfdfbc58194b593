use dioxus::prelude::*;

use crate::components::site_root::{use_lang, use_site_config};
use crate::t;

use super::{use_scroll_to_top, PageHero};

#[component]
pub fn Contact() -> Element {
    use_scroll_to_top();
    let lang = use_lang()();
    let contact = use_site_config().contact;

    rsx! {
        div { class: "page page-contact",
            PageHero { title: t!(lang, "contact-title"), subtitle: t!(lang, "contact-subtitle") }
            section { class: "section",
                div { class: "container contact-grid",
                    div { class: "stack",
                        div { class: "card contact-card",
                            span { class: "contact-card__icon", aria_hidden: "true", "📍" }
                            div {
                                h2 { class: "card__title", {t!(lang, "contact-address")} }
                                p { class: "card__text", {t!(lang, "contact-address-text")} }
                            }
                        }
                        div { class: "card contact-card",
                            span { class: "contact-card__icon", aria_hidden: "true", "📞" }
                            div {
                                h2 { class: "card__title", {t!(lang, "contact-phone")} }
                                a { class: "card__link", href: contact.tel_href(), dir: "ltr", "{contact.phone}" }
                            }
                        }
                        div { class: "card contact-card",
                            span { class: "contact-card__icon", aria_hidden: "true", "💬" }
                            div {
                                h2 { class: "card__title", {t!(lang, "contact-whatsapp")} }
                                a {
                                    class: "card__link",
                                    href: "{contact.whatsapp_url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    dir: "ltr",
                                    "{contact.phone}"
                                }
                            }
                        }
                        div { class: "card contact-card",
                            span { class: "contact-card__icon", aria_hidden: "true", "🕒" }
                            div {
                                h2 { class: "card__title", {t!(lang, "contact-hours")} }
                                p { class: "card__text", {t!(lang, "contact-hours-text")} }
                                p { class: "card__text", {t!(lang, "contact-friday")} }
                            }
                        }
                    }
                    div { class: "card contact-map",
                        h2 { class: "card__title", {t!(lang, "contact-location")} }
                        if !contact.map_embed_url.is_empty() {
                            iframe {
                                class: "contact-map__frame",
                                src: "{contact.map_embed_url}",
                                title: t!(lang, "contact-location"),
                                "loading": "lazy",
                                "referrerpolicy": "no-referrer-when-downgrade",
                            }
                        }
                    }
                }
            }
        }
    }
}
