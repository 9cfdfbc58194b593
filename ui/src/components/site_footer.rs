use dioxus::prelude::*;

use crate::components::site_header::nav_link;
use crate::components::site_root::{use_lang, use_site_config};
use crate::core::platform;
use crate::page::Page;
use crate::t;

#[component]
pub fn SiteFooter() -> Element {
    let lang = use_lang()();
    let contact = use_site_config().contact;
    let year = platform::current_year();

    let socials = [
        ("Facebook".to_string(), contact.facebook_url.clone()),
        ("Instagram".to_string(), contact.instagram_url.clone()),
        ("YouTube".to_string(), contact.youtube_url.clone()),
        (t!(lang, "footer-tiktok"), contact.tiktok_url.clone()),
    ];

    rsx! {
        footer { class: "footer",
            div { class: "container footer__grid",
                div { class: "footer__column",
                    h3 { class: "footer__heading", {t!(lang, "footer-about")} }
                    p { class: "footer__text", {t!(lang, "footer-about-text")} }
                    p { class: "footer__tagline", {t!(lang, "footer-tagline")} }
                }

                div { class: "footer__column",
                    h3 { class: "footer__heading", {t!(lang, "footer-quick-links")} }
                    ul { class: "footer__links",
                        for page in Page::FOOTER {
                            li { key: "{page.path()}",
                                {
                                    let label = match page {
                                        Page::Blog => t!(lang, "footer-blog"),
                                        other => other.label(lang),
                                    };
                                    nav_link(page, &label)
                                }
                            }
                        }
                    }
                }

                div { class: "footer__column",
                    h3 { class: "footer__heading", {t!(lang, "footer-contact-info")} }
                    p { class: "footer__text", {t!(lang, "contact-address-text")} }
                    p {
                        a { href: contact.tel_href(), dir: "ltr", "{contact.phone}" }
                    }
                    p {
                        a {
                            href: "{contact.whatsapp_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            {t!(lang, "contact-whatsapp")}
                        }
                    }
                    h3 { class: "footer__heading", {t!(lang, "contact-hours")} }
                    p { class: "footer__text", {t!(lang, "contact-hours-text")} }
                    p { class: "footer__text", {t!(lang, "contact-friday")} }
                }

                div { class: "footer__column",
                    h3 { class: "footer__heading", {t!(lang, "footer-follow-us")} }
                    ul { class: "footer__social",
                        for (name, url) in socials.into_iter().filter(|(_, url)| !url.is_empty()) {
                            li { key: "{url}",
                                a {
                                    href: "{url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "{name}"
                                }
                            }
                        }
                    }
                }
            }
            p { class: "footer__rights", {t!(lang, "footer-rights", year = year)} }
        }
    }
}
