use dioxus::prelude::*;

use crate::components::site_header::nav_link;
use crate::components::site_root::{use_lang, use_site_config};
use crate::components::stats::StatsSection;
use crate::components::testimonials::TestimonialCarousel;
use crate::content::{self, HERO_POSTER, HERO_VIDEO};
use crate::page::Page;
use crate::t;

use super::use_scroll_to_top;

#[component]
pub fn Home() -> Element {
    use_scroll_to_top();
    let lang = use_lang()();
    let config = use_site_config();

    let features = content::features(lang);
    let services = content::services(lang);
    let programs = content::program_previews(lang);

    rsx! {
        div { class: "page page-home",
            section { class: "hero",
                video {
                    class: "hero__video",
                    src: HERO_VIDEO,
                    poster: HERO_POSTER,
                    aria_label: t!(lang, "home-hero-video-alt"),
                    autoplay: true,
                    r#loop: true,
                    muted: true,
                    playsinline: true,
                }
                div { class: "hero__overlay" }
                div { class: "container hero__content",
                    h1 { class: "hero__title", {t!(lang, "home-hero-title")} }
                    p { class: "hero__subtitle", {t!(lang, "home-hero-subtitle")} }
                    div { class: "button button--primary button--large",
                        {nav_link(Page::Sessions, &t!(lang, "home-hero-cta"))}
                    }
                }
            }

            section { class: "section",
                div { class: "container",
                    h2 { class: "section__title text-gradient", {t!(lang, "home-why-choose")} }
                    div { class: "card-grid",
                        for feature in features {
                            div { key: "{feature.title}", class: "card feature",
                                div { class: "feature__icon", aria_hidden: "true", "{feature.icon}" }
                                h3 { class: "card__title", "{feature.title}" }
                                p { class: "card__text", "{feature.description}" }
                            }
                        }
                    }
                }
            }

            section { class: "section section--muted",
                div { class: "container",
                    h2 { class: "section__title", {t!(lang, "home-services")} }
                    p { class: "section__subtitle", {t!(lang, "home-services-subtitle")} }
                    div { class: "card-grid",
                        for service in services {
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
                                        h3 { class: "card__title", "{service.title}" }
                                    }
                                    p { class: "card__text", "{service.summary}" }
                                    div { class: "button button--outline",
                                        {nav_link(Page::Services, &t!(lang, "common-learn-more"))}
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "section",
                div { class: "container container--narrow",
                    h2 { class: "section__title", {t!(lang, "home-testimonials")} }
                    p { class: "section__subtitle", {t!(lang, "home-testimonials-subtitle")} }
                    TestimonialCarousel {}
                }
            }

            StatsSection {}

            section { class: "section",
                div { class: "container",
                    h2 { class: "section__title", {t!(lang, "home-programs")} }
                    p { class: "section__subtitle", {t!(lang, "home-programs-subtitle")} }
                    div { class: "card-grid card-grid--three",
                        for program in programs {
                            div { key: "{program.title}", class: "card card--media",
                                img {
                                    class: "card__image",
                                    src: program.image,
                                    alt: "{program.title}",
                                    loading: "lazy",
                                }
                                div { class: "card__body",
                                    h3 { class: "card__title", "{program.title}" }
                                    p { class: "card__text", "{program.description}" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "section section--cta",
                div { class: "container",
                    h2 { class: "section__title section__title--light", {t!(lang, "home-final-cta")} }
                    p { class: "section__subtitle section__subtitle--light", {t!(lang, "home-final-cta-text")} }
                    a {
                        class: "button button--secondary button--large",
                        href: "{config.contact.booking_whatsapp_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {t!(lang, "common-book-whatsapp")}
                    }
                }
            }
        }
    }
}
