use dioxus::prelude::*;

use crate::components::site_root::use_lang;
use crate::content::{self, TestimonialRecord};
use crate::core::carousel::{ArrowLayout, Carousel};
use crate::t;

/// One testimonial at a time with previous/next arrows and a dot per record.
#[component]
pub fn TestimonialCarousel() -> Element {
    let lang = use_lang()();
    let records: Vec<TestimonialRecord> = content::testimonials(lang);
    let mut carousel = use_signal(|| Carousel::new(records.len()));

    let Some(state) = carousel() else {
        return rsx! {};
    };
    let Some(active) = state.active(&records).cloned() else {
        return rsx! {};
    };
    let arrows = ArrowLayout::for_lang(lang);
    let index = state.index();
    let dot_labels: Vec<String> = (1..=state.len())
        .map(|position| {
            let position = position.to_string();
            t!(lang, "testimonial-goto", index = position)
        })
        .collect();

    rsx! {
        div { class: "card testimonial",
            // Keyed by index so the fade-in restarts on every change.
            div { key: "{index}", class: "testimonial__body",
                p { class: "testimonial__text", "\u{201C}{active.text}\u{201D}" }
                p { class: "testimonial__name", "{active.display_name}" }
            }
            div { class: "testimonial__controls",
                button {
                    class: "icon-button",
                    aria_label: t!(lang, "testimonial-previous"),
                    onclick: move |_| carousel.with_mut(|c| {
                        if let Some(c) = c {
                            c.previous();
                        }
                    }),
                    "{arrows.previous}"
                }
                div { class: "testimonial__dots",
                    for (i, label) in dot_labels.into_iter().enumerate() {
                        button {
                            key: "{i}",
                            class: if state.is_active(i) { "dot dot--active" } else { "dot" },
                            aria_label: label,
                            onclick: move |_| carousel.with_mut(|c| {
                                if let Some(c) = c {
                                    c.jump(i);
                                }
                            }),
                        }
                    }
                }
                button {
                    class: "icon-button",
                    aria_label: t!(lang, "testimonial-next"),
                    onclick: move |_| carousel.with_mut(|c| {
                        if let Some(c) = c {
                            c.next();
                        }
                    }),
                    "{arrows.next}"
                }
            }
        }
    }
}
