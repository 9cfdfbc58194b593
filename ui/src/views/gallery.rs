use api::GalleryImage;
use dioxus::prelude::*;

use crate::components::site_root::use_lang;
use crate::t;

use super::{use_content, use_scroll_to_top, Loading, PageHero};

#[component]
pub fn Gallery() -> Element {
    use_scroll_to_top();
    let lang = use_lang()();
    let images = use_content::<GalleryImage>();

    let body = match &*images.read_unchecked() {
        None => rsx! { Loading {} },
        Some(list) => rsx! {
            div { class: "container gallery-grid",
                for image in list.iter() {
                    figure { key: "{image.id}", class: "gallery__item",
                        img {
                            class: "gallery__image",
                            src: "{image.url}",
                            alt: image.alt(lang),
                            loading: "lazy",
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div { class: "page page-gallery",
            PageHero { title: t!(lang, "gallery-title"), subtitle: t!(lang, "gallery-subtitle") }
            section { class: "section", {body} }
        }
    }
}
