//! Host glue: what the browser or native shell can do for us.

use api::Lang;

use super::trigger::{Subscription, VisibilityObserver};

/// Visibility observer for the current host.
#[cfg(target_arch = "wasm32")]
pub fn visibility_observer() -> impl VisibilityObserver {
    dom::DomIntersectionObserver
}

/// Visibility observer for the current host.
#[cfg(not(target_arch = "wasm32"))]
pub fn visibility_observer() -> impl VisibilityObserver {
    super::trigger::MountObserver
}

/// Page offset past which the header switches to its solid style.
pub const SCROLLED_AFTER_PX: f64 = 10.0;

pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > SCROLLED_AFTER_PX
}

/// Report the window's vertical scroll offset now and on every scroll
/// event until the subscription is released. Native shells never report.
pub fn watch_scroll(on_scroll: Box<dyn FnMut(f64)>) -> Subscription {
    #[cfg(target_arch = "wasm32")]
    {
        dom::watch_scroll(on_scroll)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        drop(on_scroll);
        Subscription::inert()
    }
}

/// Reset the window scroll position (page navigation).
pub fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// Mirror language direction and theme onto the document root so page
/// chrome outside the app tree (scrollbars, body background) follows.
pub fn apply_document_attributes(lang: Lang, dark: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let applied = root
            .set_attribute("dir", lang.dir())
            .and_then(|_| root.set_attribute("lang", lang.code()))
            .and_then(|_| root.class_list().toggle_with_force("dark", dark).map(|_| ()));
        if let Err(err) = applied {
            tracing::warn!("could not update document attributes: {err:?}");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (lang, dark);
    }
}

pub fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}

#[cfg(target_arch = "wasm32")]
mod dom {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{IntersectionObserver, IntersectionObserverEntry};

    use crate::core::trigger::{Subscription, VisibilityCallback, VisibilityObserver};

    pub fn watch_scroll(mut on_scroll: Box<dyn FnMut(f64)>) -> Subscription {
        let Some(window) = web_sys::window() else {
            return Subscription::inert();
        };
        on_scroll(window.scroll_y().unwrap_or(0.0));

        let reader = window.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            on_scroll(reader.scroll_y().unwrap_or(0.0));
        });
        if let Err(err) =
            window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        {
            tracing::warn!("could not listen for scroll events: {err:?}");
            return Subscription::inert();
        }

        Subscription::new(move || {
            let _ = window
                .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
            drop(callback);
        })
    }

    /// Browser `IntersectionObserver` bound to one element id.
    pub struct DomIntersectionObserver;

    impl VisibilityObserver for DomIntersectionObserver {
        fn subscribe(&self, region_id: &str, mut on_change: VisibilityCallback) -> Subscription {
            let element = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(region_id));
            let Some(element) = element else {
                tracing::debug!(region_id, "visibility region not in document");
                return Subscription::inert();
            };

            let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                move |entries: js_sys::Array, _observer: IntersectionObserver| {
                    let visible = entries.iter().any(|entry| {
                        entry
                            .unchecked_into::<IntersectionObserverEntry>()
                            .is_intersecting()
                    });
                    on_change(visible);
                },
            );

            let observer = match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
                Ok(observer) => observer,
                Err(err) => {
                    tracing::warn!(region_id, "IntersectionObserver unavailable: {err:?}");
                    return Subscription::inert();
                }
            };
            observer.observe(&element);

            Subscription::new(move || {
                observer.disconnect();
                drop(callback);
            })
        }
    }
}
