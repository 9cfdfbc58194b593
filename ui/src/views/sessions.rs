use api::Lang;
use dioxus::prelude::*;

use crate::components::site_root::{use_lang, use_site_config};
use crate::core::booking::{BookingError, BookingField, BookingRequest};
use crate::t;

use super::{use_scroll_to_top, PageHero};

fn field_label(field: BookingField, lang: Lang) -> String {
    match field {
        BookingField::Name => t!(lang, "sessions-name"),
        BookingField::Phone => t!(lang, "sessions-phone"),
        BookingField::Email => t!(lang, "sessions-email"),
        BookingField::ChildAge => t!(lang, "sessions-child-age"),
        BookingField::Service => t!(lang, "sessions-service"),
        BookingField::Message => t!(lang, "sessions-message"),
    }
}

fn input_type(field: BookingField) -> &'static str {
    match field {
        BookingField::Phone => "tel",
        BookingField::Email => "email",
        _ => "text",
    }
}

#[derive(Debug, Clone, PartialEq)]
enum FormStatus {
    Editing,
    Submitted,
    Rejected(Vec<BookingField>),
}

#[component]
pub fn Sessions() -> Element {
    use_scroll_to_top();
    let lang = use_lang()();
    let whatsapp = use_site_config().contact.booking_whatsapp_url;

    let mut request = use_signal(BookingRequest::default);
    let mut status = use_signal(|| FormStatus::Editing);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        match request.read().submit() {
            Ok(()) => {
                status.set(FormStatus::Submitted);
            }
            Err(BookingError::MissingFields(missing)) => {
                tracing::debug!(?missing, "booking form incomplete");
                status.set(FormStatus::Rejected(missing));
                return;
            }
        }
        request.set(BookingRequest::default());
    };

    let missing = match status() {
        FormStatus::Rejected(fields) => fields,
        _ => Vec::new(),
    };

    rsx! {
        div { class: "page page-sessions",
            PageHero { title: t!(lang, "sessions-title"), subtitle: t!(lang, "sessions-subtitle") }
            section { class: "section",
                div { class: "container container--narrow",
                    div { class: "card",
                        form { class: "form", novalidate: true, onsubmit,
                            for field in BookingField::ALL {
                                {
                                    let invalid = missing.contains(&field);
                                    let value = request.read().get(field).to_string();
                                    rsx! {
                                        div { key: "{field.id()}", class: "form__field",
                                            label { class: "form__label", r#for: field.id(), {field_label(field, lang)} }
                                            if field == BookingField::Message {
                                                textarea {
                                                    id: field.id(),
                                                    name: field.id(),
                                                    class: "form__control",
                                                    rows: 4,
                                                    value: "{value}",
                                                    oninput: move |evt: FormEvent| request.with_mut(|r| r.set(field, evt.value())),
                                                }
                                            } else {
                                                input {
                                                    id: field.id(),
                                                    name: field.id(),
                                                    r#type: input_type(field),
                                                    class: if invalid { "form__control form__control--invalid" } else { "form__control" },
                                                    required: field.is_required(),
                                                    aria_invalid: "{invalid}",
                                                    value: "{value}",
                                                    oninput: move |evt: FormEvent| request.with_mut(|r| r.set(field, evt.value())),
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                            {
                                match status() {
                                    FormStatus::Submitted => rsx! {
                                        p { class: "form__notice form__notice--success", role: "status", {t!(lang, "sessions-submitted")} }
                                    },
                                    FormStatus::Rejected(_) => rsx! {
                                        p { class: "form__notice form__notice--error", role: "alert", {t!(lang, "sessions-missing")} }
                                    },
                                    FormStatus::Editing => rsx! {},
                                }
                            }
                            button { class: "button button--primary button--block", r#type: "submit",
                                {t!(lang, "sessions-submit")}
                            }
                        }
                        div { class: "form__alternative",
                            p { {t!(lang, "sessions-whatsapp")} }
                            a {
                                class: "button button--secondary",
                                href: "{whatsapp}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                {t!(lang, "common-book-whatsapp")}
                            }
                        }
                    }
                }
            }
        }
    }
}
