//! Contact form → mail draft.

use dioxus::prelude::*;
use portfolio_core::{submit_contact, ContactForm as ContactFields, Notice};
use portfolio_ui::{Button, FeedbackLine, Input, TextArea};

use crate::context::get_site_config;
use crate::platform::BrowserMailer;

#[component]
pub fn ContactForm() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut notice = use_signal(|| Option::<Notice>::None);

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let fields = ContactFields::new(name(), email(), message());
        let recipient = &get_site_config().mail.contact_recipient;
        notice.set(Some(submit_contact(&fields, recipient, &BrowserMailer)));
    };

    rsx! {
        form {
            id: "contactForm",
            class: "page-form",
            novalidate: true,
            onsubmit: onsubmit,

            Input {
                id: "name".to_string(),
                label: "Name".to_string(),
                value: name(),
                oninput: move |s| name.set(s),
                placeholder: "Your name".to_string(),
            }
            Input {
                id: "email".to_string(),
                label: "Email".to_string(),
                input_type: "email".to_string(),
                value: email(),
                oninput: move |s| email.set(s),
                placeholder: "you@example.com".to_string(),
            }
            TextArea {
                id: "message".to_string(),
                label: "Message".to_string(),
                value: message(),
                oninput: move |s| message.set(s),
                placeholder: "How can I help?".to_string(),
            }

            Button { button_type: "submit".to_string(), "Send message" }
            FeedbackLine { id: "formFeedback".to_string(), notice: notice() }
        }
    }
}
