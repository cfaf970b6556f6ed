//! Table booking form → mail draft.

use chrono::Local;
use dioxus::prelude::*;
use portfolio_core::{submit_booking, BookingForm as BookingFields, Notice};
use portfolio_ui::{Button, FeedbackLine, Input};

use crate::context::get_site_config;
use crate::platform::BrowserMailer;

#[component]
pub fn BookingForm() -> Element {
    let mut date = use_signal(String::new);
    let mut time = use_signal(String::new);
    let mut people = use_signal(|| "2".to_string());
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut notice = use_signal(|| Option::<Notice>::None);

    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let fields = BookingFields {
            date: date(),
            time: time(),
            people: people(),
            name: name(),
            email: email(),
        };
        let recipient = &get_site_config().mail.booking_recipient;
        let now = Local::now().naive_local();
        notice.set(Some(submit_booking(&fields, recipient, now, &BrowserMailer)));
    };

    rsx! {
        form {
            id: "bookingForm",
            class: "page-form booking-form",
            novalidate: true,
            onsubmit: onsubmit,

            div { class: "form-row",
                Input {
                    id: "bdate".to_string(),
                    label: "Date".to_string(),
                    input_type: "date".to_string(),
                    min: today,
                    value: date(),
                    oninput: move |s| date.set(s),
                }
                Input {
                    id: "btime".to_string(),
                    label: "Time".to_string(),
                    input_type: "time".to_string(),
                    value: time(),
                    oninput: move |s| time.set(s),
                }
                Input {
                    id: "bpeople".to_string(),
                    label: "Guests".to_string(),
                    input_type: "number".to_string(),
                    min: "1".to_string(),
                    value: people(),
                    oninput: move |s| people.set(s),
                }
            }
            div { class: "form-row",
                Input {
                    id: "bname".to_string(),
                    label: "Name".to_string(),
                    value: name(),
                    oninput: move |s| name.set(s),
                }
                Input {
                    id: "bemail".to_string(),
                    label: "Email".to_string(),
                    input_type: "email".to_string(),
                    value: email(),
                    oninput: move |s| email.set(s),
                }
            }

            Button { button_type: "submit".to_string(), "Request booking" }
            FeedbackLine { id: "bookingFeedback".to_string(), notice: notice() }
        }
    }
}
