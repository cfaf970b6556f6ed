//! Form feedback line.

use dioxus::prelude::*;
use portfolio_core::Notice;

/// Inline notice under a form, colored by its kind.
///
/// Renders an empty live region when there is nothing to report so screen
/// readers announce the first notice.
#[component]
pub fn FeedbackLine(id: String, notice: Option<Notice>) -> Element {
    let (text, color) = match &notice {
        Some(notice) => (notice.text.clone(), notice.kind.color()),
        None => (String::new(), "inherit"),
    };

    rsx! {
        p {
            id: "{id}",
            class: "form-feedback",
            role: "status",
            "aria-live": "polite",
            style: "color: {color};",
            "{text}"
        }
    }
}
