//! Fallback for unknown paths.

use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!(path = %path, "unknown route");

    rsx! {
        main { class: "not-found",
            h1 { class: "page-title", "Page not found" }
            p { class: "body-text", "Nothing lives at /{path}." }
            Link { class: "btn-primary", to: Route::Home {}, "Back to the portfolio" }
        }
    }
}
