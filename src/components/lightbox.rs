//! Project lightboxes.
//!
//! All lightboxes render from the shared [`LightboxController`]: the tracked
//! one gets the `show` class, `aria-hidden="false"` and `display: flex`;
//! every other one is hidden. Keyboard handling is a single document-level
//! listener installed by [`use_lightbox_keys`].
//!
//! [`LightboxController`]: portfolio_core::LightboxController

use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::lightbox::SHOW_CLASS;
use portfolio_core::{ClickTarget, Key as PageKey, LightboxController};
use portfolio_ui::CloseButton;

use crate::context::use_lightbox;
use crate::platform;

/// Hook installing Escape / ArrowLeft / ArrowRight handling for the lightboxes.
pub fn use_lightbox_keys() {
    let mut lightbox = use_lightbox();

    let _listener = use_hook(move || {
        Rc::new(platform::on_document_key(move |key| {
            let key = PageKey::from_dom(key);
            // Keys are ignored while closed; avoid a write.
            let open = lightbox.peek().is_open();
            if open && lightbox.write().handle_key(key) {
                tracing::debug!(?key, index = lightbox.peek().index(), "lightbox key handled");
            }
        }))
    });
}

/// Open the lightbox with `id`, logging unknown ids.
pub fn open_lightbox(mut lightbox: Signal<LightboxController>, id: &str) {
    if let Err(e) = lightbox.write().open(id) {
        tracing::warn!("{}", e);
    }
}

/// Modal overlay for one project.
#[component]
pub fn Lightbox(
    /// Registry id (`project1`, ...)
    id: String,
    /// Heading inside the panel
    title: String,
    children: Element,
) -> Element {
    let mut lightbox = use_lightbox();
    let shown = lightbox.read().is_shown(&id);
    let aria_hidden = lightbox.read().aria_hidden(&id);

    let class = if shown {
        format!("lightbox {}", SHOW_CLASS)
    } else {
        "lightbox".to_string()
    };
    let display = if shown { "flex" } else { "none" };
    let title_id = format!("{}-title", id);

    rsx! {
        div {
            id: "{id}",
            class: "{class}",
            style: "display: {display};",
            role: "dialog",
            "aria-modal": "true",
            "aria-hidden": aria_hidden,
            "aria-labelledby": "{title_id}",
            onclick: move |_| {
                lightbox.write().dismiss(ClickTarget::Background);
            },

            div {
                class: "lightbox-content",
                onclick: move |e| e.stop_propagation(),

                CloseButton {
                    onclick: move |_| {
                        lightbox.write().dismiss(ClickTarget::CloseButton);
                    }
                }

                h3 { id: "{title_id}", class: "lightbox-title", "{title}" }
                {children}

                p { class: "lightbox-hint", "← → to browse · Esc to close" }
            }
        }
    }
}
