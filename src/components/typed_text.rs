//! Typed text hero line.
//!
//! Runs the typing animator for as long as the component is mounted. The
//! animator's stop handle is acquired on mount and released on unmount, so a
//! removed hero never leaves timers running.

use dioxus::prelude::*;
use portfolio_core::typing::{self, StopHandle, Typewriter};

use crate::context::get_site_config;

#[component]
pub fn TypedText() -> Element {
    let mut text = use_signal(String::new);

    let stop: Option<StopHandle> = use_hook(move || {
        let config = get_site_config();
        match Typewriter::new(&config.typing) {
            Ok(typewriter) => {
                let (task, handle) = typing::start(
                    typewriter,
                    move |frame: &str| text.set(frame.to_string()),
                    gloo::timers::future::sleep,
                );
                spawn(task);
                Some(handle)
            }
            Err(e) => {
                tracing::warn!("Typing animator disabled: {}", e);
                None
            }
        }
    });

    use_drop(move || {
        if let Some(handle) = &stop {
            handle.stop();
        }
    });

    rsx! {
        p { class: "typed-line",
            span { id: "typedText", "aria-live": "off", "{text}" }
            span { class: "typed-caret", "aria-hidden": "true", "|" }
        }
    }
}
