//! Scroll-revealed sections.

use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::reveal::{in_reveal_zone, VISIBLE_CLASS};
use portfolio_core::Revealer;

use crate::context::{get_site_config, use_revealer};
use crate::platform;

/// Measure every reveal-marked element and mark the ones in view.
fn scan(mut revealer: Signal<Revealer>) {
    let viewport = platform::viewport_height();
    let candidates = platform::reveal_candidates();

    // Writing the signal re-renders every section; skip it when nothing new is in view.
    let offset = get_site_config().scroll.reveal_offset_px;
    let pending = {
        let current = revealer.peek();
        candidates
            .iter()
            .any(|(key, top)| !current.is_revealed(key) && in_reveal_zone(*top, viewport, offset))
    };
    if pending {
        let newly = revealer
            .write()
            .scan(viewport, candidates.iter().map(|(key, top)| (key.as_str(), *top)));
        platform::mark_revealed(&newly);
    }
}

/// Hook that scans on mount, scroll and resize.
pub fn use_reveal_scanner() {
    let revealer = use_revealer();

    let _listeners = use_hook(move || {
        Rc::new([
            platform::on_window("scroll", move || scan(revealer)),
            platform::on_window("resize", move || scan(revealer)),
        ])
    });

    use_effect(move || scan(revealer));
}

/// A page section carrying the reveal marker.
#[component]
pub fn RevealSection(
    /// Element id; also the reveal key
    id: String,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let revealer = use_revealer();
    let visible = revealer.read().is_revealed(&id);

    let mut classes = vec!["section", "reveal"];
    if let Some(extra) = class.as_deref() {
        classes.push(extra);
    }
    if visible {
        classes.push(VISIBLE_CLASS);
    }
    let class_attr = classes.join(" ");

    rsx! {
        section {
            id: "{id}",
            class: "{class_attr}",
            "data-reveal": "true",
            {children}
        }
    }
}
