//! Keyboard-activatable cards.
//!
//! A `div` with `role="button"` that reacts to Enter and Space exactly as it
//! does to a click.

use dioxus::prelude::*;
use portfolio_core::Key as PageKey;

#[derive(Clone, PartialEq, Props)]
pub struct ActivatableCardProps {
    /// Card class (`cert-card`, `project-card`, ...)
    pub class: String,
    /// Accessible name announced for the card
    pub label: String,
    /// Runs on click, Enter and Space
    pub onactivate: EventHandler<()>,
    #[props(default = false)]
    pub pressed: bool,
    pub children: Element,
}

#[component]
pub fn ActivatableCard(props: ActivatableCardProps) -> Element {
    let onactivate = props.onactivate;

    rsx! {
        div {
            class: "{props.class}",
            role: "button",
            tabindex: "0",
            "aria-label": "{props.label}",
            "aria-pressed": if props.pressed { "true" } else { "false" },
            onclick: move |_| onactivate.call(()),
            onkeydown: move |e: KeyboardEvent| {
                if PageKey::from_dom(&e.key().to_string()).activates() {
                    // Space would otherwise scroll the page.
                    e.prevent_default();
                    onactivate.call(());
                }
            },
            {props.children}
        }
    }
}
