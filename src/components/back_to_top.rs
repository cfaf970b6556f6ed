//! Back-to-top button.

use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::BackToTop as BackToTopRule;
use portfolio_ui::IconButton;

use crate::context::get_site_config;
use crate::platform;

/// Floating button shown once the page is scrolled past the threshold.
#[component]
pub fn BackToTop() -> Element {
    let rule = BackToTopRule::new(&get_site_config().scroll);
    let mut scroll_y = use_signal(platform::scroll_y);

    let _listener = use_hook(move || {
        Rc::new(platform::on_window("scroll", move || {
            scroll_y.set(platform::scroll_y());
        }))
    });

    let display = rule.display(scroll_y());

    rsx! {
        div { class: "back-to-top", style: "display: {display};",
            IconButton {
                id: "backToTop".to_string(),
                aria_label: "Back to top".to_string(),
                onclick: move |_| platform::scroll_to_top(),
                "\u{2191}"
            }
        }
    }
}
