//! Cookie consent banner.

use dioxus::prelude::*;
use portfolio_core::{Consent, ConsentBanner, ConsentStore};
use portfolio_ui::{Button, ButtonVariant};

use crate::context::get_site_config;
use crate::platform;

type Banner = ConsentBanner<Box<dyn ConsentStore>>;

fn record(mut banner: Signal<Banner>, choice: Consent) {
    if let Err(e) = banner.write().decide(choice) {
        tracing::warn!("Cookie choice not persisted: {}", e);
    }
}

/// Banner shown until the visitor accepts or denies cookies.
#[component]
pub fn CookieBanner() -> Element {
    let banner: Signal<Banner> = use_signal(|| {
        ConsentBanner::load(platform::consent_store(), get_site_config().consent.storage_key.clone())
    });

    if !banner.read().is_visible() {
        return rsx! {};
    }

    rsx! {
        div {
            id: "cookieBanner",
            class: "cookie-banner",
            role: "region",
            "aria-label": "Cookie consent",
            style: "display: block;",

            p { class: "cookie-text",
                "This site uses local storage to remember your cookie preference. "
                "No tracking happens without your consent."
            }
            div { class: "cookie-actions",
                Button {
                    id: "acceptCookies".to_string(),
                    onclick: move |_| record(banner, Consent::Accepted),
                    "Accept"
                }
                Button {
                    id: "denyCookies".to_string(),
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| record(banner, Consent::Denied),
                    "Deny"
                }
            }
        }
    }
}
