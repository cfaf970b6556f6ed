use dioxus::prelude::*;
use portfolio_core::{LightboxController, Revealer};

use crate::context::get_site_config;
use crate::pages::{Home, NotFound};
use crate::platform;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The single portfolio page
/// - anything else - Not found, with a link home
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, the page-wide controllers, and routing.
#[component]
pub fn App() -> Element {
    let config = get_site_config();

    // Page-wide state, owned here and shared by context
    let lightbox: Signal<LightboxController> =
        use_signal(|| LightboxController::new(&config.lightbox));
    let revealer: Signal<Revealer> = use_signal(|| Revealer::new(&config.scroll));

    use_context_provider(|| lightbox);
    use_context_provider(|| revealer);

    // Page scroll follows the lightbox state
    use_effect(move || {
        platform::set_scroll_locked(lightbox.read().scroll_locked());
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
