//! Shared page state for components.
//!
//! The root `App` owns one [`LightboxController`] and one [`Revealer`] and
//! provides them as signals; every component that opens a lightbox or renders
//! a reveal-marked section reads the same instance.
//!
//! ## Usage
//!
//! ```ignore
//! let mut lightbox = use_lightbox();
//! lightbox.write().open("project2")?;
//! ```

use dioxus::prelude::*;
use portfolio_core::{LightboxController, Revealer, SiteConfig};

/// Get the site configuration.
pub fn get_site_config() -> &'static SiteConfig {
    crate::get_site_config()
}

/// Hook to access the lightbox controller.
pub fn use_lightbox() -> Signal<LightboxController> {
    use_context::<Signal<LightboxController>>()
}

/// Hook to access the reveal tracker.
pub fn use_revealer() -> Signal<Revealer> {
    use_context::<Signal<Revealer>>()
}
