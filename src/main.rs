#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod platform;
mod theme;

use std::sync::OnceLock;

use anyhow::Context;
use portfolio_core::SiteConfig;
use tracing::Level;

/// Site configuration shipped with the page.
const SITE_JSON: &str = include_str!("../assets/site.json");

/// Global site configuration, loaded on first use
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the site configuration (embedded JSON, or defaults if it is unusable)
pub fn get_site_config() -> &'static SiteConfig {
    SITE_CONFIG.get_or_init(|| match parse_site_config(SITE_JSON) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Falling back to default site config: {:#}", e);
            SiteConfig::default()
        }
    })
}

fn parse_site_config(json: &str) -> anyhow::Result<SiteConfig> {
    SiteConfig::from_json(json).context("embedded assets/site.json is invalid")
}

fn main() {
    let _ = dioxus::logger::init(Level::INFO);

    let config = get_site_config();
    tracing::info!(
        messages = config.typing.messages.len(),
        lightboxes = config.lightbox.ids.len(),
        "Starting portfolio page"
    );

    dioxus::LaunchBuilder::web().launch(app::App);
}
