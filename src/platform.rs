//! Browser bindings.
//!
//! Everything that touches `window`, `document` or `localStorage` lives here.
//! Each function degrades to a no-op (or a neutral value) when the browser
//! object it needs is missing.

use gloo::events::EventListener;
use portfolio_core::reveal::{key_position, reveal_key, REVEAL_ATTRIBUTE, VISIBLE_CLASS};
use portfolio_core::{ConsentStore, MailHandler, MemoryStore, SiteError, SiteResult};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, NodeList, ScrollBehavior, ScrollToOptions, Storage, Window};

fn window() -> Option<Window> {
    web_sys::window()
}

fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

// ═══════════════════════════════════════════════════════════════════════
// Scroll & viewport
// ═══════════════════════════════════════════════════════════════════════

/// Vertical scroll offset of the page.
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Height of the layout viewport.
pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Smooth-scroll back to the top of the page.
pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Disable or restore page scrolling (body `overflow`).
pub fn set_scroll_locked(locked: bool) {
    let Some(body) = document().and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(e) = result {
        tracing::debug!("body overflow not updated: {}", js_error(e));
    }
}

fn reveal_nodes(document: &Document) -> Option<NodeList> {
    match document.query_selector_all(&format!("[{}]", REVEAL_ATTRIBUTE)) {
        Ok(nodes) => Some(nodes),
        Err(e) => {
            tracing::debug!("reveal query failed: {}", js_error(e));
            None
        }
    }
}

/// Reveal key and top edge of every reveal-marked element.
pub fn reveal_candidates() -> Vec<(String, f64)> {
    let Some(nodes) = document().as_ref().and_then(reveal_nodes) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| {
            let el = nodes.item(i)?.dyn_into::<Element>().ok()?;
            Some((reveal_key(&el.id(), i), el.get_bounding_client_rect().top()))
        })
        .collect()
}

/// Add the visible class to the elements behind `keys`.
///
/// Sections rendered by the app also get the class on their next render; this
/// covers marked elements the app does not render itself.
pub fn mark_revealed(keys: &[String]) {
    let Some(document) = document() else {
        return;
    };
    let nodes = reveal_nodes(&document);

    for key in keys {
        let element = match key_position(key) {
            Some(position) => nodes
                .as_ref()
                .and_then(|nodes| nodes.item(position))
                .and_then(|node| node.dyn_into::<Element>().ok()),
            None => document.get_element_by_id(key),
        };
        let Some(element) = element else {
            tracing::debug!(key = %key, "revealed element no longer in the document");
            continue;
        };
        if let Err(e) = element.class_list().add_1(VISIBLE_CLASS) {
            tracing::debug!("visible class not added: {}", js_error(e));
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Events
// ═══════════════════════════════════════════════════════════════════════

/// Listen for `event` on the window. The listener is removed when dropped.
pub fn on_window(event: &'static str, mut callback: impl FnMut() + 'static) -> Option<EventListener> {
    let window = window()?;
    Some(EventListener::new(&window, event, move |_| callback()))
}

/// Listen for `keydown` on the document, passing the DOM key name.
pub fn on_document_key(mut callback: impl FnMut(&str) + 'static) -> Option<EventListener> {
    let document = document()?;
    Some(EventListener::new(&document, "keydown", move |event| {
        if let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
            callback(&event.key());
        }
    }))
}

// ═══════════════════════════════════════════════════════════════════════
// Mail hand-off
// ═══════════════════════════════════════════════════════════════════════

/// Hands `mailto:` URIs to the browser by navigating to them.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserMailer;

impl MailHandler for BrowserMailer {
    fn hand_off(&self, uri: &str) -> SiteResult<()> {
        let window = window().ok_or_else(|| SiteError::MailHandoff("no window".to_string()))?;
        window
            .location()
            .set_href(uri)
            .map_err(|e| SiteError::MailHandoff(js_error(e)))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Local storage
// ═══════════════════════════════════════════════════════════════════════

/// `window.localStorage`, storing raw strings.
pub struct BrowserStorage(Storage);

impl ConsentStore for BrowserStorage {
    fn get(&self, key: &str) -> SiteResult<Option<String>> {
        self.0
            .get_item(key)
            .map_err(|e| SiteError::Storage(js_error(e)))
    }

    fn set(&self, key: &str, value: &str) -> SiteResult<()> {
        self.0
            .set_item(key, value)
            .map_err(|e| SiteError::Storage(js_error(e)))
    }
}

/// Local storage if the browser allows it, otherwise an in-memory store for this page.
pub fn consent_store() -> Box<dyn ConsentStore> {
    match window().map(|w| w.local_storage()) {
        Some(Ok(Some(storage))) => Box::new(BrowserStorage(storage)),
        _ => {
            tracing::warn!("localStorage unavailable; consent will not persist");
            Box::new(MemoryStore::new())
        }
    }
}
