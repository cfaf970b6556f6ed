//! Lightbox controller.
//!
//! One authoritative open/close/navigate implementation over a fixed, ordered
//! registry of lightbox ids. At most one lightbox is open at a time and the
//! rendered state (show class, `aria-hidden`, inline display, body scroll lock)
//! is derived from the tracked position alone.
//!
//! ## States
//!
//! ```text
//! closed ──open(id)──▶ open(i) ──next/prev──▶ open((i±1) mod N)
//!    ▲                    │
//!    └──close / Escape / background or close-button click
//! ```

use crate::config::LightboxConfig;
use crate::error::{SiteError, SiteResult};
use crate::keys::Key;

/// Class applied to the open lightbox.
pub const SHOW_CLASS: &str = "show";

/// Class marking child elements that dismiss the lightbox when clicked.
pub const DISMISS_CLASS: &str = "close-btn";

/// Where a click inside a lightbox landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The overlay itself, outside the content panel
    Background,
    /// An element carrying the dismiss marker
    CloseButton,
    /// Anything inside the content panel
    Content,
}

impl ClickTarget {
    pub fn dismisses(&self) -> bool {
        matches!(self, ClickTarget::Background | ClickTarget::CloseButton)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightboxController {
    ids: Vec<String>,
    current: Option<usize>,
}

impl LightboxController {
    pub fn new(config: &LightboxConfig) -> Self {
        Self::with_ids(config.ids.clone())
    }

    pub fn with_ids(ids: Vec<String>) -> Self {
        Self { ids, current: None }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Position of the open lightbox, if any.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Position as a signed index, `-1` when closed.
    pub fn index(&self) -> isize {
        self.current.map_or(-1, |i| i as isize)
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current.map(|i| self.ids[i].as_str())
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Whether the lightbox with `id` is the one currently shown.
    pub fn is_shown(&self, id: &str) -> bool {
        self.current_id() == Some(id)
    }

    /// `aria-hidden` value for the lightbox with `id`.
    pub fn aria_hidden(&self, id: &str) -> &'static str {
        if self.is_shown(id) {
            "false"
        } else {
            "true"
        }
    }

    /// Page scroll is disabled while any lightbox is open.
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    /// Open the lightbox with `id`, replacing whichever one is open.
    pub fn open(&mut self, id: &str) -> SiteResult<()> {
        let position = self
            .ids
            .iter()
            .position(|candidate| candidate == id)
            .ok_or_else(|| SiteError::LightboxNotFound(id.to_string()))?;
        self.current = Some(position);
        tracing::debug!(id, position, "lightbox opened");
        Ok(())
    }

    /// Close the open lightbox. Returns whether one was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.current.take().is_some();
        if was_open {
            tracing::debug!("lightbox closed");
        }
        was_open
    }

    /// Show the next lightbox, wrapping. No-op when closed.
    pub fn next(&mut self) -> bool {
        match self.current {
            Some(i) => {
                self.current = Some((i + 1) % self.ids.len());
                true
            }
            None => false,
        }
    }

    /// Show the previous lightbox, wrapping. No-op when closed.
    pub fn previous(&mut self) -> bool {
        match self.current {
            Some(i) => {
                let n = self.ids.len();
                self.current = Some((i + n - 1) % n);
                true
            }
            None => false,
        }
    }

    /// Handle a click inside the open lightbox. Returns whether it closed.
    pub fn dismiss(&mut self, target: ClickTarget) -> bool {
        target.dismisses() && self.close()
    }

    /// Handle a document-level key press. Returns whether the state changed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Escape => self.close(),
            Key::ArrowRight => self.next(),
            Key::ArrowLeft => self.previous(),
            _ => false,
        }
    }
}

impl Default for LightboxController {
    fn default() -> Self {
        Self::new(&LightboxConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let lb = LightboxController::default();
        assert_eq!(lb.index(), -1);
        assert!(!lb.scroll_locked());
        assert_eq!(lb.aria_hidden("project1"), "true");
    }

    #[test]
    fn open_tracks_position() {
        let mut lb = LightboxController::default();
        lb.open("project2").unwrap();
        assert_eq!(lb.index(), 1);
        assert!(lb.is_shown("project2"));
        assert!(!lb.is_shown("project1"));
        assert_eq!(lb.aria_hidden("project2"), "false");
        assert!(lb.scroll_locked());
    }

    #[test]
    fn unknown_id_leaves_state_alone() {
        let mut lb = LightboxController::default();
        lb.open("project3").unwrap();
        let err = lb.open("gallery").unwrap_err();
        assert_eq!(err, SiteError::LightboxNotFound("gallery".to_string()));
        assert_eq!(lb.current_id(), Some("project3"));
    }

    #[test]
    fn arrows_wrap_both_ways() {
        let mut lb = LightboxController::default();
        lb.open("project3").unwrap();
        assert!(lb.handle_key(Key::ArrowRight));
        assert_eq!(lb.current_id(), Some("project1"));
        assert!(lb.handle_key(Key::ArrowLeft));
        assert!(lb.handle_key(Key::ArrowLeft));
        assert_eq!(lb.current_id(), Some("project2"));
        assert!(lb.scroll_locked());
    }

    #[test]
    fn arrows_ignored_while_closed() {
        let mut lb = LightboxController::default();
        assert!(!lb.handle_key(Key::ArrowRight));
        assert!(!lb.handle_key(Key::ArrowLeft));
        assert_eq!(lb.index(), -1);
    }

    #[test]
    fn escape_and_dismiss_targets() {
        let mut lb = LightboxController::default();
        lb.open("project1").unwrap();
        assert!(!lb.dismiss(ClickTarget::Content));
        assert!(lb.is_open());
        assert!(lb.dismiss(ClickTarget::CloseButton));
        assert!(!lb.is_open());

        lb.open("project1").unwrap();
        assert!(lb.dismiss(ClickTarget::Background));

        lb.open("project2").unwrap();
        assert!(lb.handle_key(Key::Escape));
        assert_eq!(lb.index(), -1);
        assert!(!lb.handle_key(Key::Escape));
        assert!(!lb.handle_key(Key::Enter));
    }
}
