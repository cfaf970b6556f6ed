//! Scroll-triggered reveal.
//!
//! Elements carrying the reveal marker are keyed by their id, or by their
//! position among marked elements when they have none (see [`reveal_key`]). A scan
//! measures each element's top edge against the viewport; once an element has
//! crossed the threshold it stays revealed.

use std::collections::HashSet;

use crate::config::ScrollConfig;

/// Attribute marking reveal candidates in the DOM.
pub const REVEAL_ATTRIBUTE: &str = "data-reveal";

/// Class added to revealed elements.
pub const VISIBLE_CLASS: &str = "visible";

/// Whether an element whose top edge sits at `top` is inside the reveal zone.
pub fn in_reveal_zone(top: f64, viewport_height: f64, offset: f64) -> bool {
    top < viewport_height - offset
}

/// Key for the marked element at `position`: its id, or a positional key when
/// the id is empty.
///
/// Positional keys contain a space, so they never collide with an element id.
pub fn reveal_key(id: &str, position: u32) -> String {
    if id.is_empty() {
        format!("{} {}", REVEAL_ATTRIBUTE, position)
    } else {
        id.to_string()
    }
}

/// Position stored in a key built by [`reveal_key`] for an element without an id.
pub fn key_position(key: &str) -> Option<u32> {
    key.strip_prefix(REVEAL_ATTRIBUTE)?
        .strip_prefix(' ')?
        .parse()
        .ok()
}

/// Monotone set of revealed elements.
#[derive(Clone, Debug, PartialEq)]
pub struct Revealer {
    offset: f64,
    revealed: HashSet<String>,
}

impl Revealer {
    pub fn new(config: &ScrollConfig) -> Self {
        Self {
            offset: config.reveal_offset_px,
            revealed: HashSet::new(),
        }
    }

    /// Evaluate every `(key, top)` pair and return the keys revealed by this scan.
    ///
    /// Elements outside the zone are left as they are; nothing is ever un-revealed.
    pub fn scan<'a, I>(&mut self, viewport_height: f64, elements: I) -> Vec<String>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut newly = Vec::new();
        for (key, top) in elements {
            if in_reveal_zone(top, viewport_height, self.offset) && self.revealed.insert(key.to_string()) {
                newly.push(key.to_string());
            }
        }
        if !newly.is_empty() {
            tracing::debug!(count = newly.len(), "revealed elements");
        }
        newly
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

impl Default for Revealer {
    fn default() -> Self {
        Self::new(&ScrollConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_boundary_is_strict() {
        assert!(in_reveal_zone(619.0, 700.0, 80.0));
        assert!(!in_reveal_zone(620.0, 700.0, 80.0));
        assert!(in_reveal_zone(-500.0, 700.0, 80.0));
    }

    #[test]
    fn scan_reports_only_new_reveals() {
        let mut revealer = Revealer::default();

        let first = revealer.scan(800.0, [("about", 100.0), ("menu", 1500.0)]);
        assert_eq!(first, vec!["about".to_string()]);

        let second = revealer.scan(800.0, [("about", 50.0), ("menu", 600.0)]);
        assert_eq!(second, vec!["menu".to_string()]);

        assert!(revealer.scan(800.0, [("about", 50.0), ("menu", 600.0)]).is_empty());
    }

    #[test]
    fn elements_without_id_keyed_by_position() {
        assert_eq!(reveal_key("about", 0), "about");
        assert_eq!(key_position("about"), None);

        let key = reveal_key("", 3);
        assert_eq!(key_position(&key), Some(3));

        let mut revealer = Revealer::default();
        let keys = [reveal_key("about", 0), reveal_key("", 1)];
        let newly = revealer.scan(800.0, [(keys[0].as_str(), 900.0), (keys[1].as_str(), 100.0)]);
        assert_eq!(newly, vec![keys[1].clone()]);
        assert!(revealer.is_revealed(&keys[1]));
        assert!(!revealer.is_revealed("about"));
    }

    #[test]
    fn never_unreveals() {
        let mut revealer = Revealer::default();
        revealer.scan(800.0, [("hero", 10.0)]);
        // Scrolled far back up; element now below the fold.
        revealer.scan(800.0, [("hero", 5000.0)]);
        assert!(revealer.is_revealed("hero"));
        assert_eq!(revealer.revealed_count(), 1);
    }
}
