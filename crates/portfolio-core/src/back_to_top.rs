//! Back-to-top visibility rule.

use crate::config::ScrollConfig;

/// Shows the back-to-top button once the page has scrolled past a threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackToTop {
    threshold: f64,
}

impl BackToTop {
    pub fn new(config: &ScrollConfig) -> Self {
        Self {
            threshold: config.back_to_top_threshold_px,
        }
    }

    /// Visible iff `scroll_y` is strictly past the threshold.
    pub fn is_visible(&self, scroll_y: f64) -> bool {
        scroll_y > self.threshold
    }

    /// CSS `display` value for the button at `scroll_y`.
    pub fn display(&self, scroll_y: f64) -> &'static str {
        if self.is_visible(scroll_y) {
            "block"
        } else {
            "none"
        }
    }
}

impl Default for BackToTop {
    fn default() -> Self {
        Self::new(&ScrollConfig::default())
    }
}
