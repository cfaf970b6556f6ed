//! Site configuration.
//!
//! Every tunable the page behaviors rely on lives here. Defaults reproduce the
//! published page; a JSON document can override any section:
//!
//! ```json
//! {
//!   "typing": { "messages": ["Hello.", "Welcome."], "type_delay_ms": 60 },
//!   "mail": { "booking_recipient": "tables@bistro.example" }
//! }
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};

/// Root configuration for the page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub typing: TypingConfig,
    pub scroll: ScrollConfig,
    pub lightbox: LightboxConfig,
    pub mail: MailConfig,
    pub consent: ConsentConfig,
}

/// Typing animator messages and timings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub messages: Vec<String>,
    pub type_delay_ms: u64,
    pub delete_delay_ms: u64,
    /// Pause once a message is fully typed
    pub pause_ms: u64,
    /// Delay before the next message starts after a full delete
    pub advance_delay_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            messages: vec![
                "Business Management with Innovation and Technology student.".to_string(),
                "Passionate about digital transformation and cybersecurity.".to_string(),
                "Transforming business ideas into digital solutions.".to_string(),
            ],
            type_delay_ms: 45,
            delete_delay_ms: 25,
            pause_ms: 1600,
            advance_delay_ms: 200,
        }
    }
}

impl TypingConfig {
    pub fn type_delay(&self) -> Duration {
        Duration::from_millis(self.type_delay_ms)
    }

    pub fn delete_delay(&self) -> Duration {
        Duration::from_millis(self.delete_delay_ms)
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }
}

/// Scroll-driven behaviors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Distance above the viewport bottom an element's top must cross to reveal
    pub reveal_offset_px: f64,
    /// Scroll offset above which the back-to-top button shows
    pub back_to_top_threshold_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            reveal_offset_px: 80.0,
            back_to_top_threshold_px: 300.0,
        }
    }
}

/// Ordered lightbox registry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightboxConfig {
    pub ids: Vec<String>,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            ids: vec![
                "project1".to_string(),
                "project2".to_string(),
                "project3".to_string(),
            ],
        }
    }
}

/// Fixed recipients for generated mail drafts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    pub contact_recipient: String,
    pub booking_recipient: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            contact_recipient: "s.o.igbe@edu.salford.ac.uk".to_string(),
            booking_recipient: "restaurant@example.com".to_string(),
        }
    }
}

/// Cookie consent persistence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsentConfig {
    pub storage_key: String,
}

impl Default for ConsentConfig {
    fn default() -> Self {
        Self {
            storage_key: "cookieConsent".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON document and validate it.
    pub fn from_json(json: &str) -> SiteResult<Self> {
        let config: SiteConfig =
            serde_json::from_str(json).map_err(|e| SiteError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the behaviors cannot run with.
    pub fn validate(&self) -> SiteResult<()> {
        if self.typing.messages.is_empty() {
            return Err(SiteError::Config("typing.messages is empty".to_string()));
        }
        if let Some(i) = self.typing.messages.iter().position(|m| m.is_empty()) {
            return Err(SiteError::Config(format!("typing.messages[{}] is empty", i)));
        }
        if self.lightbox.ids.is_empty() {
            return Err(SiteError::Config("lightbox.ids is empty".to_string()));
        }
        if self.mail.contact_recipient.trim().is_empty()
            || self.mail.booking_recipient.trim().is_empty()
        {
            return Err(SiteError::Config("mail recipient is blank".to_string()));
        }
        if self.consent.storage_key.is_empty() {
            return Err(SiteError::Config("consent.storage_key is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_page() {
        let config = SiteConfig::default();
        assert_eq!(config.typing.messages.len(), 3);
        assert_eq!(config.typing.type_delay(), Duration::from_millis(45));
        assert_eq!(config.typing.pause(), Duration::from_millis(1600));
        assert_eq!(config.scroll.reveal_offset_px, 80.0);
        assert_eq!(config.scroll.back_to_top_threshold_px, 300.0);
        assert_eq!(config.lightbox.ids, vec!["project1", "project2", "project3"]);
        assert_eq!(config.consent.storage_key, "cookieConsent");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config =
            SiteConfig::from_json(r#"{ "mail": { "booking_recipient": "tables@bistro.example" } }"#)
                .unwrap();
        assert_eq!(config.mail.booking_recipient, "tables@bistro.example");
        assert_eq!(config.mail.contact_recipient, "s.o.igbe@edu.salford.ac.uk");
        assert_eq!(config.typing, TypingConfig::default());
    }

    #[test]
    fn empty_message_rejected() {
        let err = SiteConfig::from_json(r#"{ "typing": { "messages": ["ok", ""] } }"#).unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn empty_lightbox_registry_rejected() {
        let err = SiteConfig::from_json(r#"{ "lightbox": { "ids": [] } }"#).unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn empty_message_list_rejected() {
        let err = SiteConfig::from_json(r#"{ "typing": { "messages": [] } }"#).unwrap_err();
        assert_eq!(err, SiteError::Config("typing.messages is empty".to_string()));
    }

    #[test]
    fn blank_recipient_rejected() {
        for json in [
            r#"{ "mail": { "contact_recipient": "   " } }"#,
            r#"{ "mail": { "booking_recipient": "" } }"#,
        ] {
            let err = SiteConfig::from_json(json).unwrap_err();
            assert_eq!(err, SiteError::Config("mail recipient is blank".to_string()));
        }
    }

    #[test]
    fn empty_storage_key_rejected() {
        let err = SiteConfig::from_json(r#"{ "consent": { "storage_key": "" } }"#).unwrap_err();
        assert_eq!(err, SiteError::Config("consent.storage_key is empty".to_string()));
    }

    #[test]
    fn malformed_json_is_config_error() {
        assert!(matches!(
            SiteConfig::from_json("{ not json"),
            Err(SiteError::Config(_))
        ));
    }
}
