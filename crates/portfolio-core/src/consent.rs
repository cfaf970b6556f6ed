//! Cookie consent banner.
//!
//! The only state that outlives a page load: one string under a fixed key in
//! the browser's local storage. The banner shows while nothing is stored and
//! stays hidden once any choice has been persisted.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{SiteError, SiteResult};

/// A persisted consent decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Consent {
    Accepted,
    Denied,
}

impl Consent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Consent::Accepted => "accepted",
            Consent::Denied => "denied",
        }
    }
}

impl fmt::Display for Consent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Consent {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accepted" => Ok(Consent::Accepted),
            "denied" => Ok(Consent::Denied),
            other => Err(SiteError::Storage(format!("unknown consent value: {}", other))),
        }
    }
}

/// String key/value storage backing the consent flag.
pub trait ConsentStore {
    fn get(&self, key: &str) -> SiteResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> SiteResult<()>;
}

/// In-memory store, used when browser storage is unavailable and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConsentStore for MemoryStore {
    fn get(&self, key: &str) -> SiteResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> SiteResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<T: ConsentStore + ?Sized> ConsentStore for &T {
    fn get(&self, key: &str) -> SiteResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> SiteResult<()> {
        (**self).set(key, value)
    }
}

impl<T: ConsentStore + ?Sized> ConsentStore for Box<T> {
    fn get(&self, key: &str) -> SiteResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> SiteResult<()> {
        (**self).set(key, value)
    }
}

/// Banner state over a [`ConsentStore`].
pub struct ConsentBanner<S> {
    store: S,
    key: String,
    visible: bool,
}

impl<S: ConsentStore> ConsentBanner<S> {
    /// Read the stored flag once and decide the banner's initial visibility.
    ///
    /// A read failure is treated as "no choice yet".
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let visible = match store.get(&key) {
            Ok(stored) => stored.is_none(),
            Err(e) => {
                tracing::warn!("consent flag unreadable: {}", e);
                true
            }
        };
        Self { store, key, visible }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The persisted decision, if it is one we recognise.
    pub fn stored(&self) -> Option<Consent> {
        self.store.get(&self.key).ok().flatten()?.parse().ok()
    }

    pub fn accept(&mut self) -> SiteResult<()> {
        self.decide(Consent::Accepted)
    }

    pub fn deny(&mut self) -> SiteResult<()> {
        self.decide(Consent::Denied)
    }

    /// Persist `choice` and hide the banner.
    ///
    /// The banner hides for this page even if persisting fails.
    pub fn decide(&mut self, choice: Consent) -> SiteResult<()> {
        self.visible = false;
        self.store.set(&self.key, choice.as_str())?;
        tracing::info!(choice = %choice, "cookie consent recorded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl ConsentStore for BrokenStore {
        fn get(&self, _key: &str) -> SiteResult<Option<String>> {
            Err(SiteError::Storage("quota".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> SiteResult<()> {
            Err(SiteError::Storage("quota".to_string()))
        }
    }

    #[test]
    fn consent_strings() {
        assert_eq!(Consent::Accepted.to_string(), "accepted");
        assert_eq!("denied".parse::<Consent>().unwrap(), Consent::Denied);
        assert!("maybe".parse::<Consent>().is_err());
    }

    #[test]
    fn deny_persists_and_hides() {
        let store = MemoryStore::new();
        let mut banner = ConsentBanner::load(&store, "cookieConsent");
        assert!(banner.is_visible());
        banner.deny().unwrap();
        assert!(!banner.is_visible());
        assert_eq!(store.get("cookieConsent").unwrap().as_deref(), Some("denied"));
        assert_eq!(banner.stored(), Some(Consent::Denied));
    }

    #[test]
    fn any_stored_value_hides() {
        let store = MemoryStore::new();
        store.set("cookieConsent", "legacy-yes").unwrap();
        let banner = ConsentBanner::load(&store, "cookieConsent");
        assert!(!banner.is_visible());
        assert_eq!(banner.stored(), None);
    }

    #[test]
    fn broken_storage_still_hides_after_choice() {
        let mut banner = ConsentBanner::load(BrokenStore, "cookieConsent");
        assert!(banner.is_visible());
        assert!(banner.accept().is_err());
        assert!(!banner.is_visible());
    }
}
