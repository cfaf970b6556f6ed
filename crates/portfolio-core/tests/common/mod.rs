//! Shared test doubles.

#![allow(dead_code)]

use std::cell::RefCell;

use portfolio_core::{MailDraft, MailHandler, SiteError, SiteResult};

/// Route handler logs to the test output (`RUST_LOG=portfolio_core=debug`).
pub fn init_logging() {
    portfolio_core::logging::init_native();
}

/// Records every URI it is handed instead of opening a mail client.
#[derive(Default)]
pub struct RecordingMailer {
    uris: RefCell<Vec<String>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uris(&self) -> Vec<String> {
        self.uris.borrow().clone()
    }

    pub fn calls(&self) -> usize {
        self.uris.borrow().len()
    }

    /// Decode the single recorded draft.
    pub fn only_draft(&self) -> MailDraft {
        let uris = self.uris.borrow();
        assert_eq!(uris.len(), 1, "expected exactly one hand-off, got {:?}", uris);
        MailDraft::from_uri(&uris[0]).expect("recorded URI should parse")
    }
}

impl MailHandler for RecordingMailer {
    fn hand_off(&self, uri: &str) -> SiteResult<()> {
        self.uris.borrow_mut().push(uri.to_string());
        Ok(())
    }
}

/// Mail handler for an environment with no mail client registered.
pub struct NoMailClient;

impl MailHandler for NoMailClient {
    fn hand_off(&self, _uri: &str) -> SiteResult<()> {
        Err(SiteError::MailHandoff("no handler for mailto".to_string()))
    }
}
