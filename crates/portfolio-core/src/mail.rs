//! Mail drafts and the `mailto:` hand-off.
//!
//! The page never sends mail itself. A form produces a [`MailDraft`], the draft
//! renders to a `mailto:` URI, and a [`MailHandler`] passes that URI to
//! whatever the environment has registered for it.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{SiteError, SiteResult};

/// Characters `encodeURIComponent` leaves untouched, besides alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode `value` the way `encodeURIComponent` does.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Reverse of [`encode_component`].
pub fn decode_component(value: &str) -> SiteResult<String> {
    percent_decode_str(value)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| SiteError::MailHandoff(format!("invalid UTF-8 in mail URI: {}", e)))
}

/// A composed email waiting to be handed to the mail client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailDraft {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    pub fn new(
        recipient: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            recipient: recipient.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// `mailto:{recipient}?subject={subject}&body={body}` with encoded parameters.
    pub fn to_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            encode_component(&self.subject),
            encode_component(&self.body)
        )
    }

    /// Parse a URI produced by [`MailDraft::to_uri`].
    pub fn from_uri(uri: &str) -> SiteResult<Self> {
        let rest = uri
            .strip_prefix("mailto:")
            .ok_or_else(|| SiteError::MailHandoff(format!("not a mailto URI: {}", uri)))?;
        let (recipient, query) = rest.split_once('?').unwrap_or((rest, ""));

        let mut draft = MailDraft::new(recipient, "", "");
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            match name {
                "subject" => draft.subject = decode_component(value)?,
                "body" => draft.body = decode_component(value)?,
                _ => {}
            }
        }
        Ok(draft)
    }
}

/// The environment's registered mail client.
pub trait MailHandler {
    /// Hand `uri` to the mail client.
    fn hand_off(&self, uri: &str) -> SiteResult<()>;
}

impl<T: MailHandler + ?Sized> MailHandler for &T {
    fn hand_off(&self, uri: &str) -> SiteResult<()> {
        (**self).hand_off(uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode_component("Portfolio contact from Ada"), "Portfolio%20contact%20from%20Ada");
        assert_eq!(encode_component("a&b=c?d/e"), "a%26b%3Dc%3Fd%2Fe");
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_component("line\nbreak"), "line%0Abreak");
        assert_eq!(encode_component("—"), "%E2%80%94");
    }

    #[test]
    fn uri_layout() {
        let draft = MailDraft::new("restaurant@example.com", "Hi there", "Table for 2");
        assert_eq!(
            draft.to_uri(),
            "mailto:restaurant@example.com?subject=Hi%20there&body=Table%20for%202"
        );
    }

    #[test]
    fn parses_own_uri() {
        let draft = MailDraft::new("a@b.co", "Booking request — Bo", "x & y\n\nz=1");
        assert_eq!(MailDraft::from_uri(&draft.to_uri()).unwrap(), draft);
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(MailDraft::from_uri("https://example.com").is_err());
    }
}
