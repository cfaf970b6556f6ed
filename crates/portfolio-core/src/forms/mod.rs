//! Form-to-email handlers.
//!
//! Both forms follow the same flow: read raw field values, validate, compose a
//! [`MailDraft`](crate::mail::MailDraft), hand it to the mail client and report
//! the outcome as a [`Notice`] rendered next to the form.

mod booking;
mod contact;

use std::sync::LazyLock;

use regex::Regex;

pub use booking::{parse_local_datetime, submit_booking, BookingForm};
pub use contact::{submit_contact, ContactForm};

/// `local@domain.tld`: one `@`, no whitespace, a dot somewhere after the `@`.
///
/// U+FEFF counts as whitespace here, as it does for browser form input.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern is a valid regex")
});

/// Whitespace as browsers see it in form values: Unicode whitespace plus the BOM.
pub(crate) fn is_form_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Trim form whitespace from both ends.
pub(crate) fn trim_field(value: &str) -> &str {
    value.trim_matches(is_form_space)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Color cue of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Warning,
    Success,
}

impl NoticeKind {
    /// CSS color value for the notice text
    pub fn color(&self) -> &'static str {
        match self {
            NoticeKind::Warning => "var(--gold)",
            NoticeKind::Success => "var(--accent)",
        }
    }
}

/// Inline feedback shown under a form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("bo@x.com"));
        assert!(is_valid_email("first.last+tag@sub.domain.org"));
        assert!(!is_valid_email("bad-email"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada@@example.com"));
        assert!(!is_valid_email("a da@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@.com"));
    }

    #[test]
    fn byte_order_mark_is_whitespace() {
        assert!(!is_valid_email("a\u{FEFF}b@x.com"));
        assert!(!is_valid_email("ada@x.c\u{FEFF}om"));
        assert_eq!(trim_field("\u{FEFF} Ada \u{FEFF}"), "Ada");
        assert_eq!(trim_field("\u{FEFF}"), "");
    }

    #[test]
    fn notice_colors() {
        assert_eq!(Notice::warning("x").kind.color(), "var(--gold)");
        assert_eq!(Notice::success("x").kind.color(), "var(--accent)");
    }
}
