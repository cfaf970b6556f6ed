//! End-to-end behavior tests for the page handlers.
//!
//! Each test drives a handler the way the UI does: raw input values in,
//! notice and mail hand-off out.

mod common;

use chrono::NaiveDateTime;
use common::{NoMailClient, RecordingMailer};
use portfolio_core::forms::parse_local_datetime;
use portfolio_core::{
    submit_booking, submit_contact, BookingForm, ConsentBanner, ConsentStore, ContactForm, Key,
    LightboxController, MemoryStore, NoticeKind, SiteConfig,
};

fn now() -> NaiveDateTime {
    parse_local_datetime("2026-10-19", "09:30").unwrap()
}

fn booking(date: &str, time: &str) -> BookingForm {
    BookingForm {
        date: date.to_string(),
        time: time.to_string(),
        people: "2".to_string(),
        name: "Bo".to_string(),
        email: "bo@x.com".to_string(),
    }
}

// ============================================================================
// Contact form
// ============================================================================

#[test]
fn test_contact_bad_email_blocks_handoff() {
    let config = SiteConfig::default();
    let mailer = RecordingMailer::new();

    let form = ContactForm::new("Ada", "bad-email", "hi");
    let notice = submit_contact(&form, &config.mail.contact_recipient, &mailer);

    assert_eq!(notice.kind, NoticeKind::Warning);
    assert_eq!(notice.text, "Please enter a valid email address.");
    assert_eq!(mailer.calls(), 0);
}

#[test]
fn test_contact_valid_hands_off_once() {
    common::init_logging();
    let config = SiteConfig::default();
    let mailer = RecordingMailer::new();

    let form = ContactForm::new("Ada", "ada@example.com", "hi");
    let notice = submit_contact(&form, &config.mail.contact_recipient, &mailer);

    assert!(notice.is_success());
    assert_eq!(
        notice.text,
        "Your email client should open. Please send to complete contact."
    );
    let draft = mailer.only_draft();
    assert_eq!(draft.recipient, "s.o.igbe@edu.salford.ac.uk");
    assert_eq!(draft.subject, "Portfolio contact from Ada");
    assert_eq!(draft.body, "hi\n\nFrom: Ada\nEmail: ada@example.com");
    assert!(mailer.uris()[0].starts_with("mailto:s.o.igbe@edu.salford.ac.uk?subject=Portfolio%20contact%20from%20Ada&body="));
}

#[test]
fn test_contact_missing_field() {
    let mailer = RecordingMailer::new();
    let notice = submit_contact(&ContactForm::new("Ada", "", "hi"), "me@x.com", &mailer);
    assert_eq!(notice.text, "Please complete all fields.");
    assert_eq!(notice.kind.color(), "var(--gold)");
    assert_eq!(mailer.calls(), 0);
}

#[test]
fn test_contact_without_mail_client_warns() {
    common::init_logging();
    let notice = submit_contact(
        &ContactForm::new("Ada", "ada@example.com", "hi"),
        "me@x.com",
        &NoMailClient,
    );
    assert_eq!(notice.kind, NoticeKind::Warning);
    assert!(notice.text.contains("me@x.com"));
}

// ============================================================================
// Booking form
// ============================================================================

#[test]
fn test_booking_in_past_blocked() {
    let mailer = RecordingMailer::new();
    let notice = submit_booking(&booking("2020-05-01", "18:00"), "r@x.com", now(), &mailer);

    assert_eq!(notice.kind, NoticeKind::Warning);
    assert_eq!(notice.text, "Please select a future date & time.");
    assert_eq!(mailer.calls(), 0);
}

#[test]
fn test_booking_future_hands_off() {
    common::init_logging();
    let config = SiteConfig::default();
    let mailer = RecordingMailer::new();
    let notice = submit_booking(
        &booking("2099-01-01", "18:00"),
        &config.mail.booking_recipient,
        now(),
        &mailer,
    );

    assert!(notice.is_success());
    assert_eq!(notice.text, "A booking email has been generated in your email client.");

    let draft = mailer.only_draft();
    assert_eq!(draft.recipient, "restaurant@example.com");
    for needle in ["Booking request", "Bo", "2099-01-01", "18:00"] {
        assert!(draft.subject.contains(needle), "subject missing {needle}: {}", draft.subject);
    }
    assert!(draft.body.contains("People: 2"));
}

#[test]
fn test_booking_missing_and_malformed() {
    let mailer = RecordingMailer::new();

    let mut form = booking("2099-01-01", "18:00");
    form.people.clear();
    let notice = submit_booking(&form, "r@x.com", now(), &mailer);
    assert_eq!(notice.text, "Please fill all booking fields.");

    let notice = submit_booking(&booking("2099-13-01", "18:00"), "r@x.com", now(), &mailer);
    assert_eq!(notice.text, "Please choose a valid date and time.");

    assert_eq!(mailer.calls(), 0);
}

// ============================================================================
// Lightbox
// ============================================================================

#[test]
fn test_lightbox_keyboard_session() {
    let mut lb = LightboxController::new(&SiteConfig::default().lightbox);

    // Arrows do nothing before anything is opened.
    lb.handle_key(Key::from_dom("ArrowRight"));
    assert_eq!(lb.index(), -1);

    lb.open("project1").unwrap();
    lb.handle_key(Key::from_dom("ArrowLeft"));
    assert_eq!(lb.current_id(), Some("project3"));
    lb.handle_key(Key::from_dom("ArrowRight"));
    lb.handle_key(Key::from_dom("ArrowRight"));
    assert_eq!(lb.current_id(), Some("project2"));

    lb.handle_key(Key::from_dom("Escape"));
    assert_eq!(lb.index(), -1);
    assert!(!lb.scroll_locked());
}

// ============================================================================
// Cookie consent
// ============================================================================

#[test]
fn test_cookie_banner_lifecycle() {
    let store = MemoryStore::new();

    let mut banner = ConsentBanner::load(&store, "cookieConsent");
    assert!(banner.is_visible(), "first visit shows the banner");

    banner.accept().unwrap();
    assert!(!banner.is_visible());
    assert_eq!(store.get("cookieConsent").unwrap().as_deref(), Some("accepted"));

    // Reload: a fresh banner over the same storage.
    let reloaded = ConsentBanner::load(&store, "cookieConsent");
    assert!(!reloaded.is_visible());
}
