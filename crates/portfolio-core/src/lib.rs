//! Portfolio Page Core Library
//!
//! Platform-independent behavior behind the portfolio and restaurant page.
//!
//! ## Overview
//!
//! Every interactive element of the page is a small, independent handler.
//! This crate holds their state and rules so the UI layer only translates DOM
//! events into calls and renders the result:
//!
//! - **Typing animator**: [`Typewriter`] plus a cancellable [`typing::start`] loop
//! - **Scroll reveal**: [`Revealer`]
//! - **Back to top**: [`BackToTop`]
//! - **Lightbox**: [`LightboxController`] with `open`/`close`/`next`/`previous`
//! - **Forms**: [`ContactForm`] and [`BookingForm`] composing a [`MailDraft`]
//! - **Cookie consent**: [`ConsentBanner`] over a [`ConsentStore`]
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{ContactForm, MailHandler, SiteConfig, submit_contact};
//!
//! let config = SiteConfig::default();
//! let form = ContactForm::new("Ada", "ada@example.com", "Hello!");
//! let notice = submit_contact(&form, &config.mail.contact_recipient, &my_mailer);
//! assert!(notice.is_success());
//! ```

pub mod back_to_top;
pub mod config;
pub mod consent;
pub mod error;
pub mod forms;
pub mod keys;
pub mod lightbox;
pub mod logging;
pub mod mail;
pub mod reveal;
pub mod typing;

// Re-exports
pub use back_to_top::BackToTop;
pub use config::SiteConfig;
pub use consent::{Consent, ConsentBanner, ConsentStore, MemoryStore};
pub use error::{SiteError, SiteResult};
pub use forms::{
    is_valid_email, submit_booking, submit_contact, BookingForm, ContactForm, Notice, NoticeKind,
};
pub use keys::Key;
pub use lightbox::{ClickTarget, LightboxController};
pub use mail::{MailDraft, MailHandler};
pub use reveal::Revealer;
pub use typing::{StopHandle, Typewriter, TypingCursor};
