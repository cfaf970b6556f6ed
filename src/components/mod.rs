//! Page components for the portfolio site.
//!
//! Each component wires one behavior from `portfolio-core` to DOM events.

mod activatable_card;
mod back_to_top;
mod booking_form;
mod contact_form;
mod cookie_banner;
mod lightbox;
mod reveal;
mod typed_text;

pub use activatable_card::ActivatableCard;
pub use back_to_top::BackToTop;
pub use booking_form::BookingForm;
pub use contact_form::ContactForm;
pub use cookie_banner::CookieBanner;
pub use lightbox::{open_lightbox, use_lightbox_keys, Lightbox};
pub use reveal::{use_reveal_scanner, RevealSection};
pub use typed_text::TypedText;
