//! Contact form: name, email and message mailed to the portfolio owner.

use crate::error::{SiteError, SiteResult};
use crate::mail::{MailDraft, MailHandler};

use super::{is_valid_email, trim_field, Notice};

const MISSING_FIELDS: &str = "Please complete all fields.";
const INVALID_EMAIL: &str = "Please enter a valid email address.";
const HANDED_OFF: &str = "Your email client should open. Please send to complete contact.";

/// Raw contact form values, as read from the inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Validate the trimmed fields and build the draft for `recipient`.
    pub fn compose(&self, recipient: &str) -> SiteResult<MailDraft> {
        let name = trim_field(&self.name);
        let email = trim_field(&self.email);
        let message = trim_field(&self.message);

        for (field, value) in [("name", name), ("email", email), ("message", message)] {
            if value.is_empty() {
                return Err(SiteError::MissingField(field));
            }
        }
        if !is_valid_email(email) {
            return Err(SiteError::MalformedEmail(email.to_string()));
        }

        Ok(MailDraft::new(
            recipient,
            format!("Portfolio contact from {}", name),
            format!("{}\n\nFrom: {}\nEmail: {}", message, name, email),
        ))
    }
}

/// Handle a contact form submission end to end.
///
/// The mail handler is invoked only when every check passes.
pub fn submit_contact<M: MailHandler>(form: &ContactForm, recipient: &str, mailer: &M) -> Notice {
    let draft = match form.compose(recipient) {
        Ok(draft) => draft,
        Err(SiteError::MissingField(field)) => {
            tracing::debug!(field, "contact form incomplete");
            return Notice::warning(MISSING_FIELDS);
        }
        Err(e) => {
            tracing::debug!("contact form rejected: {}", e);
            return Notice::warning(INVALID_EMAIL);
        }
    };

    match mailer.hand_off(&draft.to_uri()) {
        Ok(()) => {
            tracing::info!("contact draft handed to mail client");
            Notice::success(HANDED_OFF)
        }
        Err(e) => {
            tracing::warn!("contact hand-off failed: {}", e);
            Notice::warning(format!(
                "Your email client could not be opened. Please write to {} directly.",
                recipient
            ))
        }
    }
}
