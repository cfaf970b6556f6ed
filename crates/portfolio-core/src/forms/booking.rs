//! Booking form: a table request mailed to the restaurant.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{SiteError, SiteResult};
use crate::mail::{MailDraft, MailHandler};

use super::{is_form_space, trim_field, Notice};

const MISSING_FIELDS: &str = "Please fill all booking fields.";
const INVALID_DATETIME: &str = "Please choose a valid date and time.";
const PAST_DATETIME: &str = "Please select a future date & time.";
const HANDED_OFF: &str = "A booking email has been generated in your email client.";

/// Raw booking form values, as read from the inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingForm {
    /// `YYYY-MM-DD` from a date input
    pub date: String,
    /// `HH:MM` (or `HH:MM:SS[.fff]`) from a time input
    pub time: String,
    pub people: String,
    pub name: String,
    pub email: String,
}

/// Parse a date input and a time input as one local date-time.
///
/// Inputs are taken as-is: any whitespace makes them invalid. `24:00` is
/// midnight at the end of `date`.
pub fn parse_local_datetime(date: &str, time: &str) -> SiteResult<NaiveDateTime> {
    let invalid = || SiteError::InvalidDateTime(format!("{}T{}", date, time));

    if date.chars().chain(time.chars()).any(is_form_space) {
        return Err(invalid());
    }

    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| invalid())?;

    if let Some(rest) = time.strip_prefix("24:") {
        let at = parse_time(&format!("00:{}", rest)).ok_or_else(invalid)?;
        if at != NaiveTime::default() {
            return Err(invalid());
        }
        return day.succ_opt().map(|next| next.and_time(at)).ok_or_else(invalid);
    }

    let at = parse_time(time).ok_or_else(invalid)?;
    Ok(day.and_time(at))
}

fn parse_time(time: &str) -> Option<NaiveTime> {
    ["%H:%M", "%H:%M:%S", "%H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(time, format).ok())
}

impl BookingForm {
    /// Validate against `now` (local wall-clock time) and build the draft for `recipient`.
    pub fn compose(&self, recipient: &str, now: NaiveDateTime) -> SiteResult<MailDraft> {
        let name = trim_field(&self.name);
        let email = trim_field(&self.email);

        for (field, value) in [
            ("date", self.date.as_str()),
            ("time", self.time.as_str()),
            ("people", self.people.as_str()),
            ("name", name),
            ("email", email),
        ] {
            if value.is_empty() {
                return Err(SiteError::MissingField(field));
            }
        }

        let picked = parse_local_datetime(&self.date, &self.time)?;
        if picked < now {
            return Err(SiteError::PastDateTime(picked.to_string()));
        }

        Ok(MailDraft::new(
            recipient,
            format!("Booking request — {} ({} {})", name, self.date, self.time),
            format!(
                "Booking details:\nDate: {}\nTime: {}\nPeople: {}\nName: {}\nEmail: {}\n\nPlease confirm availability.",
                self.date, self.time, self.people, name, email
            ),
        ))
    }
}

/// Handle a booking form submission end to end.
pub fn submit_booking<M: MailHandler>(
    form: &BookingForm,
    recipient: &str,
    now: NaiveDateTime,
    mailer: &M,
) -> Notice {
    let draft = match form.compose(recipient, now) {
        Ok(draft) => draft,
        Err(e) => {
            tracing::debug!("booking form rejected: {}", e);
            return Notice::warning(match e {
                SiteError::MissingField(_) => MISSING_FIELDS,
                SiteError::PastDateTime(_) => PAST_DATETIME,
                _ => INVALID_DATETIME,
            });
        }
    };

    match mailer.hand_off(&draft.to_uri()) {
        Ok(()) => {
            tracing::info!(date = %form.date, time = %form.time, "booking draft handed to mail client");
            Notice::success(HANDED_OFF)
        }
        Err(e) => {
            tracing::warn!("booking hand-off failed: {}", e);
            Notice::warning(format!(
                "Your email client could not be opened. Please write to {} directly.",
                recipient
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        parse_local_datetime("2026-10-19", "12:00").unwrap()
    }

    fn form(date: &str, time: &str) -> BookingForm {
        BookingForm {
            date: date.to_string(),
            time: time.to_string(),
            people: "4".to_string(),
            name: " Bo ".to_string(),
            email: "bo@x.com".to_string(),
        }
    }

    #[test]
    fn parses_minutes_and_seconds() {
        let a = parse_local_datetime("2099-01-01", "18:00").unwrap();
        let b = parse_local_datetime("2099-01-01", "18:00:00").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn parses_fractional_seconds() {
        let a = parse_local_datetime("2099-01-01", "18:00:00.000").unwrap();
        let b = parse_local_datetime("2099-01-01", "18:00:00.250").unwrap();
        assert_eq!(a, parse_local_datetime("2099-01-01", "18:00").unwrap());
        assert!(b > a);
    }

    #[test]
    fn end_of_day_rolls_to_next_midnight() {
        let end = parse_local_datetime("2099-12-31", "24:00").unwrap();
        assert_eq!(end, parse_local_datetime("2100-01-01", "00:00").unwrap());
        assert_eq!(end, parse_local_datetime("2099-12-31", "24:00:00.000").unwrap());
        assert!(matches!(
            parse_local_datetime("2099-12-31", "24:01"),
            Err(SiteError::InvalidDateTime(_))
        ));
    }

    #[test]
    fn rejects_whitespace() {
        for (date, time) in [
            ("2099-01-01", " 18:00"),
            ("2099-01-01", "18:00 "),
            (" 2099-01-01", "18:00"),
            ("2099-01-01\u{FEFF}", "18:00"),
        ] {
            assert!(
                matches!(parse_local_datetime(date, time), Err(SiteError::InvalidDateTime(_))),
                "{:?} {:?} should be invalid",
                date,
                time
            );
        }
    }

    #[test]
    fn rejects_unparseable() {
        assert!(matches!(
            parse_local_datetime("2099-02-30", "18:00"),
            Err(SiteError::InvalidDateTime(_))
        ));
        assert!(matches!(
            parse_local_datetime("2099-01-01", "25:00"),
            Err(SiteError::InvalidDateTime(_))
        ));
        assert!(matches!(
            parse_local_datetime("tomorrow", "18:00"),
            Err(SiteError::InvalidDateTime(_))
        ));
    }

    #[test]
    fn exactly_now_is_accepted() {
        assert!(form("2026-10-19", "12:00").compose("r@x.com", now()).is_ok());
        assert!(matches!(
            form("2026-10-19", "11:59").compose("r@x.com", now()),
            Err(SiteError::PastDateTime(_))
        ));
    }

    #[test]
    fn draft_layout() {
        let draft = form("2099-01-01", "18:00").compose("r@x.com", now()).unwrap();
        assert_eq!(draft.subject, "Booking request — Bo (2099-01-01 18:00)");
        assert_eq!(
            draft.body,
            "Booking details:\nDate: 2099-01-01\nTime: 18:00\nPeople: 4\nName: Bo\nEmail: bo@x.com\n\nPlease confirm availability."
        );
    }
}
