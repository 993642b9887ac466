//! Contact form: advisory validation and mailto composition.
//!
//! Nothing is ever submitted to a server. A valid form is turned into a
//! `mailto:` URI and handed to the platform's mail client; that action is
//! fire-and-forget and the flow neither retries nor confirms delivery.

use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use regex::Regex;

/// Minimum lengths, matching the advisory rules of the published page.
const MIN_NAME: usize = 2;
const MIN_SUBJECT: usize = 5;
const MIN_MESSAGE: usize = 10;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

/// Transient form input, discarded after a compose-and-open action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Checks every field and reports violations per field.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if self.name.trim().chars().count() < MIN_NAME {
            errors.name = Some("Name must be at least 2 characters");
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            errors.email = Some("Please enter a valid email address");
        }
        if self.subject.trim().chars().count() < MIN_SUBJECT {
            errors.subject = Some("Subject must be at least 5 characters");
        }
        if self.message.trim().chars().count() < MIN_MESSAGE {
            errors.message = Some("Message must be at least 10 characters");
        }

        errors
    }

    /// Builds the `mailto:` URI for this form, percent-encoding the
    /// subject and the assembled body.
    pub fn mailto(&self, recipient: &str) -> String {
        let body = format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        );
        mailto_uri(recipient, &self.subject, &body)
    }
}

/// Builds a `mailto:` URI with `subject` and `body` query parameters,
/// both percent-encoded. Also used for the canned resume-request email.
pub fn mailto_uri(recipient: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        utf8_percent_encode(subject, NON_ALPHANUMERIC),
        utf8_percent_encode(body, NON_ALPHANUMERIC),
    )
}

/// Field-scoped validation errors. Empty means the form may be submitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub subject: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.subject.is_none()
            && self.message.is_none()
    }

    pub fn count(&self) -> usize {
        [self.name, self.email, self.subject, self.message]
            .iter()
            .filter(|e| e.is_some())
            .count()
    }
}

/// Where the contact flow currently stands.
///
/// `Idle -> (submit) -> Composing -> Sent`, with invalid submissions
/// bouncing straight back to `Idle` and opener failures likewise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactStatus {
    #[default]
    Idle,
    /// The mail client is being launched.
    Composing,
    /// The mail client opened with the staged message.
    Sent,
}

/// The full contact flow: input, per-field errors, and status.
#[derive(Debug, Clone, Default)]
pub struct ContactFlow {
    pub form: ContactForm,
    pub errors: FieldErrors,
    pub status: ContactStatus,
}

impl ContactFlow {
    /// Attempts submission. Returns the `mailto:` URI to open when the
    /// form validates; otherwise records the field errors and stays idle.
    pub fn submit(&mut self, recipient: &str) -> Option<String> {
        let errors = self.form.validate();
        if errors.is_empty() {
            self.errors = FieldErrors::default();
            self.status = ContactStatus::Composing;
            Some(self.form.mailto(recipient))
        } else {
            self.errors = errors;
            self.status = ContactStatus::Idle;
            None
        }
    }

    /// The mail client opened: mark sent and discard the input.
    pub fn compose_succeeded(&mut self) {
        self.status = ContactStatus::Sent;
        self.form = ContactForm::default();
    }

    /// The mail client could not be opened: keep the input for retry by
    /// hand, return to idle.
    pub fn compose_failed(&mut self) {
        self.status = ContactStatus::Idle;
    }

    /// "Send another message": back to a blank idle form.
    pub fn reset(&mut self) {
        self.form = ContactForm::default();
        self.errors = FieldErrors::default();
        self.status = ContactStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_form() -> ContactForm {
        ContactForm {
            name: "Al".to_string(),
            email: "bad".to_string(),
            subject: "Hi".to_string(),
            message: "short".to_string(),
        }
    }

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Alice".to_string(),
            email: "a@b.com".to_string(),
            subject: "Hello there".to_string(),
            message: "This is a long enough message.".to_string(),
        }
    }

    #[test]
    fn test_short_fields_yield_field_errors() {
        // "Al" satisfies the two-character minimum, so only the other
        // three fields fail; a one-character name fails all four.
        let errors = invalid_form().validate();
        assert_eq!(errors.count(), 3);
        assert!(errors.name.is_none());

        let mut form = invalid_form();
        form.name = "A".to_string();
        assert_eq!(form.validate().count(), 4);
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(valid_form().validate().is_empty());
    }

    #[test]
    fn test_whitespace_only_fields_fail() {
        let form = ContactForm {
            name: "   ".to_string(),
            email: " a@b.com ".to_string(),
            subject: "      ".to_string(),
            message: "          ".to_string(),
        };
        let errors = form.validate();
        assert!(errors.name.is_some());
        assert!(errors.email.is_none());
        assert!(errors.subject.is_some());
        assert!(errors.message.is_some());
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        let form = ContactForm {
            message: "єєєєєєєєєє".to_string(), // 10 chars, 20 bytes
            ..valid_form()
        };
        assert!(form.validate().message.is_none());
        assert_eq!(form.message.chars().count(), 10);
    }

    #[test]
    fn test_email_format() {
        for bad in ["plain", "no@dot", "two@@x.com", "spaces in@x.com"] {
            let form = ContactForm {
                email: bad.to_string(),
                ..valid_form()
            };
            assert!(form.validate().email.is_some(), "{bad} should fail");
        }
    }

    #[test]
    fn test_mailto_encodes_subject_and_body() {
        let uri = valid_form().mailto("me@example.com");
        assert!(uri.starts_with("mailto:me@example.com?subject="));
        assert!(uri.contains("subject=Hello%20there"));
        // Newlines in the body become %0A.
        assert!(uri.contains("%0A"));
        assert!(uri.contains("&body=Name%3A%20Alice"));
        // Nothing raw that would break the URI.
        assert!(!uri.contains(' '));
        assert!(!uri.contains('\n'));
    }

    #[test]
    fn test_submit_blocks_on_invalid_input() {
        let mut flow = ContactFlow {
            form: invalid_form(),
            ..Default::default()
        };
        assert!(flow.submit("me@example.com").is_none());
        assert_eq!(flow.status, ContactStatus::Idle);
        assert!(!flow.errors.is_empty());
    }

    #[test]
    fn test_submit_then_success_reaches_sent() {
        let mut flow = ContactFlow {
            form: valid_form(),
            ..Default::default()
        };
        let uri = flow.submit("me@example.com");
        assert!(uri.is_some());
        assert_eq!(flow.status, ContactStatus::Composing);

        flow.compose_succeeded();
        assert_eq!(flow.status, ContactStatus::Sent);
        assert_eq!(flow.form, ContactForm::default());
    }

    #[test]
    fn test_opener_failure_returns_to_idle_keeping_input() {
        let mut flow = ContactFlow {
            form: valid_form(),
            ..Default::default()
        };
        flow.submit("me@example.com").unwrap();
        flow.compose_failed();
        assert_eq!(flow.status, ContactStatus::Idle);
        assert_eq!(flow.form, valid_form());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut flow = ContactFlow {
            form: valid_form(),
            ..Default::default()
        };
        flow.submit("me@example.com").unwrap();
        flow.compose_succeeded();
        flow.reset();
        assert_eq!(flow.status, ContactStatus::Idle);
        assert!(flow.errors.is_empty());
        assert_eq!(flow.form, ContactForm::default());
    }
}
