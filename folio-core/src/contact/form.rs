use std::collections::BTreeSet;
use std::time::Duration;

use super::submit::{ContactSubmission, SubmitError};
use super::validation::{ContactField, FieldErrors, validate, validate_field};

/// How long the success message stays up.
pub const SUCCESS_MESSAGE_TTL: Duration = Duration::from_secs(5);

const SENDING: &str = "Sending...";
const SENT: &str = "Message sent successfully! I'll get back to you soon.";
const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";
const NETWORK_FAILURE: &str = "Network error. Please check your connection.";

/// User-visible outcome line under the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl SubmissionStatus {
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Sending => Some(SENDING),
            SubmissionStatus::Sent => Some(SENT),
            SubmissionStatus::Failed(msg) => Some(msg.as_str()),
        }
    }

    fn from_error(err: &SubmitError) -> Self {
        let msg = match err {
            SubmitError::Network(_) => NETWORK_FAILURE.to_string(),
            SubmitError::Rejected(Some(reason)) => reason.clone(),
            SubmitError::NotConfigured => err.to_string(),
            SubmitError::Rejected(None)
            | SubmitError::Status(_)
            | SubmitError::InvalidResponse(_) => GENERIC_FAILURE.to_string(),
        };
        SubmissionStatus::Failed(msg)
    }
}

/// Contact form state: values, touched fields, shown errors and status.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    touched: BTreeSet<ContactField>,
    errors: FieldErrors,
    status: SubmissionStatus,
    submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn is_touched(&self, field: ContactField) -> bool {
        self.touched.contains(&field)
    }

    /// Error currently shown for `field`, if it has been touched.
    pub fn error(&self, field: ContactField) -> Option<&'static str> {
        if !self.is_touched(field) {
            return None;
        }
        self.errors.get(&field).copied()
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Typing marks the field touched and clears its error until the next
    /// blur or submit.
    pub fn on_input(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
        self.touched.insert(field);
        self.errors.remove(&field);
    }

    /// Leaving a field validates just that field.
    pub fn on_blur(&mut self, field: ContactField) {
        self.touched.insert(field);
        match validate_field(field, self.value(field)) {
            Some(err) => {
                self.errors.insert(field, err);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    /// Validate everything. On success the form enters the sending state and
    /// returns the message to post; a submit while one is in flight is
    /// ignored.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.submitting {
            log::debug!("Contact submit ignored: already submitting");
            return None;
        }

        self.touched.extend(ContactField::ALL);
        let errors = validate(&self.name, &self.email, &self.message);
        if !errors.is_empty() {
            log::debug!("Contact form invalid: {:?}", errors.keys());
            self.errors = errors;
            return None;
        }

        self.errors.clear();
        self.submitting = true;
        self.status = SubmissionStatus::Sending;
        Some(ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// Apply the submission outcome. Returns `true` on success, in which
    /// case the host should call [`ContactForm::clear_status`] after
    /// [`SUCCESS_MESSAGE_TTL`].
    pub fn finish_submit(&mut self, result: Result<(), &SubmitError>) -> bool {
        self.submitting = false;
        match result {
            Ok(()) => {
                log::info!("Contact message sent");
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.errors.clear();
                self.touched.clear();
                self.status = SubmissionStatus::Sent;
                true
            }
            Err(err) => {
                log::warn!("Contact submission failed: {}", err);
                self.status = SubmissionStatus::from_error(err);
                false
            }
        }
    }

    /// Drop the success message. Failure messages stay until the next
    /// attempt.
    pub fn clear_status(&mut self) {
        if self.status == SubmissionStatus::Sent {
            self.status = SubmissionStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.on_input(ContactField::Name, "Ada".into());
        form.on_input(ContactField::Email, "ada@example.com".into());
        form.on_input(ContactField::Message, "Hello there, nice work!".into());
        form
    }

    #[test]
    fn untouched_fields_hide_errors() {
        let form = ContactForm::new();
        assert_eq!(form.error(ContactField::Name), None);
    }

    #[test]
    fn blur_validates_single_field() {
        let mut form = ContactForm::new();
        form.on_input(ContactField::Email, "nope".into());
        assert_eq!(form.error(ContactField::Email), None);
        form.on_blur(ContactField::Email);
        assert_eq!(
            form.error(ContactField::Email),
            Some("Please enter a valid email")
        );
        assert_eq!(form.error(ContactField::Name), None);

        form.on_input(ContactField::Email, "nope@".into());
        assert_eq!(form.error(ContactField::Email), None, "typing clears");
    }

    #[test]
    fn invalid_submit_touches_all_and_reports() {
        let mut form = ContactForm::new();
        assert!(form.begin_submit().is_none());
        for field in ContactField::ALL {
            assert!(form.is_touched(field));
            assert!(form.error(field).is_some());
        }
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn successful_submit_resets_form() {
        let mut form = filled();
        let submission = form.begin_submit().expect("valid form");
        assert_eq!(submission.name, "Ada");
        assert!(form.is_submitting());
        assert_eq!(form.status().message(), Some("Sending..."));
        assert!(form.begin_submit().is_none(), "no double submit");

        assert!(form.finish_submit(Ok(())));
        assert!(!form.is_submitting());
        assert_eq!(form.value(ContactField::Name), "");
        assert!(!form.is_touched(ContactField::Name));
        assert_eq!(form.status(), &SubmissionStatus::Sent);

        form.clear_status();
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn rejection_keeps_values_and_shows_reason() {
        let mut form = filled();
        form.begin_submit().expect("valid form");
        let ok = form.finish_submit(Err(&SubmitError::Rejected(Some(
            "Invalid access key".into(),
        ))));
        assert!(!ok);
        assert_eq!(form.status().message(), Some("Invalid access key"));
        assert_eq!(form.value(ContactField::Name), "Ada");

        form.clear_status();
        assert_eq!(form.status().message(), Some("Invalid access key"));
    }

    #[test]
    fn unreadable_failure_uses_generic_message() {
        let mut form = filled();
        form.begin_submit().expect("valid form");
        form.finish_submit(Err(&SubmitError::Status(500)));
        assert_eq!(
            form.status().message(),
            Some("Something went wrong. Please try again.")
        );
    }
}
