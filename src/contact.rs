//! Contact form data, validation and submission state.

use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long a success or failure banner stays up.
pub const BANNER_DURATION: Duration = Duration::from_secs(5);

pub const SUCCESS_MESSAGE: &str =
    "Your message was sent successfully! I'll get back to you as soon as possible.";
pub const FAILURE_MESSAGE: &str =
    "Something went wrong while sending your message. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("the {0} field is required")]
    MissingField(ContactField),
    #[error("the email address is not valid")]
    InvalidEmail,
    #[error("message delivery is not configured")]
    NotConfigured,
    #[error("message delivery failed: {0}")]
    Delivery(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Every field must be present and the email must look like an address.
    pub fn validate(&self) -> Result<(), ContactError> {
        if let Some(field) = ContactField::ALL
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
        {
            return Err(ContactError::MissingField(field));
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

/// Syntactic check only: `local@domain.tld`, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .split_once('.')
        .is_some_and(|(host, _)| !host.is_empty())
        && !domain.ends_with('.')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    pub id: u64,
}

/// Outcome of pressing submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Valid form, now in flight.
    Send(ContactForm),
    /// Validation failed; a failure banner with this id is showing.
    Rejected(u64),
    /// A submission is already in flight.
    Busy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub form: ContactForm,
    submitting: bool,
    banner: Option<Banner>,
    next_banner: u64,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    fn show_banner(&mut self, kind: BannerKind, message: String) -> u64 {
        self.next_banner += 1;
        self.banner = Some(Banner {
            kind,
            message,
            id: self.next_banner,
        });
        self.next_banner
    }

    pub fn begin_submit(&mut self) -> Submission {
        if self.submitting {
            return Submission::Busy;
        }
        if let Err(err) = self.form.validate() {
            let id = self.show_banner(BannerKind::Failure, capitalize(&err.to_string()));
            return Submission::Rejected(id);
        }
        self.submitting = true;
        self.banner = None;
        Submission::Send(self.form.clone())
    }

    /// Settles the in-flight submission and returns the banner id to expire.
    /// Field values are only cleared on success.
    pub fn finish(&mut self, outcome: Result<(), ContactError>) -> u64 {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                self.form = ContactForm::default();
                self.show_banner(BannerKind::Success, SUCCESS_MESSAGE.to_string())
            }
            Err(_) => self.show_banner(BannerKind::Failure, FAILURE_MESSAGE.to_string()),
        }
    }

    /// Clears the banner if it is still the one with `id`.
    pub fn expire_banner(&mut self, id: u64) -> bool {
        if self.banner.as_ref().is_some_and(|b| b.id == id) {
            self.banner = None;
            true
        } else {
            false
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Let's build something.".to_string(),
        }
    }

    #[test]
    fn test_email_syntax() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a.b+c@mail.example.org"));
        assert!(!is_valid_email("ada"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada@.com"));
        assert!(!is_valid_email("ada@example."));
        assert!(!is_valid_email("ada@@example.com"));
        assert!(!is_valid_email("a da@example.com"));
    }

    #[test]
    fn test_validate_requires_every_field() {
        assert_eq!(filled().validate(), Ok(()));
        for field in ContactField::ALL {
            let mut form = filled();
            form.set(field, "   ".to_string());
            assert_eq!(form.validate(), Err(ContactError::MissingField(field)));
        }

        let mut form = filled();
        form.email = "not-an-email".to_string();
        assert_eq!(form.validate(), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn test_successful_submission_clears_form() {
        let mut state = ContactFormState::new();
        state.form = filled();

        let Submission::Send(payload) = state.begin_submit() else {
            panic!("valid form should be sent");
        };
        assert_eq!(payload, filled());
        assert!(state.is_submitting());

        let id = state.finish(Ok(()));
        assert!(!state.is_submitting());
        assert_eq!(state.form, ContactForm::default());
        let banner = state.banner().unwrap();
        assert_eq!(banner.kind, BannerKind::Success);
        assert_eq!(banner.id, id);
    }

    #[test]
    fn test_failed_delivery_keeps_input_and_expires() {
        let mut state = ContactFormState::new();
        state.form = filled();
        assert!(matches!(state.begin_submit(), Submission::Send(_)));

        let id = state.finish(Err(ContactError::Delivery("timeout".to_string())));
        assert!(!state.is_submitting());
        assert_eq!(state.form, filled());
        assert_eq!(state.banner().unwrap().kind, BannerKind::Failure);
        assert_eq!(state.banner().unwrap().message, FAILURE_MESSAGE);

        assert!(state.expire_banner(id));
        assert!(state.banner().is_none());
        assert_eq!(state.form, filled());
    }

    #[test]
    fn test_duplicate_submit_is_busy() {
        let mut state = ContactFormState::new();
        state.form = filled();
        assert!(matches!(state.begin_submit(), Submission::Send(_)));
        assert_eq!(state.begin_submit(), Submission::Busy);
        state.finish(Ok(()));
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_invalid_form_is_rejected_with_banner() {
        let mut state = ContactFormState::new();
        state.form = filled();
        state.form.subject.clear();

        let Submission::Rejected(id) = state.begin_submit() else {
            panic!("missing subject should be rejected");
        };
        assert!(!state.is_submitting());
        let banner = state.banner().unwrap();
        assert_eq!(banner.id, id);
        assert_eq!(banner.message, "The subject field is required");
    }

    #[test]
    fn test_stale_timer_keeps_newer_banner() {
        let mut state = ContactFormState::new();
        state.form = filled();
        state.begin_submit();
        let first = state.finish(Err(ContactError::NotConfigured));

        state.begin_submit();
        let second = state.finish(Ok(()));
        assert_ne!(first, second);

        assert!(!state.expire_banner(first));
        assert_eq!(state.banner().unwrap().kind, BannerKind::Success);
        assert!(state.expire_banner(second));
    }

    #[test]
    fn test_form_serializes_with_field_names() {
        let value = serde_json::to_value(filled()).unwrap();
        for field in ContactField::ALL {
            assert_eq!(value[field.as_str()], filled().get(field));
        }
    }
}
