use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\S+@\S+\.\S+").expect("email regex should compile")
});

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] =
        [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation messages keyed by field. Empty means the form is valid.
pub type FieldErrors = BTreeMap<ContactField, &'static str>;

/// Validate a single field value. Required checks look at the trimmed value,
/// length checks at the raw value.
pub fn validate_field(field: ContactField, value: &str) -> Option<&'static str> {
    let blank = value.trim().is_empty();
    match field {
        ContactField::Name => {
            if blank {
                Some("Name is required")
            } else if value.chars().count() < NAME_MIN_CHARS {
                Some("Name must be at least 2 characters")
            } else {
                None
            }
        }
        ContactField::Email => {
            if blank {
                Some("Email is required")
            } else if !EMAIL_PATTERN.is_match(value) {
                Some("Please enter a valid email")
            } else {
                None
            }
        }
        ContactField::Message => {
            if blank {
                Some("Message is required")
            } else if value.chars().count() < MESSAGE_MIN_CHARS {
                Some("Message must be at least 10 characters")
            } else {
                None
            }
        }
    }
}

pub fn validate(name: &str, email: &str, message: &str) -> FieldErrors {
    [
        (ContactField::Name, name),
        (ContactField::Email, email),
        (ContactField::Message, message),
    ]
    .into_iter()
    .filter_map(|(field, value)| {
        validate_field(field, value).map(|err| (field, err))
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_reports_every_field() {
        let errors = validate("", "  ", "");
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[&ContactField::Name], "Name is required");
        assert_eq!(errors[&ContactField::Email], "Email is required");
        assert_eq!(errors[&ContactField::Message], "Message is required");
    }

    #[test]
    fn length_rules() {
        assert_eq!(
            validate_field(ContactField::Name, "A"),
            Some("Name must be at least 2 characters")
        );
        assert_eq!(validate_field(ContactField::Name, "Al"), None);
        assert_eq!(
            validate_field(ContactField::Message, "too short"),
            Some("Message must be at least 10 characters")
        );
        assert_eq!(validate_field(ContactField::Message, "long enough"), None);
    }

    #[test]
    fn email_is_rfc_light() {
        for ok in ["a@b.c", "someone@example.com", "x+y@sub.domain.org"] {
            assert_eq!(validate_field(ContactField::Email, ok), None, "{ok}");
        }
        for bad in ["plain", "no-at.example.com", "a@b", "@."] {
            assert_eq!(
                validate_field(ContactField::Email, bad),
                Some("Please enter a valid email"),
                "{bad}"
            );
        }
    }

    #[test]
    fn valid_form_has_no_errors() {
        let errors =
            validate("Ada", "ada@example.com", "Hello there, nice work!");
        assert!(errors.is_empty());
    }
}
