//! Contact form: field state, validation and submission.

pub mod form;
pub mod submit;
pub mod validation;

pub use form::{ContactForm, SubmissionStatus};
pub use submit::{
    ContactSubmission, ContactSubmitter, DEFAULT_ENDPOINT, SubmitError,
    Web3FormsClient,
};
pub use validation::{ContactField, FieldErrors, validate, validate_field};
