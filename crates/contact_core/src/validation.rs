use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::contract::{ContactSubmission, INVALID_EMAIL_ERROR, MISSING_FIELDS_ERROR};

/// Loose `local@domain.tld` shape. Not an RFC 5322 check.
pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing fields")]
    MissingFields,
    #[error("invalid email")]
    InvalidEmail,
}

impl ValidationError {
    /// Error string returned by the relay in its 400 body.
    pub fn relay_message(self) -> &'static str {
        match self {
            Self::MissingFields => MISSING_FIELDS_ERROR,
            Self::InvalidEmail => INVALID_EMAIL_ERROR,
        }
    }

    /// Status line shown next to the form.
    pub fn user_message(self) -> &'static str {
        match self {
            Self::MissingFields => "Please fill out all fields.",
            Self::InvalidEmail => "Please enter a valid email address.",
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn validate_submission(submission: &ContactSubmission) -> Result<(), ValidationError> {
    let fields = [&submission.name, &submission.email, &submission.message];
    if fields.iter().any(|field| field.trim().is_empty()) {
        return Err(ValidationError::MissingFields);
    }

    if !is_valid_email(&submission.email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}
