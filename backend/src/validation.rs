//! Field validation for feedback input.
//!
//! Each validator checks one field and returns a [`FieldError`] naming the
//! offending JSON field. Validators that accept input return the value to
//! store, which for emails means the domain part lowercased.

use std::fmt;

/// JSON name of the content field.
pub const CONTENT_FIELD: &str = "feedback_content";
/// JSON name of the email field.
pub const EMAIL_FIELD: &str = "email_address";

pub const MIN_CONTENT_CHARS: usize = 1;
pub const MAX_CONTENT_CHARS: usize = 1000;

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;
const MAX_DOMAIN_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;
const LOCAL_SPECIALS: &str = "!#$%&'*+/=?^_`{|}~-.";

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    pub fn required(field: &'static str) -> Self {
        Self::new(field, format!("{} is required", field))
    }

    pub fn null(field: &'static str) -> Self {
        Self::new(field, format!("{} must not be null", field))
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FieldError {}

/// Check that content holds between 1 and 1000 characters.
pub fn validate_content(content: &str) -> Result<(), FieldError> {
    let len = content.chars().count();
    if len < MIN_CONTENT_CHARS {
        return Err(FieldError::new(
            CONTENT_FIELD,
            format!("{} must not be empty", CONTENT_FIELD),
        ));
    }
    if len > MAX_CONTENT_CHARS {
        return Err(FieldError::new(
            CONTENT_FIELD,
            format!(
                "{} must be at most {} characters (got {})",
                CONTENT_FIELD, MAX_CONTENT_CHARS, len
            ),
        ));
    }
    Ok(())
}

/// Check email syntax and return the normalized address.
pub fn validate_email(email: &str) -> Result<String, FieldError> {
    let invalid = |reason: &str| {
        FieldError::new(
            EMAIL_FIELD,
            format!("{} is not a valid email address: {}", EMAIL_FIELD, reason),
        )
    };

    if email.len() > MAX_EMAIL_LEN {
        return Err(invalid("address is too long"));
    }

    let (local, domain) = match email.split_once('@') {
        Some((local, domain)) if !domain.contains('@') => (local, domain),
        Some(_) => return Err(invalid("more than one @-sign")),
        None => return Err(invalid("missing @-sign")),
    };

    check_local_part(local).map_err(invalid)?;
    check_domain(domain).map_err(invalid)?;

    Ok(format!("{}@{}", local, domain.to_lowercase()))
}

fn check_local_part(local: &str) -> Result<(), &'static str> {
    if local.is_empty() {
        return Err("nothing before the @-sign");
    }
    if local.chars().count() > MAX_LOCAL_LEN {
        return Err("part before the @-sign is too long");
    }
    if local.starts_with('.') || local.ends_with('.') {
        return Err("part before the @-sign cannot start or end with a period");
    }
    if local.contains("..") {
        return Err("part before the @-sign cannot contain two periods in a row");
    }
    if !local
        .chars()
        .all(|c| c.is_alphanumeric() || LOCAL_SPECIALS.contains(c))
    {
        return Err("part before the @-sign contains invalid characters");
    }
    Ok(())
}

fn check_domain(domain: &str) -> Result<(), &'static str> {
    if domain.is_empty() {
        return Err("nothing after the @-sign");
    }
    if domain.len() > MAX_DOMAIN_LEN {
        return Err("domain is too long");
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return Err("domain must contain a period");
    }
    for label in &labels {
        if label.is_empty() {
            return Err("domain contains an empty label");
        }
        if label.len() > MAX_LABEL_LEN {
            return Err("domain label is too long");
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err("domain label cannot start or end with a hyphen");
        }
        if !label.chars().all(|c| c.is_alphanumeric() || c == '-') {
            return Err("domain contains invalid characters");
        }
    }

    // labels is non-empty after the length check above
    if labels[labels.len() - 1].chars().all(|c| c.is_ascii_digit()) {
        return Err("top-level domain cannot be numeric");
    }
    Ok(())
}
