//! Field rules used from `#[validate(custom(...))]` attributes

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Reject empty and whitespace-only strings
///
/// The message comes from the attribute using the rule.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

/// Required, well-formed email address
pub fn email_address(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank")
            .with_message("The field 'email' is required".into()));
    }
    if !EMAIL_PATTERN.is_match(value) {
        return Err(ValidationError::new("email").with_message("Email is invalid".into()));
    }
    Ok(())
}

/// Timestamp strictly before now
pub fn in_the_past(value: &DateTime<Utc>) -> Result<(), ValidationError> {
    if *value >= Utc::now() {
        return Err(ValidationError::new("past"));
    }
    Ok(())
}
