//! Reusable field rules.
//!
//! Each rule records at most one message on the supplied
//! [`ValidationErrors`] and hands back the cleaned value when it passed.

use std::sync::LazyLock;

use regex::Regex;

use super::{Field, ValidationErrors};

// HTML living-standard email syntax.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Whether `value` is syntactically an email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

/// Trimmed text, or `message` when it is blank.
pub fn required_text(
    errors: &mut ValidationErrors,
    field: Field,
    value: &str,
    message: &str,
) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(field, message);
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Trimmed text, or `None` when blank. Never records an error.
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Required text that must also parse via `parse`.
///
/// Blank input records `required_message`; text that `parse` rejects
/// records `invalid_message`.
pub fn required_choice<T>(
    errors: &mut ValidationErrors,
    field: Field,
    value: &str,
    required_message: &str,
    invalid_message: &str,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Option<T> {
    let text = required_text(errors, field, value, required_message)?;
    let parsed = parse(&text);
    if parsed.is_none() {
        errors.push(field, invalid_message);
    }
    parsed
}

/// A selection that must be present.
pub fn required_value<T>(
    errors: &mut ValidationErrors,
    field: Field,
    value: Option<T>,
    message: &str,
) -> Option<T> {
    if value.is_none() {
        errors.push(field, message);
    }
    value
}

/// A present count of at least `min` that fits in a `u32`.
pub fn required_count(
    errors: &mut ValidationErrors,
    field: Field,
    value: Option<i64>,
    min: u32,
    required_message: &str,
    min_message: &str,
) -> Option<u32> {
    let count = required_value(errors, field, value, required_message)?;
    if count < i64::from(min) {
        errors.push(field, min_message);
        return None;
    }
    match u32::try_from(count) {
        Ok(count) => Some(count),
        Err(_) => {
            errors.push(field, "Number is too large");
            None
        }
    }
}

/// Email that is present and well formed.
pub fn required_email(
    errors: &mut ValidationErrors,
    field: Field,
    value: &str,
    required_message: &str,
    invalid_message: &str,
) -> Option<String> {
    let email = required_text(errors, field, value, required_message)?;
    if is_valid_email(&email) {
        Some(email)
    } else {
        errors.push(field, invalid_message);
        None
    }
}
