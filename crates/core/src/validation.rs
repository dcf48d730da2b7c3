//! Field rules enforced before a row is written.
//!
//! Required text fields reject blank values on create and on update: the
//! partial-update policy skips only absent fields, so a present-but-blank
//! title must be rejected here rather than silently stored.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Minimum accepted password length for new accounts.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Username length bounds (characters).
pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 32;

/// Upper bound for contact message bodies (characters).
pub const MAX_MESSAGE_LENGTH: usize = 5_000;

/// Reject a missing or whitespace-only value with `message`.
pub fn require_text(value: &str, message: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(message.to_string()));
    }
    Ok(())
}

/// Same as [`require_text`] but only when the field is present.
pub fn require_text_if_present(value: Option<&str>, message: &str) -> Result<(), CoreError> {
    match value {
        Some(v) => require_text(v, message),
        None => Ok(()),
    }
}

/// Validate an email address.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if !email.validate_email() {
        return Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }
    Ok(())
}

/// Validate username length and character set (ASCII alphanumerics, `_`, `-`).
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    let len = username.chars().count();
    if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&len) {
        return Err(CoreError::Validation(format!(
            "Username must be between {MIN_USERNAME_LENGTH} and {MAX_USERNAME_LENGTH} characters"
        )));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(CoreError::Validation(
            "Username may only contain letters, digits, '_' and '-'".into(),
        ));
    }
    Ok(())
}

/// Validate that a password meets the minimum length.
pub fn validate_password_strength(password: &str) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }
    Ok(())
}

/// Validate a contact message body length.
pub fn validate_message_body(body: &str) -> Result<(), CoreError> {
    require_text(body, "Message is required")?;
    let len = body.chars().count();
    if len > MAX_MESSAGE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Message exceeds maximum length of {MAX_MESSAGE_LENGTH} characters (got {len})"
        )));
    }
    Ok(())
}
