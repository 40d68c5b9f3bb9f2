//! Input validation utilities

use crate::error::ApiError;

/// Require a non-empty login identifier
///
/// Only presence is checked; historic accounts hold identifiers that are
/// not well-formed addresses, so no format rule is enforced.
pub fn require_email(email: Option<&str>) -> Result<&str, ApiError> {
    email
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::MissingEmail)
}

/// Validate the signup password policy
///
/// At least 8 characters with one digit, one lowercase and one uppercase
/// letter. No other character classes are required.
pub fn validate_password(password: Option<&str>) -> Result<&str, ApiError> {
    let password = password.ok_or(ApiError::InvalidPassword)?;

    if password.chars().count() < 8 {
        return Err(ApiError::InvalidPassword);
    }

    let mut has_digit = false;
    let mut has_lower = false;
    let mut has_upper = false;

    for c in password.chars() {
        if c.is_ascii_digit() {
            has_digit = true;
        } else if c.is_ascii_lowercase() {
            has_lower = true;
        } else if c.is_ascii_uppercase() {
            has_upper = true;
        }
    }

    if !has_digit || !has_lower || !has_upper {
        return Err(ApiError::InvalidPassword);
    }

    Ok(password)
}

/// Require a non-empty text field, mapping absence to the given error
pub fn require_text(value: Option<&str>, missing: ApiError) -> Result<&str, ApiError> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(missing)
}
