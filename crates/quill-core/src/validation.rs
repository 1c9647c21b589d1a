//! Request validation - pure, short-circuiting checks.
//!
//! Each check returns the first failure as [`DomainError::Validation`];
//! handlers map these to 400 responses before touching any store.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::DomainError;

/// Minimum display name length accepted at registration.
pub const MIN_DISPLAY_NAME_LEN: usize = 8;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

/// `local@domain.tld` with a 2-3 letter TLD.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+@[A-Za-z_]+?\.[A-Za-z]{2,3}$").unwrap());

/// Login requires both credential fields to be present.
pub fn require_credentials(email: &str, password: &str) -> Result<(), DomainError> {
    if email.is_empty() || password.is_empty() {
        return Err(DomainError::Validation(
            "Some required fields are missing".to_string(),
        ));
    }
    Ok(())
}

/// Registration checks, in declaration order: display name length, email
/// format, password length.
pub fn validate_new_user(
    display_name: &str,
    email: &str,
    password: &str,
) -> Result<(), DomainError> {
    if display_name.chars().count() < MIN_DISPLAY_NAME_LEN {
        return Err(DomainError::Validation(format!(
            "\"displayName\" length must be at least {MIN_DISPLAY_NAME_LEN} characters long"
        )));
    }

    if !EMAIL_PATTERN.is_match(email) {
        return Err(DomainError::Validation(
            "\"email\" must be a valid email".to_string(),
        ));
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(DomainError::Validation(format!(
            "\"password\" length must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }

    Ok(())
}

pub fn validate_category_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::Validation("\"name\" is required".to_string()));
    }
    Ok(())
}

/// A post needs a title and content; the category list is resolved against
/// the store separately.
pub fn validate_post_fields(title: &str, content: &str) -> Result<(), DomainError> {
    if title.is_empty() || content.is_empty() {
        return Err(DomainError::Validation(
            "Some required fields are missing".to_string(),
        ));
    }
    Ok(())
}
