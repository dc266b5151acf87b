//! Rules for user accounts: sign-up fields, profile edits and email
//! uniqueness.

use uuid::Uuid;

use crate::errors::{BarberError, BarberResult};
use crate::models::user::{CreateUserRequest, UpdateProfileRequest, User};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Trims and lowercases an email address for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn validate_name(name: &str) -> BarberResult<()> {
    if name.trim().is_empty() {
        return Err(BarberError::Validation("Name is required".to_string()));
    }
    Ok(())
}

/// Requires text on both sides of a single `@`.
pub fn validate_email(email: &str) -> BarberResult<()> {
    let valid = match email.trim().split_once('@') {
        Some((local, domain)) => {
            !local.trim().is_empty() && !domain.trim().is_empty() && !domain.contains('@')
        }
        None => false,
    };

    if !valid {
        return Err(BarberError::Validation(
            "A valid email address is required".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> BarberResult<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(BarberError::Validation(format!(
            "Password must have at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

/// Rejects sign-up payloads with missing or malformed fields
pub fn validate_new_user(request: &CreateUserRequest) -> BarberResult<()> {
    validate_name(&request.name)?;
    validate_email(&request.email)?;
    validate_password(&request.password)
}

/// Checks the fields of a profile edit.
///
/// A new password needs the old one and a matching confirmation. Whether the
/// old password is correct is checked against the stored hash by the caller.
pub fn validate_profile_update(request: &UpdateProfileRequest) -> BarberResult<()> {
    validate_name(&request.name)?;
    validate_email(&request.email)?;

    let Some(password) = request.new_password() else {
        return Ok(());
    };

    if request.old_password().is_none() {
        return Err(BarberError::Validation(
            "You need to inform the old password to set a new password".to_string(),
        ));
    }
    validate_password(password)?;
    if request.password_confirmation.as_deref() != Some(password) {
        return Err(BarberError::Validation(
            "Password confirmation does not match".to_string(),
        ));
    }
    Ok(())
}

/// Fails when `existing`, the account already holding the email, belongs to
/// someone other than `owner`.
///
/// Sign-up passes `None` as the owner, so any existing account conflicts.
pub fn ensure_email_available(existing: Option<&User>, owner: Option<Uuid>) -> BarberResult<()> {
    match existing {
        Some(user) if Some(user.id) != owner => Err(BarberError::Conflict(
            "Email address already in use".to_string(),
        )),
        _ => Ok(()),
    }
}
