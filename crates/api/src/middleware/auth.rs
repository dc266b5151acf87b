//! # Authentication Module
//!
//! Password hashing and verification for user accounts, the credential and
//! password-change checks built on them, and the [`CurrentUser`] extractor.
//!
//! The implementation uses Argon2 and stores hashes in PHC string format,
//! which carries the algorithm, version, parameters and salt alongside the
//! hash itself.

use argon2::{
    password_hash::{PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use barbershop_core::{errors::BarberError, models::user::User};
use eyre::Result;
use rand::rngs::OsRng;
use uuid::Uuid;

use super::error_handling::AppError;

/// Header naming the account a request acts for
pub const USER_ID_HEADER: &str = "x-user-id";

/// Hashes a password using the Argon2 algorithm
///
/// A fresh random salt is generated for every call, so hashing the same
/// password twice yields different strings.
///
/// # Example
///
/// ```
/// use barbershop_api::middleware::auth::hash_password;
///
/// let hashed = hash_password("user_password").unwrap();
/// assert!(hashed.starts_with("$argon2"));
/// ```
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Checks a plain text password against a stored PHC hash
///
/// # Errors
///
/// Returns an error if `hash` is not a valid PHC string. A wrong password is
/// `Ok(false)`.
pub fn verify_password(hash: &str, password: &str) -> Result<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| eyre::eyre!("Invalid password hash: {}", e))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Accepts a sign-in when `user` exists and `password` matches its hash
///
/// Unknown emails and wrong passwords produce the same error.
pub fn authenticate(user: Option<User>, password: &str) -> Result<User, BarberError> {
    let invalid =
        || BarberError::Authentication("Incorrect email/password combination".to_string());

    let user = user.ok_or_else(invalid)?;
    let matches = verify_password(&user.password_hash, password)
        .map_err(|e| BarberError::Internal(e.into()))?;
    if !matches {
        tracing::warn!("Failed sign-in attempt for user {}", user.id);
        return Err(invalid());
    }

    Ok(user)
}

/// Hashes `new_password` once `old_password` is confirmed against the stored
/// hash
pub fn change_password(
    current_hash: &str,
    old_password: Option<&str>,
    new_password: &str,
) -> Result<String, BarberError> {
    let old_password = old_password.ok_or_else(|| {
        BarberError::Validation(
            "You need to inform the old password to set a new password".to_string(),
        )
    })?;

    let matches = verify_password(current_hash, old_password)
        .map_err(|e| BarberError::Internal(e.into()))?;
    if !matches {
        return Err(BarberError::Validation("Old password does not match".to_string()));
    }

    hash_password(new_password).map_err(|e| BarberError::Internal(e.into()))
}

/// The account a request acts for, read from the `x-user-id` header
///
/// A missing or malformed header is rejected with 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value.trim()).ok())
            .map(CurrentUser)
            .ok_or_else(|| {
                AppError(BarberError::Authentication(format!(
                    "A valid {} header is required",
                    USER_ID_HEADER
                )))
            })
    }
}
