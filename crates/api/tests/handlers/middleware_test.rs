use axum::http::StatusCode;
use barbershop_api::middleware::{
    auth,
    error_handling::{map_error, AppError},
};
use barbershop_core::{
    booking,
    errors::BarberError,
    models::{appointment::Appointment, user::User},
};
use rstest::rstest;
use uuid::Uuid;

use crate::test_utils::at;

fn user_with_password(password: &str) -> User {
    User {
        id: Uuid::new_v4(),
        name: "John Doe".to_string(),
        email: "johndoe@example.com".to_string(),
        password_hash: auth::hash_password(password).unwrap(),
        created_at: at(2020, 4, 1, 9, 0),
    }
}

#[rstest]
#[case::not_found(BarberError::NotFound("User not found".into()), StatusCode::NOT_FOUND)]
#[case::validation(BarberError::Validation("Invalid input".into()), StatusCode::BAD_REQUEST)]
#[case::conflict(BarberError::Conflict("Slot taken".into()), StatusCode::CONFLICT)]
#[case::authentication(
    BarberError::Authentication("Bad password".into()),
    StatusCode::UNAUTHORIZED
)]
#[case::database(
    BarberError::Database(eyre::eyre!("Database error")),
    StatusCode::INTERNAL_SERVER_ERROR
)]
#[case::internal(
    BarberError::Internal(Box::new(std::io::Error::new(std::io::ErrorKind::Other, "boom"))),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn test_error_maps_to_status(#[case] error: BarberError, #[case] expected: StatusCode) {
    let response = map_error(error);

    assert_eq!(response.status(), expected);
}

#[test]
fn test_eyre_report_becomes_database_error() {
    let error = AppError::from(eyre::eyre!("pool timed out"));

    assert!(matches!(error.0, BarberError::Database(_)));
    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_hash_password() {
    let password = "test_password";
    let hashed = auth::hash_password(password).unwrap();

    assert_ne!(hashed, password);
    assert!(hashed.starts_with("$argon2"));
    // Salts are random
    assert_ne!(hashed, auth::hash_password(password).unwrap());
}

#[test]
fn test_verify_password() {
    let hashed = auth::hash_password("123456").unwrap();

    assert!(auth::verify_password(&hashed, "123456").unwrap());
    assert!(!auth::verify_password(&hashed, "654321").unwrap());
}

#[test]
fn test_verify_password_rejects_malformed_hash() {
    assert!(auth::verify_password("not-a-phc-string", "123456").is_err());
}

#[test]
fn test_taken_slot_answers_conflict() {
    let existing = Appointment {
        id: Uuid::new_v4(),
        provider_id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        date: at(2020, 5, 3, 9, 0),
        created_at: at(2020, 5, 1, 9, 0),
    };

    let error = booking::ensure_slot_free(Some(&existing)).unwrap_err();

    assert_eq!(map_error(error).status(), StatusCode::CONFLICT);
}

#[test]
fn test_authenticate_accepts_matching_password() {
    let user = user_with_password("123456");

    let signed_in = auth::authenticate(Some(user.clone()), "123456").unwrap();

    assert_eq!(signed_in.id, user.id);
}

#[test]
fn test_authenticate_rejects_unknown_email() {
    let error = auth::authenticate(None, "123456").unwrap_err();

    assert!(matches!(error, BarberError::Authentication(_)));
    assert_eq!(map_error(error).status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_authenticate_rejects_wrong_password() {
    let user = user_with_password("123456");

    let error = auth::authenticate(Some(user), "wrong-password").unwrap_err();

    match error {
        BarberError::Authentication(message) => {
            assert_eq!(message, "Incorrect email/password combination")
        }
        other => panic!("Expected Authentication error, got: {:?}", other),
    }
}

#[test]
fn test_change_password_requires_old_password() {
    let user = user_with_password("123456");

    let error = auth::change_password(&user.password_hash, None, "123123").unwrap_err();

    assert!(matches!(error, BarberError::Validation(_)));
}

#[test]
fn test_change_password_rejects_wrong_old_password() {
    let user = user_with_password("123456");

    let error =
        auth::change_password(&user.password_hash, Some("wrong-old"), "123123").unwrap_err();

    match error {
        BarberError::Validation(message) => assert_eq!(message, "Old password does not match"),
        other => panic!("Expected Validation error, got: {:?}", other),
    }
}

#[test]
fn test_change_password_hashes_new_password() {
    let user = user_with_password("123456");

    let new_hash = auth::change_password(&user.password_hash, Some("123456"), "123123").unwrap();

    assert!(auth::verify_password(&new_hash, "123123").unwrap());
    assert!(!auth::verify_password(&new_hash, "123456").unwrap());
}
