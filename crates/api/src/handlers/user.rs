use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use barbershop_core::{
    account,
    errors::BarberError,
    models::user::{
        CreateSessionRequest, CreateUserRequest, ListProvidersQuery, UpdateProfileRequest, User,
        UserResponse,
    },
};
use barbershop_db::repositories::user;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{
        auth::{self, CurrentUser},
        error_handling::AppError,
    },
    ApiState,
};

#[axum::debug_handler]
pub async fn create_user(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    account::validate_new_user(&payload)?;
    let email = account::normalize_email(&payload.email);

    let existing = user::get_user_by_email(&state.db_pool, &email)
        .await
        .map_err(BarberError::Database)?;
    account::ensure_email_available(existing.map(User::from).as_ref(), None)?;

    let password_hash = auth::hash_password(&payload.password)?;

    let db_user = user::create_user(&state.db_pool, payload.name.trim(), &email, &password_hash)
        .await
        .map_err(email_taken_or_database)?;

    tracing::info!("User created: id={}", db_user.id);

    Ok((StatusCode::CREATED, Json(UserResponse::from(User::from(db_user)))))
}

/// Signs a user in by checking their credentials
#[axum::debug_handler]
pub async fn create_session(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateSessionRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let email = account::normalize_email(&payload.email);
    let found = user::get_user_by_email(&state.db_pool, &email)
        .await
        .map_err(BarberError::Database)?;

    let signed_in = auth::authenticate(found.map(User::from), &payload.password)?;

    Ok(Json(UserResponse::from(signed_in)))
}

#[axum::debug_handler]
pub async fn show_profile(
    State(state): State<Arc<ApiState>>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<UserResponse>, AppError> {
    let profile = find_user(&state, user_id).await?;

    Ok(Json(UserResponse::from(profile)))
}

/// Updates the caller's name and email, and their password when a new one
/// is given together with the current one
#[axum::debug_handler]
pub async fn update_profile(
    State(state): State<Arc<ApiState>>,
    CurrentUser(user_id): CurrentUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, AppError> {
    account::validate_profile_update(&payload)?;
    let email = account::normalize_email(&payload.email);

    let current = find_user(&state, user_id).await?;

    let holder = user::get_user_by_email(&state.db_pool, &email)
        .await
        .map_err(BarberError::Database)?;
    account::ensure_email_available(holder.map(User::from).as_ref(), Some(user_id))?;

    let password_hash = match payload.new_password() {
        Some(password) => {
            auth::change_password(&current.password_hash, payload.old_password(), password)?
        }
        None => current.password_hash,
    };

    let updated = user::update_user(
        &state.db_pool,
        user_id,
        payload.name.trim(),
        &email,
        &password_hash,
    )
    .await
    .map_err(email_taken_or_database)?
    .ok_or_else(|| user_not_found(user_id))?;

    tracing::info!("Profile updated: id={}", updated.id);

    Ok(Json(UserResponse::from(User::from(updated))))
}

#[axum::debug_handler]
pub async fn list_providers(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ListProvidersQuery>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let providers = user::list_providers(&state.db_pool, query.except_user_id)
        .await
        .map_err(BarberError::Database)?;

    Ok(Json(
        providers
            .into_iter()
            .map(|row| UserResponse::from(User::from(row)))
            .collect(),
    ))
}

async fn find_user(state: &ApiState, user_id: Uuid) -> Result<User, BarberError> {
    user::get_user_by_id(&state.db_pool, user_id)
        .await
        .map_err(BarberError::Database)?
        .map(User::from)
        .ok_or_else(|| user_not_found(user_id))
}

fn user_not_found(user_id: Uuid) -> BarberError {
    BarberError::NotFound(format!("User with ID {} not found", user_id))
}

// A racing insert or update can still hit the unique email index
fn email_taken_or_database(err: eyre::Report) -> BarberError {
    if barbershop_db::is_unique_violation(&err) {
        BarberError::Conflict("Email address already in use".to_string())
    } else {
        BarberError::Database(err)
    }
}
