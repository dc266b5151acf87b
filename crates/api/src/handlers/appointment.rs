use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use barbershop_core::{
    booking, calendar,
    errors::BarberError,
    models::{
        appointment::{Appointment, AppointmentResponse, CreateAppointmentRequest},
        availability::DayQuery,
        user::User,
    },
};
use barbershop_db::repositories::{appointment, user};
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<AppointmentResponse>), AppError> {
    let date = booking::validate_booking(
        payload.user_id,
        payload.provider_id,
        payload.date,
        state.clock.now(),
    )?;

    let customer = user::get_user_by_id(&state.db_pool, payload.user_id)
        .await
        .map_err(BarberError::Database)?;
    booking::ensure_party_exists(customer.map(User::from), "User", payload.user_id)?;

    let provider = user::get_user_by_id(&state.db_pool, payload.provider_id)
        .await
        .map_err(BarberError::Database)?;
    booking::ensure_party_exists(provider.map(User::from), "Provider", payload.provider_id)?;

    let existing = appointment::find_by_date(&state.db_pool, payload.provider_id, date)
        .await
        .map_err(BarberError::Database)?;
    booking::ensure_slot_free(existing.map(Appointment::from).as_ref())?;

    // Concurrent bookings of the same slot are caught by the unique constraint
    let db_appointment =
        appointment::create_appointment(&state.db_pool, payload.provider_id, payload.user_id, date)
            .await
            .map_err(|e| {
                if barbershop_db::is_unique_violation(&e) {
                    booking::slot_taken()
                } else {
                    BarberError::Database(e)
                }
            })?;

    tracing::info!(
        "Appointment booked: id={}, provider_id={}, date={}",
        db_appointment.id, db_appointment.provider_id, db_appointment.date
    );

    let response = AppointmentResponse::from(Appointment::from(db_appointment));
    Ok((StatusCode::CREATED, Json(response)))
}

/// Lists a provider's appointments on one day, earliest first
#[axum::debug_handler]
pub async fn list_provider_appointments(
    State(state): State<Arc<ApiState>>,
    Path(provider_id): Path<Uuid>,
    Query(query): Query<DayQuery>,
) -> Result<Json<Vec<AppointmentResponse>>, AppError> {
    let (start, end) = calendar::day_range(query.year, query.month, query.day).ok_or_else(|| {
        BarberError::Validation(format!(
            "{}-{:02}-{:02} is not a valid date",
            query.year, query.month, query.day
        ))
    })?;

    let appointments = appointment::find_between(&state.db_pool, provider_id, start, end)
        .await
        .map_err(BarberError::Database)?;

    Ok(Json(
        appointments
            .into_iter()
            .map(|row| AppointmentResponse::from(Appointment::from(row)))
            .collect(),
    ))
}
