//! # Availability Handlers
//!
//! HTTP entry points to the provider availability calculator.
//!
//! The calculator itself trusts its input, so these handlers reject date
//! components that do not name a real calendar day or month before calling
//! it. Provider existence is not checked: an unknown provider simply has no
//! appointments.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use barbershop_core::{
    calendar,
    errors::BarberError,
    models::availability::{DayAvailabilitySlot, DayQuery, MonthAvailabilitySlot, MonthQuery},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Lists the working-hour slots of one day for a provider
///
/// # Endpoint
///
/// ```text
/// GET /providers/:provider_id/day-availability?year=2020&month=5&day=2
/// ```
///
/// # Errors
///
/// * `BarberError::Validation` - The date components do not form a calendar date
/// * `BarberError::Database` - Appointment lookup failed
#[axum::debug_handler]
pub async fn day_availability(
    State(state): State<Arc<ApiState>>,
    Path(provider_id): Path<Uuid>,
    Query(query): Query<DayQuery>,
) -> Result<Json<Vec<DayAvailabilitySlot>>, AppError> {
    validate_month(query.month)?;
    if calendar::date(query.year, query.month, query.day).is_none() {
        return Err(AppError(BarberError::Validation(format!(
            "{}-{:02}-{:02} is not a valid date",
            query.year, query.month, query.day
        ))));
    }

    tracing::debug!(
        "Listing day availability: provider_id={}, date={}-{:02}-{:02}",
        provider_id, query.year, query.month, query.day
    );

    let slots = state
        .availability()
        .list_day_availability(provider_id, query.year, query.month, query.day)
        .await?;

    Ok(Json(slots))
}

/// Lists every day of a month for a provider
///
/// # Endpoint
///
/// ```text
/// GET /providers/:provider_id/month-availability?year=2020&month=5
/// ```
///
/// # Errors
///
/// * `BarberError::Validation` - The month is outside 1-12
/// * `BarberError::Database` - Appointment lookup failed
#[axum::debug_handler]
pub async fn month_availability(
    State(state): State<Arc<ApiState>>,
    Path(provider_id): Path<Uuid>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Vec<MonthAvailabilitySlot>>, AppError> {
    validate_month(query.month)?;
    if calendar::days_in_month(query.year, query.month).is_none() {
        return Err(AppError(BarberError::Validation(format!(
            "{}-{:02} is not a valid month",
            query.year, query.month
        ))));
    }

    tracing::debug!(
        "Listing month availability: provider_id={}, month={}-{:02}",
        provider_id, query.year, query.month
    );

    let slots = state
        .availability()
        .list_month_availability(provider_id, query.year, query.month)
        .await?;

    Ok(Json(slots))
}

fn validate_month(month: u32) -> Result<(), AppError> {
    if !(1..=12).contains(&month) {
        return Err(AppError(BarberError::Validation(
            "month must be between 1 and 12".to_string(),
        )));
    }
    Ok(())
}
