//! Rules a new appointment must satisfy before it is stored.

use chrono::{NaiveDateTime, Timelike};
use uuid::Uuid;

use crate::calendar;
use crate::errors::{BarberError, BarberResult};
use crate::models::{appointment::Appointment, user::User};

/// Checks a booking request against the clock and the working hours and
/// returns the date to store, truncated to the start of its hour.
///
/// Existence of both parties and slot conflicts need the database; the
/// caller looks them up and passes the rows to [`ensure_party_exists`] and
/// [`ensure_slot_free`].
pub fn validate_booking(
    user_id: Uuid,
    provider_id: Uuid,
    requested: NaiveDateTime,
    now: NaiveDateTime,
) -> BarberResult<NaiveDateTime> {
    let date = calendar::start_of_hour(requested);

    if date <= now {
        return Err(BarberError::Validation(
            "You can't book an appointment on a past date".to_string(),
        ));
    }

    if user_id == provider_id {
        return Err(BarberError::Validation(
            "You can't book an appointment with yourself".to_string(),
        ));
    }

    if !calendar::is_working_hour(date.hour()) {
        return Err(BarberError::Validation(format!(
            "Appointments can only be booked between {}:00 and {}:00",
            calendar::FIRST_HOUR,
            calendar::LAST_HOUR
        )));
    }

    Ok(date)
}

/// Unwraps a looked-up booking party or reports which one is missing.
pub fn ensure_party_exists(found: Option<User>, role: &str, id: Uuid) -> BarberResult<User> {
    found.ok_or_else(|| BarberError::NotFound(format!("{} with ID {} not found", role, id)))
}

/// Fails when the provider already has an appointment at the requested hour.
pub fn ensure_slot_free(existing: Option<&Appointment>) -> BarberResult<()> {
    match existing {
        Some(_) => Err(slot_taken()),
        None => Ok(()),
    }
}

/// Conflict raised for a provider hour that is already booked.
pub fn slot_taken() -> BarberError {
    BarberError::Conflict("This appointment hour is already booked".to_string())
}
