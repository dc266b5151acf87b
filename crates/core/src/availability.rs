//! # Provider Availability
//!
//! Derives bookable slots for a provider from the appointments already
//! booked with them and the current local time.
//!
//! Day mode walks the working hours (8:00 to 17:00, one slot per hour) and
//! marks a slot unavailable when it is booked or already started. Month mode
//! walks every calendar day of the month and marks a day unavailable only
//! when every working hour of it is booked.
//!
//! The calculator performs no validation of its own: date components are
//! handed to the [`AppointmentQuery`] as given, and query failures are
//! propagated unchanged.

use std::cmp::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use uuid::Uuid;

use crate::calendar;
use crate::errors::BarberResult;
use crate::models::appointment::Appointment;
use crate::models::availability::{DayAvailabilitySlot, MonthAvailabilitySlot};

/// Read access to the appointments booked with a provider.
#[async_trait]
pub trait AppointmentQuery: Send + Sync {
    /// Appointments of `provider_id` on the given calendar day.
    async fn find_by_provider_and_day(
        &self,
        provider_id: Uuid,
        year: i32,
        month: u32,
        day: u32,
    ) -> eyre::Result<Vec<Appointment>>;

    /// Appointments of `provider_id` within the given calendar month.
    async fn find_by_provider_and_month(
        &self,
        provider_id: Uuid,
        year: i32,
        month: u32,
    ) -> eyre::Result<Vec<Appointment>>;
}

/// Source of the current local date and time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the host's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Computes day and month availability for providers.
#[derive(Clone)]
pub struct AvailabilityCalculator {
    appointments: Arc<dyn AppointmentQuery>,
    clock: Arc<dyn Clock>,
}

impl AvailabilityCalculator {
    pub fn new(appointments: Arc<dyn AppointmentQuery>, clock: Arc<dyn Clock>) -> Self {
        Self {
            appointments,
            clock,
        }
    }

    /// Lists the working-hour slots of one day, ascending by hour.
    ///
    /// Always returns one slot per working hour.
    pub async fn list_day_availability(
        &self,
        provider_id: Uuid,
        year: i32,
        month: u32,
        day: u32,
    ) -> BarberResult<Vec<DayAvailabilitySlot>> {
        let appointments = self
            .appointments
            .find_by_provider_and_day(provider_id, year, month, day)
            .await?;

        Ok(day_availability(
            &appointments,
            year,
            month,
            day,
            self.clock.now(),
        ))
    }

    /// Lists every calendar day of a month, ascending by day.
    ///
    /// An invalid month yields an empty list.
    pub async fn list_month_availability(
        &self,
        provider_id: Uuid,
        year: i32,
        month: u32,
    ) -> BarberResult<Vec<MonthAvailabilitySlot>> {
        let appointments = self
            .appointments
            .find_by_provider_and_month(provider_id, year, month)
            .await?;

        Ok(month_availability(&appointments, year, month))
    }
}

/// Marks each working hour of the day as available unless it is booked or
/// does not start strictly after `now`.
///
/// Only appointments falling on the requested day count as bookings.
///
/// Past days are fully unavailable and future days are never suppressed by
/// the clock; the hour is only compared on the current day.
pub fn day_availability(
    appointments: &[Appointment],
    year: i32,
    month: u32,
    day: u32,
    now: NaiveDateTime,
) -> Vec<DayAvailabilitySlot> {
    let target = calendar::date(year, month, day);

    calendar::working_hours()
        .map(|hour| {
            let booked = appointments.iter().any(|appointment| {
                Some(appointment.date.date()) == target && appointment.date.hour() == hour
            });

            let started = match target.map(|date| date.cmp(&now.date())) {
                Some(Ordering::Less) => true,
                Some(Ordering::Equal) => hour <= now.hour(),
                Some(Ordering::Greater) | None => false,
            };

            DayAvailabilitySlot {
                hour,
                available: !booked && !started,
            }
        })
        .collect()
}

/// Marks each day of the month as available unless its appointment count
/// fills every working hour.
pub fn month_availability(
    appointments: &[Appointment],
    year: i32,
    month: u32,
) -> Vec<MonthAvailabilitySlot> {
    let Some(days) = calendar::days_in_month(year, month) else {
        return Vec::new();
    };

    (1..=days)
        .map(|day| {
            let booked = appointments
                .iter()
                .filter(|appointment| {
                    let date = appointment.date.date();
                    date.year() == year && date.month() == month && date.day() == day
                })
                .count();

            MonthAvailabilitySlot {
                day,
                available: booked < calendar::SLOTS_PER_DAY,
            }
        })
        .collect()
}
