//! Calendar arithmetic on local wall-clock time.

use std::ops::RangeInclusive;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// First bookable hour of a working day.
pub const FIRST_HOUR: u32 = 8;
/// Last bookable hour of a working day.
pub const LAST_HOUR: u32 = 17;
/// Number of one-hour slots in a working day.
pub const SLOTS_PER_DAY: usize = (LAST_HOUR - FIRST_HOUR + 1) as usize;

pub fn working_hours() -> RangeInclusive<u32> {
    FIRST_HOUR..=LAST_HOUR
}

pub fn is_working_hour(hour: u32) -> bool {
    working_hours().contains(&hour)
}

/// Builds a date from 1-indexed components, `None` if it is not a real
/// calendar date.
pub fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let next_first = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;

    u32::try_from(next_first.signed_duration_since(first).num_days()).ok()
}

/// Half-open `[start, end)` range covering one calendar day.
pub fn day_range(year: i32, month: u32, day: u32) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let start = date(year, month, day)?;
    let end = start.succ_opt()?;

    Some((start.and_time(NaiveTime::MIN), end.and_time(NaiveTime::MIN)))
}

/// Half-open `[start, end)` range covering one calendar month.
pub fn month_range(year: i32, month: u32) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let start = date(year, month, 1)?;
    let end = start.checked_add_days(chrono::Days::new(u64::from(days_in_month(year, month)?)))?;

    Some((start.and_time(NaiveTime::MIN), end.and_time(NaiveTime::MIN)))
}

/// Drops minutes, seconds and sub-second precision.
pub fn start_of_hour(moment: NaiveDateTime) -> NaiveDateTime {
    moment
        .date()
        .and_hms_opt(moment.hour(), 0, 0)
        .unwrap_or(moment)
}
