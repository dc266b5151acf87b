use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailabilitySlot {
    pub hour: u32,
    pub available: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthAvailabilitySlot {
    pub day: u32,
    pub available: bool,
}

/// Query string of `GET /providers/:id/day-availability`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayQuery {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Query string of `GET /providers/:id/month-availability`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthQuery {
    pub year: i32,
    pub month: u32,
}
