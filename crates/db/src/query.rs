//! PostgreSQL-backed [`AppointmentQuery`].

use async_trait::async_trait;
use barbershop_core::{
    availability::AppointmentQuery, calendar, models::appointment::Appointment,
};
use eyre::Result;
use uuid::Uuid;

use crate::{repositories::appointment, DbPool};

/// Reads a provider's appointments for the availability calculator.
///
/// Date components that do not form a real calendar day or month match
/// nothing and yield an empty list.
#[derive(Debug, Clone)]
pub struct PgAppointmentQuery {
    pool: DbPool,
}

impl PgAppointmentQuery {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentQuery for PgAppointmentQuery {
    async fn find_by_provider_and_day(
        &self,
        provider_id: Uuid,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<Vec<Appointment>> {
        let Some((start, end)) = calendar::day_range(year, month, day) else {
            return Ok(Vec::new());
        };

        let rows = appointment::find_between(&self.pool, provider_id, start, end).await?;
        Ok(rows.into_iter().map(Appointment::from).collect())
    }

    async fn find_by_provider_and_month(
        &self,
        provider_id: Uuid,
        year: i32,
        month: u32,
    ) -> Result<Vec<Appointment>> {
        let Some((start, end)) = calendar::month_range(year, month) else {
            return Ok(Vec::new());
        };

        let rows = appointment::find_between(&self.pool, provider_id, start, end).await?;
        Ok(rows.into_iter().map(Appointment::from).collect())
    }
}
