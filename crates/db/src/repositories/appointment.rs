use crate::models::DbAppointment;
use chrono::{Local, NaiveDateTime};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_appointment(
    pool: &Pool<Postgres>,
    provider_id: Uuid,
    user_id: Uuid,
    date: NaiveDateTime,
) -> Result<DbAppointment> {
    let id = Uuid::new_v4();
    let now = Local::now().naive_local();

    tracing::debug!(
        "Creating appointment: id={}, provider_id={}, user_id={}, date={}",
        id, provider_id, user_id, date
    );

    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        INSERT INTO appointments (id, provider_id, user_id, date, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, provider_id, user_id, date, created_at
        "#,
    )
    .bind(id)
    .bind(provider_id)
    .bind(user_id)
    .bind(date)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(appointment)
}

pub async fn find_by_date(
    pool: &Pool<Postgres>,
    provider_id: Uuid,
    date: NaiveDateTime,
) -> Result<Option<DbAppointment>> {
    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, provider_id, user_id, date, created_at
        FROM appointments
        WHERE provider_id = $1 AND date = $2
        "#,
    )
    .bind(provider_id)
    .bind(date)
    .fetch_optional(pool)
    .await?;

    Ok(appointment)
}

/// Appointments of a provider with `start <= date < end`, earliest first.
pub async fn find_between(
    pool: &Pool<Postgres>,
    provider_id: Uuid,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<Vec<DbAppointment>> {
    tracing::debug!(
        "Finding appointments: provider_id={}, from={}, until={}",
        provider_id, start, end
    );

    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, provider_id, user_id, date, created_at
        FROM appointments
        WHERE provider_id = $1 AND date >= $2 AND date < $3
        ORDER BY date ASC
        "#,
    )
    .bind(provider_id)
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}
