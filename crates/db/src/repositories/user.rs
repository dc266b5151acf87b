use crate::models::DbUser;
use chrono::Local;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_user(
    pool: &Pool<Postgres>,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<DbUser> {
    let id = Uuid::new_v4();
    let now = Local::now().naive_local();

    tracing::debug!("Creating user: id={}, email={}", id, email);

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        INSERT INTO users (id, name, email, password_hash, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, email, password_hash, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

pub async fn get_user_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, name, email, password_hash, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn get_user_by_email(pool: &Pool<Postgres>, email: &str) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, name, email, password_hash, created_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Overwrites a user's name, email and password hash.
///
/// Returns `None` when no user has `id`.
pub async fn update_user(
    pool: &Pool<Postgres>,
    id: Uuid,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<Option<DbUser>> {
    tracing::debug!("Updating user: id={}, email={}", id, email);

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        UPDATE users
        SET name = $2, email = $3, password_hash = $4
        WHERE id = $1
        RETURNING id, name, email, password_hash, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Every user who can be booked, ordered by name, optionally leaving one out.
pub async fn list_providers(
    pool: &Pool<Postgres>,
    except_user_id: Option<Uuid>,
) -> Result<Vec<DbUser>> {
    let providers = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, name, email, password_hash, created_at
        FROM users
        WHERE $1::uuid IS NULL OR id <> $1
        ORDER BY name ASC
        "#,
    )
    .bind(except_user_id)
    .fetch_all(pool)
    .await?;

    Ok(providers)
}
