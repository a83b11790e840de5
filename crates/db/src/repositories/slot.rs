use crate::models::DbSlot;
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn create_slot(
    pool: &Pool<Postgres>,
    court_id: i32,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
) -> Result<DbSlot> {
    let slot = sqlx::query_as::<_, DbSlot>(
        r#"
        INSERT INTO slots (start_time, end_time, court_id)
        VALUES ($1, $2, $3)
        RETURNING id, start_time, end_time, court_id, is_booked
        "#,
    )
    .bind(start_time)
    .bind(end_time)
    .bind(court_id)
    .fetch_one(pool)
    .await?;

    Ok(slot)
}

/// Inserts a batch of slots in one transaction. All slots land or none do.
pub async fn create_slots(
    pool: &Pool<Postgres>,
    slots: &[(i32, DateTime<Utc>, DateTime<Utc>)],
) -> Result<u64> {
    tracing::debug!("Bulk-creating {} slots", slots.len());

    let mut tx = pool.begin().await?;
    for (court_id, start_time, end_time) in slots {
        sqlx::query(
            r#"
            INSERT INTO slots (start_time, end_time, court_id)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(start_time)
        .bind(end_time)
        .bind(court_id)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    Ok(slots.len() as u64)
}

pub async fn get_slots_by_court(pool: &Pool<Postgres>, court_id: i32) -> Result<Vec<DbSlot>> {
    let slots = sqlx::query_as::<_, DbSlot>(
        r#"
        SELECT id, start_time, end_time, court_id, is_booked
        FROM slots
        WHERE court_id = $1
        ORDER BY start_time ASC
        "#,
    )
    .bind(court_id)
    .fetch_all(pool)
    .await?;

    Ok(slots)
}

pub async fn get_slot_by_id(pool: &Pool<Postgres>, id: i32) -> Result<Option<DbSlot>> {
    let slot = sqlx::query_as::<_, DbSlot>(
        r#"
        SELECT id, start_time, end_time, court_id, is_booked
        FROM slots
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(slot)
}
