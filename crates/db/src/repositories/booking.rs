use crate::models::{BookingDetailRow, DbBooking};
use eyre::Result;
use serde::{Deserialize, Serialize};
use sqlx::{Pool, Postgres};

/// Outcome of a reservation attempt against a slot.
///
/// `AlreadyBooked` is the expected result of losing a race for a slot and is
/// reported to the caller, never retried here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReserveOutcome {
    Reserved(DbBooking),
    AlreadyBooked,
    SlotMissing,
}

/// Attempts the free-to-booked transition for `slot_id` on behalf of `user_id`.
///
/// The check-and-set is a single conditional UPDATE keyed on the
/// still-false flag, so the store serializes concurrent attempts: exactly
/// one request updates the row, every other attempt matches zero rows and
/// reports `AlreadyBooked`. The flag flip and the booking insert share one
/// transaction; either both commit or neither does. There is no
/// application-level read-then-write and no in-process locking, so the
/// guarantee holds across processes sharing the database.
///
/// The flag is monotonic: no statement in this crate ever writes
/// `is_booked = FALSE`.
pub async fn reserve_slot(
    pool: &Pool<Postgres>,
    user_id: i32,
    slot_id: i32,
) -> Result<ReserveOutcome> {
    let mut tx = pool.begin().await?;

    let claimed = sqlx::query_scalar::<_, i32>(
        r#"
        UPDATE slots
        SET is_booked = TRUE
        WHERE id = $1 AND is_booked = FALSE
        RETURNING id
        "#,
    )
    .bind(slot_id)
    .fetch_optional(&mut *tx)
    .await?;

    if claimed.is_none() {
        // Zero rows matched: the slot is either taken or absent.
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (SELECT 1 FROM slots WHERE id = $1)
            "#,
        )
        .bind(slot_id)
        .fetch_one(&mut *tx)
        .await?;
        tx.rollback().await?;

        return if exists {
            tracing::debug!("Slot {} already booked, reservation rejected", slot_id);
            Ok(ReserveOutcome::AlreadyBooked)
        } else {
            tracing::debug!("Slot {} not found, reservation rejected", slot_id);
            Ok(ReserveOutcome::SlotMissing)
        };
    }

    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        INSERT INTO bookings (user_id, slot_id)
        VALUES ($1, $2)
        RETURNING id, user_id, slot_id, created_at
        "#,
    )
    .bind(user_id)
    .bind(slot_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::debug!(
        "Reserved slot {} for user {} (booking {})",
        slot_id,
        user_id,
        booking.id
    );
    Ok(ReserveOutcome::Reserved(booking))
}

const BOOKING_DETAIL_COLUMNS: &str = r#"
    b.id, b.user_id, b.slot_id, b.created_at,
    u.name AS user_name, u.email AS user_email,
    s.start_time AS slot_start, s.end_time AS slot_end, s.is_booked AS slot_is_booked,
    c.id AS court_id, c.name AS court_name, c.sport AS court_sport,
    c.description AS court_description, c.max_players AS court_max_players,
    c.price AS court_price,
    l.id AS location_id, l.name AS location_name, l.address AS location_address,
    l.owner_id AS location_owner_id
"#;

pub async fn get_booking_detail(
    pool: &Pool<Postgres>,
    booking_id: i32,
) -> Result<Option<BookingDetailRow>> {
    let sql = format!(
        r#"
        SELECT {BOOKING_DETAIL_COLUMNS}
        FROM bookings b
        JOIN users u ON u.id = b.user_id
        JOIN slots s ON s.id = b.slot_id
        LEFT JOIN courts c ON c.id = s.court_id
        LEFT JOIN locations l ON l.id = c.location_id
        WHERE b.id = $1
        "#
    );

    let row = sqlx::query_as::<_, BookingDetailRow>(&sql)
        .bind(booking_id)
        .fetch_optional(pool)
        .await?;

    Ok(row)
}

pub async fn list_bookings(pool: &Pool<Postgres>) -> Result<Vec<BookingDetailRow>> {
    let sql = format!(
        r#"
        SELECT {BOOKING_DETAIL_COLUMNS}
        FROM bookings b
        JOIN users u ON u.id = b.user_id
        JOIN slots s ON s.id = b.slot_id
        LEFT JOIN courts c ON c.id = s.court_id
        LEFT JOIN locations l ON l.id = c.location_id
        ORDER BY b.created_at DESC
        "#
    );

    let rows = sqlx::query_as::<_, BookingDetailRow>(&sql)
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

pub async fn list_bookings_by_user(
    pool: &Pool<Postgres>,
    user_id: i32,
) -> Result<Vec<BookingDetailRow>> {
    let sql = format!(
        r#"
        SELECT {BOOKING_DETAIL_COLUMNS}
        FROM bookings b
        JOIN users u ON u.id = b.user_id
        JOIN slots s ON s.id = b.slot_id
        LEFT JOIN courts c ON c.id = s.court_id
        LEFT JOIN locations l ON l.id = c.location_id
        WHERE b.user_id = $1
        ORDER BY b.created_at DESC
        "#
    );

    let rows = sqlx::query_as::<_, BookingDetailRow>(&sql)
        .bind(user_id)
        .fetch_all(pool)
        .await?;

    Ok(rows)
}
