//! # Booking Handlers
//!
//! HTTP face of the slot reservation gate. `create_booking` delegates the
//! free-to-booked transition to
//! `courtbook_db::repositories::booking::reserve_slot`, which performs the
//! check-and-set as a single conditional statement inside one transaction.
//! Among concurrent requests for the same slot exactly one observes
//! `Reserved`; the rest observe `AlreadyBooked` and are answered with 400
//! "Slot already booked". Retrying a successful reservation therefore also
//! yields the conflict answer; booking is not idempotent by request.

use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use courtbook_core::{
    errors::CourtError,
    models::{
        booking::{BookingCourt, BookingResponse, BookingSlot, CreateBookingRequest, UserSummary},
        location::Location,
    },
};
use courtbook_db::{models::BookingDetailRow, repositories::booking::ReserveOutcome};

use crate::{ApiState, middleware::error_handling::AppError};

/// Shapes a joined booking row into the wire payload. Court and location
/// expansions degrade to `null` when no row backs them.
pub fn expand_booking_row(row: BookingDetailRow, include_user: bool) -> BookingResponse {
    let location = match (
        row.location_id,
        row.location_name,
        row.location_address,
        row.location_owner_id,
    ) {
        (Some(id), Some(name), Some(address), Some(owner_id)) => Some(Location {
            id,
            name,
            address,
            owner_id,
        }),
        _ => None,
    };

    let court = match (
        row.court_id,
        row.court_name,
        row.court_sport,
        row.court_max_players,
        row.court_price,
    ) {
        (Some(id), Some(name), Some(sport), Some(max_players), Some(price)) => Some(BookingCourt {
            id,
            name,
            sport,
            description: row.court_description,
            max_players,
            price,
            location,
        }),
        _ => None,
    };

    let user = include_user.then(|| UserSummary {
        id: row.user_id,
        name: row.user_name,
        email: row.user_email,
    });

    BookingResponse {
        id: row.id,
        user_id: row.user_id,
        slot_id: row.slot_id,
        created_at: row.created_at,
        user,
        slot: BookingSlot {
            id: row.slot_id,
            start: row.slot_start,
            end: row.slot_end,
            is_booked: row.slot_is_booked,
            court,
        },
    }
}

#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    let outcome = courtbook_db::repositories::booking::reserve_slot(
        &state.db_pool,
        payload.user_id,
        payload.slot_id,
    )
    .await
    .map_err(CourtError::Database)?;

    let booking = match outcome {
        ReserveOutcome::SlotMissing => {
            return Err(AppError(CourtError::NotFound("Slot not found".to_string())));
        }
        ReserveOutcome::AlreadyBooked => {
            return Err(AppError(CourtError::Conflict(
                "Slot already booked".to_string(),
            )));
        }
        ReserveOutcome::Reserved(booking) => booking,
    };

    let row =
        courtbook_db::repositories::booking::get_booking_detail(&state.db_pool, booking.id)
            .await
            .map_err(CourtError::Database)?
            .ok_or_else(|| {
                CourtError::Database(eyre::eyre!("Booking {} vanished after commit", booking.id))
            })?;

    Ok(Json(expand_booking_row(row, false)))
}

#[axum::debug_handler]
pub async fn list_bookings(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let rows = courtbook_db::repositories::booking::list_bookings(&state.db_pool)
        .await
        .map_err(CourtError::Database)?;

    Ok(Json(
        rows.into_iter()
            .map(|row| expand_booking_row(row, true))
            .collect(),
    ))
}

#[axum::debug_handler]
pub async fn list_user_bookings(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let rows =
        courtbook_db::repositories::booking::list_bookings_by_user(&state.db_pool, user_id)
            .await
            .map_err(CourtError::Database)?;

    Ok(Json(
        rows.into_iter()
            .map(|row| expand_booking_row(row, false))
            .collect(),
    ))
}
