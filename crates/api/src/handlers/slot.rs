use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use std::sync::Arc;

use courtbook_core::{
    errors::CourtError,
    models::slot::{
        BulkCreateSlotsRequest, BulkCreateSlotsResponse, GenerateSlotsResponse, Slot, hourly_grid,
    },
};

use crate::{ApiState, middleware::error_handling::AppError};

#[axum::debug_handler]
pub async fn bulk_create_slots(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<BulkCreateSlotsRequest>,
) -> Result<Json<BulkCreateSlotsResponse>, AppError> {
    // Every interval must be well-formed before any row is written
    for slot in &payload.slots {
        if slot.start >= slot.end {
            return Err(AppError(CourtError::Validation(
                "Slot start must precede slot end".to_string(),
            )));
        }
    }

    let rows: Vec<_> = payload
        .slots
        .iter()
        .map(|s| (s.court_id, s.start, s.end))
        .collect();

    let count = courtbook_db::repositories::slot::create_slots(&state.db_pool, &rows)
        .await
        .map_err(CourtError::Database)?;

    Ok(Json(BulkCreateSlotsResponse { count }))
}

#[axum::debug_handler]
pub async fn generate_slots(
    State(state): State<Arc<ApiState>>,
    Path(court_id): Path<i32>,
) -> Result<Json<GenerateSlotsResponse>, AppError> {
    courtbook_db::repositories::court::get_court_by_id(&state.db_pool, court_id)
        .await
        .map_err(CourtError::Database)?
        .ok_or_else(|| CourtError::NotFound("Court not found".to_string()))?;

    let rows: Vec<_> = hourly_grid(Utc::now())
        .into_iter()
        .map(|(start, end)| (court_id, start, end))
        .collect();

    let count = courtbook_db::repositories::slot::create_slots(&state.db_pool, &rows)
        .await
        .map_err(CourtError::Database)?;

    Ok(Json(GenerateSlotsResponse {
        message: "Slots generated successfully".to_string(),
        count: count as usize,
    }))
}

#[axum::debug_handler]
pub async fn list_court_slots(
    State(state): State<Arc<ApiState>>,
    Path(court_id): Path<i32>,
) -> Result<Json<Vec<Slot>>, AppError> {
    let slots = courtbook_db::repositories::slot::get_slots_by_court(&state.db_pool, court_id)
        .await
        .map_err(CourtError::Database)?;

    Ok(Json(slots.into_iter().map(Slot::from).collect()))
}
