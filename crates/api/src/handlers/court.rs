use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use courtbook_core::{
    errors::CourtError,
    models::{
        court::{Court, CourtWithSlots, CreateCourtRequest},
        location::Location,
        slot::Slot,
    },
};
use courtbook_db::models::DbCourt;

use crate::{
    ApiState,
    middleware::{auth::AuthUser, error_handling::AppError},
};

async fn with_slots(
    state: &ApiState,
    court: DbCourt,
    location: Option<Location>,
) -> Result<CourtWithSlots, CourtError> {
    let slots = courtbook_db::repositories::slot::get_slots_by_court(&state.db_pool, court.id)
        .await
        .map_err(CourtError::Database)?;

    Ok(CourtWithSlots {
        id: court.id,
        name: court.name,
        sport: court.sport,
        description: court.description,
        max_players: court.max_players,
        price: court.price,
        location_id: court.location_id,
        slots: slots.into_iter().map(Slot::from).collect(),
        location,
    })
}

#[axum::debug_handler]
pub async fn list_courts(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<CourtWithSlots>>, AppError> {
    let courts = courtbook_db::repositories::court::list_courts(&state.db_pool)
        .await
        .map_err(CourtError::Database)?;

    let mut expanded = Vec::with_capacity(courts.len());
    for court in courts {
        let location = courtbook_db::repositories::location::get_location_by_id(
            &state.db_pool,
            court.location_id,
        )
        .await
        .map_err(CourtError::Database)?
        .map(Location::from);

        expanded.push(with_slots(&state, court, location).await?);
    }

    Ok(Json(expanded))
}

#[axum::debug_handler]
pub async fn create_court(
    State(state): State<Arc<ApiState>>,
    user: AuthUser,
    Json(payload): Json<CreateCourtRequest>,
) -> Result<Json<Court>, AppError> {
    // Only the owning user or an admin may add courts to a location
    let location = courtbook_db::repositories::location::get_location_by_id(
        &state.db_pool,
        payload.location_id,
    )
    .await
    .map_err(CourtError::Database)?;

    let owns = location
        .as_ref()
        .is_some_and(|l| l.owner_id == user.id || user.is_admin);
    if !owns {
        return Err(AppError(CourtError::Authorization(
            "Access denied".to_string(),
        )));
    }

    let court = courtbook_db::repositories::court::create_court(
        &state.db_pool,
        &payload.name,
        &payload.sport,
        payload.description.as_deref(),
        payload.max_players,
        payload.price,
        payload.location_id,
    )
    .await
    .map_err(CourtError::Database)?;

    Ok(Json(Court::from(court)))
}

#[axum::debug_handler]
pub async fn list_location_courts(
    State(state): State<Arc<ApiState>>,
    user: AuthUser,
    Path(location_id): Path<i32>,
) -> Result<Json<Vec<CourtWithSlots>>, AppError> {
    let location =
        courtbook_db::repositories::location::get_location_by_id(&state.db_pool, location_id)
            .await
            .map_err(CourtError::Database)?;

    let owns = location
        .as_ref()
        .is_some_and(|l| l.owner_id == user.id || user.is_admin);
    if !owns {
        return Err(AppError(CourtError::Authorization(
            "Access denied".to_string(),
        )));
    }

    let courts =
        courtbook_db::repositories::court::list_courts_by_location(&state.db_pool, location_id)
            .await
            .map_err(CourtError::Database)?;

    let mut expanded = Vec::with_capacity(courts.len());
    for court in courts {
        expanded.push(with_slots(&state, court, None).await?);
    }

    Ok(Json(expanded))
}
