use axum::{Json, extract::State};
use std::sync::Arc;

use courtbook_core::{
    errors::CourtError,
    models::{
        court::Court,
        location::{CreateLocationRequest, Location, LocationWithCourts},
    },
};
use courtbook_db::models::DbLocation;

use crate::{
    ApiState,
    middleware::{
        auth::{AuthUser, ensure_admin},
        error_handling::AppError,
    },
};

async fn with_courts(
    state: &ApiState,
    location: DbLocation,
) -> Result<LocationWithCourts, CourtError> {
    let courts =
        courtbook_db::repositories::court::list_courts_by_location(&state.db_pool, location.id)
            .await
            .map_err(CourtError::Database)?;

    Ok(LocationWithCourts {
        id: location.id,
        name: location.name,
        address: location.address,
        owner_id: location.owner_id,
        courts: courts.into_iter().map(Court::from).collect(),
    })
}

#[axum::debug_handler]
pub async fn list_locations(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<LocationWithCourts>>, AppError> {
    let locations = courtbook_db::repositories::location::list_locations(&state.db_pool)
        .await
        .map_err(CourtError::Database)?;

    let mut expanded = Vec::with_capacity(locations.len());
    for location in locations {
        expanded.push(with_courts(&state, location).await?);
    }

    Ok(Json(expanded))
}

#[axum::debug_handler]
pub async fn create_location(
    State(state): State<Arc<ApiState>>,
    user: AuthUser,
    Json(payload): Json<CreateLocationRequest>,
) -> Result<Json<Location>, AppError> {
    ensure_admin(&user)?;

    let location = courtbook_db::repositories::location::create_location(
        &state.db_pool,
        &payload.name,
        &payload.address,
        payload.owner_id,
    )
    .await
    .map_err(CourtError::Database)?;

    Ok(Json(Location::from(location)))
}

#[axum::debug_handler]
pub async fn my_locations(
    State(state): State<Arc<ApiState>>,
    user: AuthUser,
) -> Result<Json<Vec<LocationWithCourts>>, AppError> {
    let locations =
        courtbook_db::repositories::location::list_locations_by_owner(&state.db_pool, user.id)
            .await
            .map_err(CourtError::Database)?;

    let mut expanded = Vec::with_capacity(locations.len());
    for location in locations {
        expanded.push(with_courts(&state, location).await?);
    }

    Ok(Json(expanded))
}
