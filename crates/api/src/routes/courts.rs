use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/courts",
            get(handlers::court::list_courts).post(handlers::court::create_court),
        )
        .route(
            "/api/courts/location/:location_id",
            get(handlers::court::list_location_courts),
        )
}
