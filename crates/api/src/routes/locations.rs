use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/locations",
            get(handlers::location::list_locations).post(handlers::location::create_location),
        )
        .route(
            "/api/locations/my-locations",
            get(handlers::location::my_locations),
        )
}
