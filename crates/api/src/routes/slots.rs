use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/slots/bulk", post(handlers::slot::bulk_create_slots))
        .route(
            "/api/slots/generate/:court_id",
            post(handlers::slot::generate_slots),
        )
        .route(
            "/api/slots/court/:court_id",
            get(handlers::slot::list_court_slots),
        )
}
