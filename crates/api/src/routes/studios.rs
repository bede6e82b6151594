use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/studios", get(handlers::studios::list_studios))
        .route("/api/studios/locations", get(handlers::studios::list_locations))
        .route("/api/studios/:id", get(handlers::studios::get_studio))
        .route("/api/studios/:id/slots", get(handlers::studios::get_studio_slots))
}
