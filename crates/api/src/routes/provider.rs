use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/providers", get(handlers::user::list_providers))
        .route(
            "/providers/:provider_id/day-availability",
            get(handlers::availability::day_availability),
        )
        .route(
            "/providers/:provider_id/month-availability",
            get(handlers::availability::month_availability),
        )
        .route(
            "/providers/:provider_id/appointments",
            get(handlers::appointment::list_provider_appointments),
        )
}
