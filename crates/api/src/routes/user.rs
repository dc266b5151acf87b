use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/users", post(handlers::user::create_user))
        .route("/sessions", post(handlers::user::create_session))
        .route(
            "/profile",
            get(handlers::user::show_profile).put(handlers::user::update_profile),
        )
}
