//! # Barbershop API
//!
//! The API crate provides the web server for the barbershop booking service.
//! It defines RESTful endpoints for signing up and in, browsing providers,
//! reading their availability and booking appointments.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Provide cross-cutting concerns like password hashing and error handling
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework and SQLx for database interactions.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for password hashing and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::Router;
use barbershop_core::availability::{
    AppointmentQuery, AvailabilityCalculator, Clock, SystemClock,
};
use barbershop_db::query::PgAppointmentQuery;
use eyre::{Result, WrapErr};
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// # Example
///
/// ```no_run
/// # async fn example(db_pool: sqlx::PgPool) {
/// use std::sync::Arc;
/// use barbershop_api::ApiState;
///
/// let state = Arc::new(ApiState::new(db_pool));
/// let app = barbershop_api::router(state);
/// # }
/// ```
pub struct ApiState {
    /// PostgreSQL connection pool for database operations
    pub db_pool: PgPool,
    /// Appointment source for availability computation
    pub appointments: Arc<dyn AppointmentQuery>,
    /// Current local time
    pub clock: Arc<dyn Clock>,
}

impl ApiState {
    /// State backed by PostgreSQL and the system clock
    pub fn new(db_pool: PgPool) -> Self {
        Self {
            appointments: Arc::new(PgAppointmentQuery::new(db_pool.clone())),
            clock: Arc::new(SystemClock),
            db_pool,
        }
    }

    pub fn availability(&self) -> AvailabilityCalculator {
        AvailabilityCalculator::new(self.appointments.clone(), self.clock.clone())
    }
}

/// Builds the application router with all routes attached to `state`
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Sign up and sign in
        .merge(routes::user::routes())
        // Provider listing, availability and schedules
        .merge(routes::provider::routes())
        // Booking
        .merge(routes::appointment::routes())
        .with_state(state)
}

/// Starts the API server with the provided configuration and database connection
///
/// Installs the tracing subscriber, builds the router with CORS, request
/// tracing and timeout layers, and serves until the listener fails.
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(db_pool));
    let app = router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| origin.parse::<axum::http::HeaderValue>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .wrap_err("Invalid API_CORS_ORIGINS value")?;

        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request tracing and timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
