use crate::app_context::AppContext;
use crate::cli::Args;
use crate::{foodbanks, health, http::cors, page, sessions};
use axum::{
    routing::{get, post},
    Router,
};

pub fn new(args: &Args, app_context: AppContext) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let foodbanks_routes = Router::new()
        .route("/", get(foodbanks::handlers::list))
        .route("/networks", get(foodbanks::handlers::networks));
    let sessions_routes = Router::new()
        .route("/", post(sessions::handlers::create))
        .route("/:session-id/filter", get(sessions::handlers::filter));

    Router::new()
        .route("/", get(page::handlers::index))
        .nest("/health", health_routes)
        .nest("/foodbanks", foodbanks_routes)
        .nest("/sessions", sessions_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(crate::http::middleware::tracing))
}
