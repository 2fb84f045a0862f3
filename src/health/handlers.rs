use crate::app_context::AppContext;
use crate::foodbanks::store::LoadState;
use crate::health::responses::{DataStatus, HealthCheckResponse};
use axum::extract::State;
use axum::response::Json;

// The service stays up when loading fails; the data status says why the map is empty.
#[axum::debug_handler]
pub async fn healthcheck(State(app_context): State<AppContext>) -> Json<HealthCheckResponse> {
    let (data, foodbanks) = match app_context.foodbanks.snapshot().await {
        LoadState::Pending => (DataStatus::Pending, None),
        LoadState::Loaded(entries) => (DataStatus::Loaded, Some(entries.len())),
        LoadState::Failed(_) => (DataStatus::Failed, None),
    };
    Json(HealthCheckResponse {
        error: false,
        data,
        foodbanks,
    })
}
