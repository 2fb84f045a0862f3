use crate::app_context::AppContext;
use crate::foodbanks::responses::{
    require_loaded, DataUnavailable, FoodBanksResponse, NetworksResponse,
};
use axum::extract::State;
use axum::response::Json;

#[axum::debug_handler]
pub async fn list(
    State(app_context): State<AppContext>,
) -> Result<Json<FoodBanksResponse>, DataUnavailable> {
    let entries = require_loaded(app_context.foodbanks.snapshot().await)?;
    Ok(Json(FoodBanksResponse {
        error: false,
        foodbanks: entries.iter().map(|entry| (*entry.record).clone()).collect(),
    }))
}

#[axum::debug_handler]
pub async fn networks(
    State(app_context): State<AppContext>,
) -> Result<Json<NetworksResponse>, DataUnavailable> {
    let entries = require_loaded(app_context.foodbanks.snapshot().await)?;
    Ok(Json(NetworksResponse {
        error: false,
        networks: crate::foodbanks::store::distinct_networks(&entries),
    }))
}
