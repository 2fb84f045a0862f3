use crate::foodbanks::models::FoodBankRecord;
use crate::foodbanks::store::LoadState;
use crate::map::renderer::MapEntry;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Why the dataset can't be served yet.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataUnavailableError {
    Loading,
    LoadFailed,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataUnavailableResponse {
    pub error: bool,
    pub error_code: DataUnavailableError,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

pub type DataUnavailable = (StatusCode, Json<DataUnavailableResponse>);

/// Returns the loaded entries, or the error response for a pending or failed
/// load.
pub fn require_loaded(state: LoadState) -> Result<Arc<[MapEntry]>, DataUnavailable> {
    let (error_code, reason) = match state {
        LoadState::Loaded(entries) => return Ok(entries),
        LoadState::Pending => (DataUnavailableError::Loading, None),
        LoadState::Failed(reason) => (DataUnavailableError::LoadFailed, Some(reason)),
    };
    Err((
        StatusCode::SERVICE_UNAVAILABLE,
        Json(DataUnavailableResponse {
            error: true,
            error_code,
            reason,
        }),
    ))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodBanksResponse {
    pub error: bool,
    pub foodbanks: Vec<FoodBankRecord>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworksResponse {
    pub error: bool,
    pub networks: Vec<String>,
}
