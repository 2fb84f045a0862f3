use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    pub error: bool,
    pub data: DataStatus,
    /// Number of food banks on the map, once loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foodbanks: Option<usize>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataStatus {
    Pending,
    Loaded,
    Failed,
}
