use crate::map::models::{MapView, MarkerId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A marker as the browser needs it to draw the initial map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMarker {
    pub id: MarkerId,
    pub lat: f64,
    pub lng: f64,
    pub popup: String,
    pub visible: bool,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub error: bool,
    pub session_id: Uuid,
    pub view: MapView,
    pub markers: Vec<SessionMarker>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterResponse {
    pub error: bool,
    /// Markers the page must add back to the map.
    pub attach: Vec<MarkerId>,
    /// Markers the page must take off the map.
    pub detach: Vec<MarkerId>,
    pub visible: usize,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionError {
    SessionNotFound,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionErrorResponse {
    pub error: bool,
    pub error_code: SessionError,
}
