use crate::app_context::AppContext;
use crate::filter::FilterCriteria;
use crate::foodbanks::responses::{require_loaded, DataUnavailable};
use crate::sessions::requests::FilterQueryParams;
use crate::sessions::responses::{
    CreateSessionResponse, FilterResponse, SessionError, SessionErrorResponse,
};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use uuid::Uuid;

#[axum::debug_handler]
pub async fn create(
    State(app_context): State<AppContext>,
) -> Result<Json<CreateSessionResponse>, DataUnavailable> {
    let entries = require_loaded(app_context.foodbanks.snapshot().await)?;
    let (session_id, view, markers) = app_context
        .sessions
        .create(app_context.map_view.clone(), &entries)
        .await;
    let open_sessions = app_context.sessions.len().await;
    tracing::info!(
        task = "session_created",
        session_id = %session_id,
        markers = markers.len(),
        open_sessions,
    );
    Ok(Json(CreateSessionResponse {
        error: false,
        session_id,
        view,
        markers,
    }))
}

#[axum::debug_handler]
pub async fn filter(
    Path(session_id): Path<Uuid>,
    Query(query_params): Query<FilterQueryParams>,
    State(app_context): State<AppContext>,
) -> Result<Json<FilterResponse>, (StatusCode, Json<SessionErrorResponse>)> {
    let criteria = FilterCriteria::new(&query_params.search, &query_params.network);
    let Some(outcome) = app_context.sessions.filter(session_id, &criteria).await else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(SessionErrorResponse {
                error: true,
                error_code: SessionError::SessionNotFound,
            }),
        ));
    };
    tracing::debug!(
        session_id = %session_id,
        unchanged = outcome.is_unchanged(),
        visible = outcome.visible,
        "Filtered markers."
    );
    Ok(Json(FilterResponse {
        error: false,
        attach: outcome.attached,
        detach: outcome.detached,
        visible: outcome.visible,
    }))
}
