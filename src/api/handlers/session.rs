use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::ListSessionsQuery;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_sessions(
    State(state): State<Arc<AppState>>,
    Path(creator_id): Path<String>,
    Query(query): Query<ListSessionsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let mut sessions = state.session_source.list_by_creator(&creator_id).await?;

    if query.course_only.unwrap_or(false) {
        sessions.retain(|s| s.is_course);
    }
    if query.active_only.unwrap_or(false) {
        sessions.retain(|s| s.is_active);
    }

    info!("Listed {} sessions for creator {}", sessions.len(), creator_id);
    Ok(Json(sessions))
}
