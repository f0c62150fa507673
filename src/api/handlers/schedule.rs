use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{ReconcileRequest, SchedulePreviewRequest},
    responses::{ReconcileResponse, SchedulePreviewResponse, SelectionResponse},
};
use crate::domain::models::schedule::ScheduleTree;
use crate::domain::services::schedule::{parse_timezone, ScheduleRequest};
use crate::domain::services::selection::SelectionController;
use crate::error::AppError;
use std::collections::BTreeSet;
use std::sync::Arc;
use chrono_tz::Tz;
use tracing::info;

async fn compute_tree(
    state: &AppState,
    creator_id: &str,
    payload: &SchedulePreviewRequest,
) -> Result<(Tz, ScheduleTree), AppError> {
    let timezone = parse_timezone(payload.timezone.as_deref(), state.config.default_timezone)?;
    let sessions = state.session_source.list_by_creator(creator_id).await?;

    let request = ScheduleRequest {
        selected_session_ids: payload.session_ids.clone(),
        range: payload.range(),
        timezone,
        color_mode: state.config.color_mode,
    };

    Ok((timezone, state.schedule_engine.schedule(&sessions, &request)))
}

pub async fn preview_schedule(
    State(state): State<Arc<AppState>>,
    Path(creator_id): Path<String>,
    Json(payload): Json<SchedulePreviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (timezone, tree) = compute_tree(&state, &creator_id, &payload).await?;

    info!(
        "Built schedule for creator {}: {} dates, {} occurrences",
        creator_id, tree.groups.len(), tree.row_count()
    );

    let total_rows = tree.row_count();
    Ok(Json(SchedulePreviewResponse {
        timezone: timezone.name().to_string(),
        inventory_ids: tree.inventory_ids().into_iter().collect(),
        groups: tree.groups,
        total_rows,
    }))
}

pub async fn select_all(
    State(state): State<Arc<AppState>>,
    Path(creator_id): Path<String>,
    Json(payload): Json<SchedulePreviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (_, tree) = compute_tree(&state, &creator_id, &payload).await?;

    let mut controller = SelectionController::new();
    let selected = controller.select_all(&tree);

    Ok(Json(SelectionResponse { inventory_ids: selected.into_iter().collect() }))
}

pub async fn reconcile_selection(
    State(state): State<Arc<AppState>>,
    Path(creator_id): Path<String>,
    Json(payload): Json<ReconcileRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (_, tree) = compute_tree(&state, &creator_id, &payload.schedule).await?;

    let requested: BTreeSet<String> = payload.inventory_ids.into_iter().collect();
    let kept = SelectionController::reconcile(&tree.inventory_ids(), &requested);
    let dropped: Vec<String> = requested.difference(&kept).cloned().collect();

    if !dropped.is_empty() {
        info!("Reconcile dropped {} stale selections for creator {}", dropped.len(), creator_id);
    }

    Ok(Json(ReconcileResponse {
        inventory_ids: kept.into_iter().collect(),
        dropped,
    }))
}
