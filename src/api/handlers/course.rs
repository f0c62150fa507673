use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::domain::models::course::CourseDraft;
use crate::domain::services::course_service::CourseService;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

fn course_service(state: &AppState) -> CourseService {
    CourseService::new(
        state.session_source.clone(),
        state.course_gateway.clone(),
        state.schedule_engine.clone(),
        state.config.color_mode,
        state.config.default_timezone,
    )
}

pub async fn create_course(
    State(state): State<Arc<AppState>>,
    Path(creator_id): Path<String>,
    Json(payload): Json<CourseDraft>,
) -> Result<impl IntoResponse, AppError> {
    info!("Creating course '{}' for creator {}", payload.name, creator_id);

    let record = course_service(&state).create(&creator_id, &payload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn update_course(
    State(state): State<Arc<AppState>>,
    Path((creator_id, course_id)): Path<(String, String)>,
    Json(payload): Json<CourseDraft>,
) -> Result<impl IntoResponse, AppError> {
    info!("Updating course {} for creator {}", course_id, creator_id);

    let record = course_service(&state).update(&creator_id, &course_id, &payload).await?;
    Ok(Json(record))
}
