use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, session, schedule, course};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Sessions
        .route("/api/v1/creators/{creator_id}/sessions", get(session::list_sessions))

        // Schedule builder
        .route("/api/v1/creators/{creator_id}/schedule/preview", post(schedule::preview_schedule))
        .route("/api/v1/creators/{creator_id}/schedule/select-all", post(schedule::select_all))
        .route("/api/v1/creators/{creator_id}/schedule/reconcile", post(schedule::reconcile_selection))

        // Courses
        .route("/api/v1/creators/{creator_id}/courses", post(course::create_course))
        .route("/api/v1/creators/{creator_id}/courses/{course_id}", put(course::update_course))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
