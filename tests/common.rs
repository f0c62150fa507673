use course_builder::{
    api::router::create_router,
    config::Config,
    domain::models::{
        course::{CoursePayload, CourseRecord},
        schedule::ColorMode,
        session::{Occurrence, Session},
    },
    domain::ports::{CourseGateway, SessionSource},
    domain::services::schedule::ScheduleEngine,
    error::AppError,
    state::AppState,
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, Method},
    response::Response,
    Router,
};
use chrono::{TimeZone, Utc};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const CREATOR: &str = "creator-1";

#[derive(Default)]
pub struct MockSessionSource {
    pub sessions: Mutex<HashMap<String, Vec<Session>>>,
}

#[async_trait]
impl SessionSource for MockSessionSource {
    async fn list_by_creator(&self, creator_id: &str) -> Result<Vec<Session>, AppError> {
        self.sessions
            .lock()
            .unwrap()
            .get(creator_id)
            .cloned()
            .ok_or(AppError::NotFound("Creator not found".into()))
    }
}

#[derive(Debug, Clone)]
pub struct SentCourse {
    pub course_id: Option<String>,
    pub payload: CoursePayload,
}

#[derive(Default)]
pub struct MockCourseGateway {
    pub sent: Mutex<Vec<SentCourse>>,
}

fn record(course_id: &str) -> CourseRecord {
    CourseRecord {
        course_id: course_id.to_string(),
        extra: serde_json::Map::new(),
    }
}

#[async_trait]
impl CourseGateway for MockCourseGateway {
    async fn create(&self, _creator_id: &str, payload: &CoursePayload) -> Result<CourseRecord, AppError> {
        self.sent.lock().unwrap().push(SentCourse { course_id: None, payload: payload.clone() });
        Ok(record("course-new"))
    }

    async fn update(&self, _creator_id: &str, course_id: &str, payload: &CoursePayload) -> Result<CourseRecord, AppError> {
        self.sent.lock().unwrap().push(SentCourse { course_id: Some(course_id.to_string()), payload: payload.clone() });
        Ok(record(course_id))
    }
}

pub fn occurrence(id: &str, day: u32, start_hour: u32, end_hour: u32) -> Occurrence {
    Occurrence::new(
        id,
        Utc.with_ymd_and_hms(2024, 4, day, start_hour, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 4, day, end_hour, 0, 0).unwrap(),
    )
}

/// S1 runs on the 1st and 3rd of April 09:00-10:00, S2 on the 1st 14:00-15:00,
/// S3 is a course-only unpublished session on the 2nd.
pub fn default_sessions() -> Vec<Session> {
    let mut s3 = Session::new("S3", "Private Cohort", vec![occurrence("s3-a", 2, 18, 19)]);
    s3.is_course = true;
    s3.is_active = false;

    vec![
        Session::new("S1", "Morning Flow", vec![occurrence("s1-a", 1, 9, 10), occurrence("s1-b", 3, 9, 10)]),
        Session::new("S2", "Afternoon Core", vec![occurrence("s2-a", 1, 14, 15)]),
        s3,
    ]
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub sessions: Arc<MockSessionSource>,
    pub courses: Arc<MockCourseGateway>,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub fn new() -> Self {
        let sessions = Arc::new(MockSessionSource::default());
        sessions.sessions.lock().unwrap().insert(CREATOR.to_string(), default_sessions());
        let courses = Arc::new(MockCourseGateway::default());

        let config = Config {
            port: 0,
            sessions_api_url: "http://localhost".to_string(),
            courses_api_url: "http://localhost".to_string(),
            api_token: "token".to_string(),
            default_timezone: chrono_tz::UTC,
            color_mode: ColorMode::Stable,
        };

        let state = Arc::new(AppState {
            config,
            session_source: sessions.clone(),
            course_gateway: courses.clone(),
            schedule_engine: Arc::new(ScheduleEngine::new()),
        });

        let router = create_router(state.clone());

        Self { router, sessions, courses, state }
    }

    pub fn set_sessions(&self, creator_id: &str, list: Vec<Session>) {
        self.sessions.lock_insert(creator_id, list);
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub fn sent_courses(&self) -> Vec<SentCourse> {
        self.courses.sent.lock().unwrap().clone()
    }
}

#[allow(dead_code)]
impl MockSessionSource {
    pub fn lock_insert(&self, creator_id: &str, list: Vec<Session>) {
        self.sessions.lock().unwrap().insert(creator_id.to_string(), list);
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
