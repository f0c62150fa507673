use std::sync::Arc;
use crate::domain::ports::{CourseGateway, SessionSource};
use crate::domain::services::schedule::ScheduleEngine;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub session_source: Arc<dyn SessionSource>,
    pub course_gateway: Arc<dyn CourseGateway>,
    pub schedule_engine: Arc<ScheduleEngine>,
}
