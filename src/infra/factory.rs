use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::services::schedule::ScheduleEngine;
use crate::infra::http::{
    http_course_gateway::HttpCourseGateway, http_session_source::HttpSessionSource,
};

pub fn bootstrap_state(config: &Config) -> AppState {
    info!("Sessions API: {}", config.sessions_api_url);
    info!("Courses API: {}", config.courses_api_url);
    info!("Default timezone: {}, colour mode: {:?}", config.default_timezone, config.color_mode);

    AppState {
        config: config.clone(),
        session_source: Arc::new(HttpSessionSource::new(
            config.sessions_api_url.clone(),
            config.api_token.clone(),
        )),
        course_gateway: Arc::new(HttpCourseGateway::new(
            config.courses_api_url.clone(),
            config.api_token.clone(),
        )),
        schedule_engine: Arc::new(ScheduleEngine::new()),
    }
}
