use crate::domain::models::{
    course::{CoursePayload, CourseRecord},
    session::Session,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait SessionSource: Send + Sync {
    async fn list_by_creator(&self, creator_id: &str) -> Result<Vec<Session>, AppError>;
}

#[async_trait]
pub trait CourseGateway: Send + Sync {
    async fn create(&self, creator_id: &str, payload: &CoursePayload) -> Result<CourseRecord, AppError>;
    async fn update(&self, creator_id: &str, course_id: &str, payload: &CoursePayload) -> Result<CourseRecord, AppError>;
}
