use crate::domain::models::course::{CoursePayload, CourseRecord};
use crate::domain::ports::CourseGateway;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use tracing::error;

pub struct HttpCourseGateway {
    client: Client,
    api_url: String,
    api_key: String,
}

impl HttpCourseGateway {
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    async fn send(&self, request: RequestBuilder, payload: &CoursePayload) -> Result<CourseRecord, AppError> {
        let res = request
            .bearer_auth(&self.api_key)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                let msg = format!("Course API connection error: {}", e);
                error!("{}", msg);
                AppError::Upstream(msg)
            })?;

        match res.status() {
            StatusCode::NOT_FOUND => return Err(AppError::NotFound("Course not found".into())),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let text = res.text().await.unwrap_or_default();
                return Err(AppError::Validation(format!("Course rejected: {}", text)));
            }
            status if !status.is_success() => {
                let text = res.text().await.unwrap_or_default();
                let msg = format!("Course API failed. Status: {}, Body: {}", status, text);
                error!("{}", msg);
                return Err(AppError::Upstream(msg));
            }
            _ => {}
        }

        res.json::<CourseRecord>().await.map_err(|e| {
            let msg = format!("Course API returned an unreadable body: {}", e);
            error!("{}", msg);
            AppError::Upstream(msg)
        })
    }
}

#[async_trait]
impl CourseGateway for HttpCourseGateway {
    async fn create(&self, creator_id: &str, payload: &CoursePayload) -> Result<CourseRecord, AppError> {
        let url = format!("{}/creators/{}/courses", self.api_url, creator_id);
        self.send(self.client.post(&url), payload).await
    }

    async fn update(&self, creator_id: &str, course_id: &str, payload: &CoursePayload) -> Result<CourseRecord, AppError> {
        let url = format!("{}/creators/{}/courses/{}", self.api_url, creator_id, course_id);
        self.send(self.client.put(&url), payload).await
    }
}
