use crate::domain::models::session::Session;
use crate::domain::ports::SessionSource;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, error};

pub struct HttpSessionSource {
    client: Client,
    api_url: String,
    api_key: String,
}

impl HttpSessionSource {
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl SessionSource for HttpSessionSource {
    async fn list_by_creator(&self, creator_id: &str) -> Result<Vec<Session>, AppError> {
        let url = format!("{}/creators/{}/sessions", self.api_url, creator_id);

        let res = self.client.get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| {
                let msg = format!("Sessions API connection error: {}", e);
                error!("{}", msg);
                AppError::Upstream(msg)
            })?;

        if res.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound("Creator not found".into()));
        }

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            let msg = format!("Sessions API failed. Status: {}, Body: {}", status, text);
            error!("{}", msg);
            return Err(AppError::Upstream(msg));
        }

        let sessions: Vec<Session> = res.json().await.map_err(|e| {
            let msg = format!("Sessions API returned an unreadable body: {}", e);
            error!("{}", msg);
            AppError::Upstream(msg)
        })?;

        debug!("Fetched {} sessions for creator {}", sessions.len(), creator_id);
        Ok(sessions)
    }
}
