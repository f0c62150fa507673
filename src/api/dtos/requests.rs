use chrono::NaiveDate;
use serde::Deserialize;
use crate::domain::models::schedule::DateRange;

#[derive(Deserialize)]
pub struct ListSessionsQuery {
    pub course_only: Option<bool>,
    pub active_only: Option<bool>,
}

#[derive(Deserialize)]
pub struct SchedulePreviewRequest {
    pub session_ids: Vec<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub timezone: Option<String>,
}

impl SchedulePreviewRequest {
    pub fn range(&self) -> DateRange {
        DateRange { start: self.start_date, end: self.end_date }
    }
}

#[derive(Deserialize)]
pub struct ReconcileRequest {
    #[serde(flatten)]
    pub schedule: SchedulePreviewRequest,
    #[serde(default)]
    pub inventory_ids: Vec<String>,
}
