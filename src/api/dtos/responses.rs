use serde::Serialize;
use crate::domain::models::schedule::DateGroup;

#[derive(Serialize)]
pub struct SchedulePreviewResponse {
    pub timezone: String,
    pub groups: Vec<DateGroup>,
    pub inventory_ids: Vec<String>,
    pub total_rows: usize,
}

#[derive(Serialize)]
pub struct SelectionResponse {
    pub inventory_ids: Vec<String>,
}

#[derive(Serialize)]
pub struct ReconcileResponse {
    pub inventory_ids: Vec<String>,
    pub dropped: Vec<String>,
}
