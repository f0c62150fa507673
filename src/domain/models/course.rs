use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What the creator filled in on the course form.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CourseDraft {
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub session_ids: Vec<String>,
    #[serde(default)]
    pub inventory_ids: Vec<String>,
    pub timezone: Option<String>,
    pub max_participants: Option<i32>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub currency: String,
}

/// Body forwarded to the course API once the selection has been reconciled.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CoursePayload {
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub session_ids: Vec<String>,
    pub inventory_ids: Vec<String>,
    pub max_participants: Option<i32>,
    pub price: f64,
    pub currency: String,
}

/// Whatever the course API returned, plus the id we rely on.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CourseRecord {
    pub course_id: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}
