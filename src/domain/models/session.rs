use serde::{Deserialize, Deserializer, Serialize};
use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::debug;

/// A single scheduled instance of a session.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub inventory_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl Occurrence {
    pub fn new(inventory_id: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            inventory_id: inventory_id.into(),
            start_time: start,
            end_time: end,
        }
    }

    pub fn is_well_formed(&self) -> bool {
        self.end_time > self.start_time
    }
}

/// A creator-defined recurring class offering, as returned by the sessions API.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Session {
    pub session_id: String,
    pub name: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_course: bool,
    #[serde(default)]
    pub max_participants: i32,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(default, deserialize_with = "lenient_inventory")]
    pub inventory: Vec<Occurrence>,
}

impl Session {
    pub fn new(session_id: impl Into<String>, name: impl Into<String>, inventory: Vec<Occurrence>) -> Self {
        Self {
            session_id: session_id.into(),
            name: name.into(),
            is_active: true,
            is_course: false,
            max_participants: 0,
            price: 0.0,
            currency: String::new(),
            inventory,
        }
    }
}

// Missing, null or non-array inventory is treated as no occurrences.
// Entries that fail to parse are dropped individually.
fn lenient_inventory<'de, D>(deserializer: D) -> Result<Vec<Occurrence>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(items)) = raw else {
        return Ok(Vec::new());
    };

    let total = items.len();
    let parsed: Vec<Occurrence> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();

    if parsed.len() < total {
        debug!("Dropped {} malformed inventory entries", total - parsed.len());
    }
    Ok(parsed)
}
