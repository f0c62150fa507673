use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Magenta,
    Red,
    Volcano,
    Orange,
    Gold,
    Lime,
    Green,
    Cyan,
    Blue,
    Purple,
}

pub const PALETTE: [ColorTag; 10] = [
    ColorTag::Magenta,
    ColorTag::Red,
    ColorTag::Volcano,
    ColorTag::Orange,
    ColorTag::Gold,
    ColorTag::Lime,
    ColorTag::Green,
    ColorTag::Cyan,
    ColorTag::Blue,
    ColorTag::Purple,
];

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Stable,
    Random,
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stable" => Ok(ColorMode::Stable),
            "random" => Ok(ColorMode::Random),
            other => Err(format!("Unknown color mode: {}", other)),
        }
    }
}

/// Optional calendar-date window. Filtering only applies when both ends are set.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start: Some(start), end: Some(end) }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

/// One selectable occurrence, enriched for display.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ScheduleRow {
    pub session_id: String,
    pub inventory_id: String,
    pub session_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub color_tag: ColorTag,
}

/// Non-selectable header row for one local calendar date.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DateGroup {
    pub date: String,
    pub is_date_header: bool,
    pub children: Vec<ScheduleRow>,
}

impl DateGroup {
    pub fn new(date: String) -> Self {
        Self { date, is_date_header: true, children: Vec::new() }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct ScheduleTree {
    pub groups: Vec<DateGroup>,
}

impl ScheduleTree {
    pub fn inventory_ids(&self) -> BTreeSet<String> {
        self.groups
            .iter()
            .flat_map(|g| g.children.iter())
            .map(|row| row.inventory_id.clone())
            .collect()
    }

    pub fn row_count(&self) -> usize {
        self.groups.iter().map(|g| g.children.len()).sum()
    }
}
