use std::collections::BTreeMap;
use chrono::NaiveDate;
use chrono_tz::Tz;
use crate::domain::models::schedule::{DateGroup, ScheduleRow};

pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

pub fn date_key(row: &ScheduleRow, tz: &Tz) -> NaiveDate {
    row.start_time.with_timezone(tz).date_naive()
}

/// Buckets rows by the viewer's local calendar date of their start time.
/// Groups come back in ascending date order; rows keep their input order.
pub fn group(rows: Vec<ScheduleRow>, tz: &Tz) -> Vec<DateGroup> {
    let mut by_date: BTreeMap<NaiveDate, Vec<ScheduleRow>> = BTreeMap::new();

    for row in rows {
        by_date.entry(date_key(&row, tz)).or_default().push(row);
    }

    by_date
        .into_iter()
        .map(|(date, children)| {
            let mut group = DateGroup::new(date.format(DATE_KEY_FORMAT).to_string());
            group.children = children;
            group
        })
        .collect()
}
