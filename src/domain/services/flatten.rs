use std::collections::{HashMap, HashSet};
use chrono_tz::Tz;
use tracing::warn;
use crate::domain::models::schedule::{ColorTag, DateRange, ScheduleRow, PALETTE};
use crate::domain::models::session::Session;
use crate::domain::services::date_range::filter_occurrences;

/// Expands every selected session into one row per in-range occurrence.
/// Rows come out session-major, occurrence-minor.
pub fn flatten(
    selected: &[Session],
    range: &DateRange,
    colors: &HashMap<String, ColorTag>,
    tz: &Tz,
) -> Vec<ScheduleRow> {
    let mut rows = Vec::new();

    for session in selected {
        let color_tag = colors.get(&session.session_id).copied().unwrap_or(PALETTE[0]);
        let mut seen = HashSet::new();

        for occurrence in filter_occurrences(Some(session.inventory.as_slice()), range, tz) {
            if !occurrence.is_well_formed() {
                warn!(
                    "Skipping occurrence {} of session {}: end is not after start",
                    occurrence.inventory_id, session.session_id
                );
                continue;
            }
            if !seen.insert(occurrence.inventory_id.clone()) {
                continue;
            }

            rows.push(ScheduleRow {
                session_id: session.session_id.clone(),
                inventory_id: occurrence.inventory_id,
                session_name: session.name.clone(),
                start_time: occurrence.start_time,
                end_time: occurrence.end_time,
                color_tag,
            });
        }
    }

    rows
}
