use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::warn;
use crate::domain::models::schedule::DateRange;
use crate::domain::models::session::Occurrence;

// Upper bound on the DST gap search, in minutes.
const MAX_GAP_STEPS: i64 = 24 * 60;

/// Resolves a wall-clock time in `tz`. Times inside a DST gap move to the
/// nearest instant that exists on the same local day: forward for the start
/// of a day, backward for its end.
fn resolve_local(tz: &Tz, naive: NaiveDateTime, prefer_latest: bool) -> DateTime<Utc> {
    let step = if prefer_latest { Duration::minutes(-1) } else { Duration::minutes(1) };
    let mut candidate = naive;

    for _ in 0..MAX_GAP_STEPS {
        let local = tz.from_local_datetime(&candidate);
        let resolved = if prefer_latest { local.latest() } else { local.earliest() };
        if let Some(dt) = resolved {
            return dt.with_timezone(&Utc);
        }
        candidate += step;
    }

    warn!("No valid local time near {} in {}", naive, tz.name());
    Utc.from_utc_datetime(&naive)
}

pub fn start_of_day(date: NaiveDate, tz: &Tz) -> DateTime<Utc> {
    resolve_local(tz, date.and_time(NaiveTime::MIN), false)
}

pub fn end_of_day(date: NaiveDate, tz: &Tz) -> DateTime<Utc> {
    let last_ms = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    resolve_local(tz, date.and_time(last_ms), true)
}

/// Keeps the occurrences that fall entirely inside `range`, with both ends
/// inclusive. When either bound is missing nothing is filtered.
pub fn filter_occurrences(occurrences: Option<&[Occurrence]>, range: &DateRange, tz: &Tz) -> Vec<Occurrence> {
    let Some(occurrences) = occurrences else {
        return Vec::new();
    };

    let Some((start, end)) = range.bounds() else {
        return occurrences.to_vec();
    };

    let window_start = start_of_day(start, tz);
    let window_end = end_of_day(end, tz);

    occurrences
        .iter()
        .filter(|o| o.start_time >= window_start && o.end_time <= window_end)
        .cloned()
        .collect()
}
