use std::sync::Mutex;
use chrono_tz::Tz;
use sha2::{Digest, Sha256};
use tracing::debug;
use crate::domain::models::schedule::{ColorMode, DateRange, ScheduleTree};
use crate::domain::models::session::Session;
use crate::domain::services::colors::{assign_colors, ColorPass};
use crate::domain::services::flatten::flatten;
use crate::domain::services::grouping::group;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRequest {
    pub selected_session_ids: Vec<String>,
    pub range: DateRange,
    pub timezone: Tz,
    pub color_mode: ColorMode,
}

/// Resolves the viewer's zone, falling back to `default` when none was sent.
pub fn parse_timezone(raw: Option<&str>, default: Tz) -> Result<Tz, AppError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(name) => name.parse::<Tz>().map_err(|_| AppError::Validation("Invalid timezone".into())),
        None => Ok(default),
    }
}

/// Picks the selected sessions in the order they were selected. Ids with no
/// matching session are ignored.
pub fn select_sessions<'a>(sessions: &'a [Session], selected_ids: &[String]) -> Vec<&'a Session> {
    let mut picked: Vec<&Session> = Vec::with_capacity(selected_ids.len());
    for id in selected_ids {
        if picked.iter().any(|s| &s.session_id == id) {
            continue;
        }
        if let Some(session) = sessions.iter().find(|s| &s.session_id == id) {
            picked.push(session);
        }
    }
    picked
}

/// Runs the whole pipeline: colours, flatten, group.
pub fn build_schedule(sessions: &[Session], request: &ScheduleRequest) -> ScheduleTree {
    let selected: Vec<Session> = select_sessions(sessions, &request.selected_session_ids)
        .into_iter()
        .cloned()
        .collect();

    let mut pass = ColorPass::new();
    let colors = assign_colors(&selected, request.color_mode, &mut pass);
    let rows = flatten(&selected, &request.range, &colors, &request.timezone);

    ScheduleTree { groups: group(rows, &request.timezone) }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CacheKey {
    request: ScheduleRequest,
    fingerprint: [u8; 32],
}

fn fingerprint(sessions: &[&Session]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for session in sessions {
        hash_field(&mut hasher, &session.session_id);
        hash_field(&mut hasher, &session.name);
        hasher.update((session.inventory.len() as u64).to_be_bytes());
        for occ in &session.inventory {
            hash_field(&mut hasher, &occ.inventory_id);
            hasher.update(occ.start_time.timestamp_millis().to_be_bytes());
            hasher.update(occ.end_time.timestamp_millis().to_be_bytes());
        }
    }
    hasher.finalize().into()
}

fn hash_field(hasher: &mut Sha256, value: &str) {
    hasher.update((value.len() as u64).to_be_bytes());
    hasher.update(value.as_bytes());
}

/// Memoizes the most recent schedule so identical requests skip recomputation.
#[derive(Default)]
pub struct ScheduleEngine {
    last: Mutex<Option<(CacheKey, ScheduleTree)>>,
}

impl ScheduleEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&self, sessions: &[Session], request: &ScheduleRequest) -> ScheduleTree {
        let key = CacheKey {
            request: request.clone(),
            fingerprint: fingerprint(&select_sessions(sessions, &request.selected_session_ids)),
        };

        // The lock is only held to read or replace the entry, never while building.
        {
            let last = self.last.lock().unwrap_or_else(|e| e.into_inner());
            if let Some((cached_key, tree)) = last.as_ref()
                && *cached_key == key {
                debug!("Schedule cache hit");
                return tree.clone();
            }
        }

        let tree = build_schedule(sessions, request);
        *self.last.lock().unwrap_or_else(|e| e.into_inner()) = Some((key, tree.clone()));
        tree
    }
}
