use std::collections::BTreeSet;
use std::sync::Arc;
use chrono_tz::Tz;
use tracing::{info, warn};
use crate::domain::models::course::{CourseDraft, CoursePayload, CourseRecord};
use crate::domain::models::schedule::{ColorMode, DateRange};
use crate::domain::ports::{CourseGateway, SessionSource};
use crate::domain::services::schedule::{parse_timezone, ScheduleEngine, ScheduleRequest};
use crate::domain::services::selection::SelectionController;
use crate::error::AppError;

pub const EMPTY_SELECTION_MESSAGE: &str = "select at least one schedule";

pub struct CourseService {
    sessions: Arc<dyn SessionSource>,
    courses: Arc<dyn CourseGateway>,
    engine: Arc<ScheduleEngine>,
    color_mode: ColorMode,
    default_timezone: Tz,
}

impl CourseService {
    pub fn new(
        sessions: Arc<dyn SessionSource>,
        courses: Arc<dyn CourseGateway>,
        engine: Arc<ScheduleEngine>,
        color_mode: ColorMode,
        default_timezone: Tz,
    ) -> Self {
        Self { sessions, courses, engine, color_mode, default_timezone }
    }

    /// Validates the draft, rebuilds its schedule and drops any selected
    /// inventory that is no longer part of it.
    pub async fn prepare(&self, creator_id: &str, draft: &CourseDraft) -> Result<CoursePayload, AppError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Course name is required".into()));
        }
        if draft.end_date < draft.start_date {
            return Err(AppError::Validation("End date must be after start date".into()));
        }
        if draft.session_ids.is_empty() {
            return Err(AppError::Validation("Select at least one session".into()));
        }

        let timezone = parse_timezone(draft.timezone.as_deref(), self.default_timezone)?;
        let sessions = self.sessions.list_by_creator(creator_id).await?;

        if let Some(unknown) = draft.session_ids.iter().find(|id| !sessions.iter().any(|s| &s.session_id == *id)) {
            return Err(AppError::Validation(format!("Unknown session: {}", unknown)));
        }

        let request = ScheduleRequest {
            selected_session_ids: draft.session_ids.clone(),
            range: DateRange::new(draft.start_date, draft.end_date),
            timezone,
            color_mode: self.color_mode,
        };
        let tree = self.engine.schedule(&sessions, &request);

        let requested: BTreeSet<String> = draft.inventory_ids.iter().cloned().collect();
        let inventory_ids = SelectionController::reconcile(&tree.inventory_ids(), &requested);

        if inventory_ids.len() < requested.len() {
            warn!(
                "Dropped {} stale inventory selections for creator {}",
                requested.len() - inventory_ids.len(),
                creator_id
            );
        }
        if inventory_ids.is_empty() {
            return Err(AppError::Validation(EMPTY_SELECTION_MESSAGE.into()));
        }

        let mut session_ids: Vec<String> = Vec::with_capacity(draft.session_ids.len());
        for id in &draft.session_ids {
            if !session_ids.contains(id) {
                session_ids.push(id.clone());
            }
        }

        Ok(CoursePayload {
            name: name.to_string(),
            description: draft.description.clone(),
            start_date: draft.start_date,
            end_date: draft.end_date,
            session_ids,
            inventory_ids: inventory_ids.into_iter().collect(),
            max_participants: draft.max_participants,
            price: draft.price,
            currency: draft.currency.clone(),
        })
    }

    pub async fn create(&self, creator_id: &str, draft: &CourseDraft) -> Result<CourseRecord, AppError> {
        let payload = self.prepare(creator_id, draft).await?;
        let record = self.courses.create(creator_id, &payload).await?;
        info!(
            "Created course {} for creator {} with {} occurrences",
            record.course_id, creator_id, payload.inventory_ids.len()
        );
        Ok(record)
    }

    pub async fn update(&self, creator_id: &str, course_id: &str, draft: &CourseDraft) -> Result<CourseRecord, AppError> {
        let payload = self.prepare(creator_id, draft).await?;
        let record = self.courses.update(creator_id, course_id, &payload).await?;
        info!(
            "Updated course {} for creator {} with {} occurrences",
            course_id, creator_id, payload.inventory_ids.len()
        );
        Ok(record)
    }
}
