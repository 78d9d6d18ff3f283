use std::sync::Arc;

use chrono::Duration;

use campus_core::model::{
    AccessLog, Course, CourseId, ForumTopic, Lesson, LessonId, ListQuery, Page, SerialKey,
    SerialKeyStatus, listing,
};

use super::api::CatalogApi;
use crate::Clock;
use crate::error::{CatalogApiError, CatalogServiceError};

pub const RECENT_ACCESS_WINDOW_DAYS: i64 = 7;

/// A lesson together with the course it belongs to and its auto-advance target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonContext {
    pub course: Course,
    pub lesson: Lesson,
    pub next: Option<Lesson>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdminOverview {
    pub total_keys: usize,
    pub available_keys: usize,
    pub redeemed_keys: usize,
    pub recent_accesses: usize,
}

#[derive(Clone)]
pub struct CatalogService {
    clock: Clock,
    api: Arc<dyn CatalogApi>,
}

impl CatalogService {
    #[must_use]
    pub fn new(clock: Clock, api: Arc<dyn CatalogApi>) -> Self {
        Self { clock, api }
    }

    /// One page of the course catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Api` if the backend call fails.
    pub async fn courses(&self, query: &ListQuery) -> Result<Page<Course>, CatalogServiceError> {
        let courses = self.api.list_courses().await?;
        Ok(listing::paginate(&courses, query))
    }

    /// # Errors
    ///
    /// Returns `CatalogServiceError::CourseNotFound` if the backend has no such course.
    pub async fn course(&self, id: CourseId) -> Result<Course, CatalogServiceError> {
        self.api.get_course(id).await.map_err(|err| match err {
            CatalogApiError::NotFound => CatalogServiceError::CourseNotFound(id),
            other => other.into(),
        })
    }

    /// Resolve a lesson and the lesson that follows it.
    ///
    /// # Errors
    ///
    /// Returns `CourseNotFound` or `LessonNotFound` for unknown ids, or `Api` on backend failure.
    pub async fn lesson(
        &self,
        course_id: CourseId,
        lesson_id: LessonId,
    ) -> Result<LessonContext, CatalogServiceError> {
        let course = self.course(course_id).await?;
        let lesson = course
            .lesson(lesson_id)
            .cloned()
            .ok_or(CatalogServiceError::LessonNotFound {
                course: course_id,
                lesson: lesson_id,
            })?;
        let next = course.next_lesson(lesson_id).cloned();
        Ok(LessonContext {
            course,
            lesson,
            next,
        })
    }

    /// Forum topics, newest first.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Api` if the backend call fails.
    pub async fn forum_topics(
        &self,
        query: &ListQuery,
    ) -> Result<Page<ForumTopic>, CatalogServiceError> {
        let mut topics = self.api.list_forum_topics().await?;
        topics.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listing::paginate(&topics, query))
    }

    /// Serial keys, optionally narrowed to one status.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Api` if the backend call fails.
    pub async fn serial_keys(
        &self,
        query: &ListQuery,
        status: Option<SerialKeyStatus>,
    ) -> Result<Page<SerialKey>, CatalogServiceError> {
        let keys = self.api.list_serial_keys().await?;
        Ok(listing::paginate_by(&keys, query, |key| {
            status.is_none_or(|wanted| key.status == wanted)
        }))
    }

    /// Access log entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Api` if the backend call fails.
    pub async fn access_logs(
        &self,
        query: &ListQuery,
    ) -> Result<Page<AccessLog>, CatalogServiceError> {
        let mut logs = self.api.list_access_logs().await?;
        logs.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
        Ok(listing::paginate(&logs, query))
    }

    /// Counters for the admin dashboard header.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Api` if either backend call fails.
    pub async fn admin_overview(&self) -> Result<AdminOverview, CatalogServiceError> {
        let keys = self.api.list_serial_keys().await?;
        let logs = self.api.list_access_logs().await?;
        let now = self.clock.now();
        let window = Duration::days(RECENT_ACCESS_WINDOW_DAYS);

        let count = |status| keys.iter().filter(|key| key.status == status).count();
        Ok(AdminOverview {
            total_keys: keys.len(),
            available_keys: count(SerialKeyStatus::Available),
            redeemed_keys: count(SerialKeyStatus::Redeemed),
            recent_accesses: logs.iter().filter(|log| log.is_recent(now, window)).count(),
        })
    }
}
