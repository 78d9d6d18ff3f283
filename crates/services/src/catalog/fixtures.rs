use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use campus_core::model::{
    AccessLog, Course, CourseId, ForumTopic, Lesson, LessonId, SerialKey, SerialKeyStatus,
    TopicId,
};

use super::api::CatalogApi;
use crate::error::CatalogApiError;

/// Catalog served from memory. Used for tests and when no backend is configured.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalogApi {
    courses: Vec<Course>,
    topics: Vec<ForumTopic>,
    serial_keys: Vec<SerialKey>,
    access_logs: Vec<AccessLog>,
}

impl StaticCatalogApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_courses(mut self, courses: Vec<Course>) -> Self {
        self.courses = courses;
        self
    }

    #[must_use]
    pub fn with_topics(mut self, topics: Vec<ForumTopic>) -> Self {
        self.topics = topics;
        self
    }

    #[must_use]
    pub fn with_serial_keys(mut self, serial_keys: Vec<SerialKey>) -> Self {
        self.serial_keys = serial_keys;
        self
    }

    #[must_use]
    pub fn with_access_logs(mut self, access_logs: Vec<AccessLog>) -> Self {
        self.access_logs = access_logs;
        self
    }

    /// A small built-in catalog anchored at `now`.
    #[must_use]
    pub fn demo(now: DateTime<Utc>) -> Self {
        let lesson = |id: u64, title: &str, minutes: u32| Lesson {
            id: LessonId::new(id),
            title: title.to_string(),
            duration_secs: minutes * 60,
            video_url: None,
        };

        let courses = vec![
            Course {
                id: CourseId::new(1),
                title: "Foundations of Clinical Nutrition".into(),
                summary: "Macronutrients, energy balance and dietary assessment.".into(),
                category: Some("Nutrition".into()),
                lessons: vec![
                    lesson(101, "Welcome and course map", 4),
                    lesson(102, "Energy balance", 12),
                    lesson(103, "Dietary assessment tools", 15),
                ],
            },
            Course {
                id: CourseId::new(2),
                title: "Sleep Hygiene for Patients".into(),
                summary: "Practical routines for better sleep.".into(),
                category: Some("Wellbeing".into()),
                lessons: vec![
                    lesson(201, "Why sleep matters", 6),
                    lesson(202, "Building an evening routine", 9),
                ],
            },
            Course {
                id: CourseId::new(3),
                title: "Motivational Interviewing".into(),
                summary: "Conversation techniques for behaviour change.".into(),
                category: Some("Practice".into()),
                lessons: vec![lesson(301, "Open questions", 10)],
            },
        ];

        let topics = vec![
            ForumTopic {
                id: TopicId::new(1),
                title: "Tips for the dietary assessment assignment".into(),
                author: "Marina".into(),
                reply_count: 7,
                created_at: now - Duration::days(2),
            },
            ForumTopic {
                id: TopicId::new(2),
                title: "Certificate request timeline".into(),
                author: "João".into(),
                reply_count: 2,
                created_at: now - Duration::hours(5),
            },
        ];

        let serial_keys = vec![
            SerialKey {
                code: "NUTRI-4F2A-91KD".into(),
                course_title: "Foundations of Clinical Nutrition".into(),
                status: SerialKeyStatus::Redeemed,
                redeemed_by: Some("marina@example.org".into()),
            },
            SerialKey {
                code: "NUTRI-7Q3B-0XZP".into(),
                course_title: "Foundations of Clinical Nutrition".into(),
                status: SerialKeyStatus::Available,
                redeemed_by: None,
            },
            SerialKey {
                code: "SLEEP-2M8C-55RT".into(),
                course_title: "Sleep Hygiene for Patients".into(),
                status: SerialKeyStatus::Revoked,
                redeemed_by: None,
            },
        ];

        let access_logs = vec![
            AccessLog {
                user_email: "marina@example.org".into(),
                action: "login".into(),
                occurred_at: now - Duration::hours(1),
            },
            AccessLog {
                user_email: "joao@example.org".into(),
                action: "lesson:102".into(),
                occurred_at: now - Duration::days(3),
            },
            AccessLog {
                user_email: "ana@example.org".into(),
                action: "login".into(),
                occurred_at: now - Duration::days(12),
            },
        ];

        Self {
            courses,
            topics,
            serial_keys,
            access_logs,
        }
    }
}

#[async_trait]
impl CatalogApi for StaticCatalogApi {
    async fn list_courses(&self) -> Result<Vec<Course>, CatalogApiError> {
        Ok(self.courses.clone())
    }

    async fn get_course(&self, id: CourseId) -> Result<Course, CatalogApiError> {
        self.courses
            .iter()
            .find(|course| course.id == id)
            .cloned()
            .ok_or(CatalogApiError::NotFound)
    }

    async fn list_forum_topics(&self) -> Result<Vec<ForumTopic>, CatalogApiError> {
        Ok(self.topics.clone())
    }

    async fn list_serial_keys(&self) -> Result<Vec<SerialKey>, CatalogApiError> {
        Ok(self.serial_keys.clone())
    }

    async fn list_access_logs(&self) -> Result<Vec<AccessLog>, CatalogApiError> {
        Ok(self.access_logs.clone())
    }
}
