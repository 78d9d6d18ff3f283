//! Shared error types for the services crate.

use thiserror::Error;

use campus_core::model::{CourseId, LessonId};

/// Errors emitted by `CatalogApi` adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogApiError {
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("resource not found")]
    NotFound,
    #[error("catalog request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `CatalogService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogServiceError {
    #[error("course {0} not found")]
    CourseNotFound(CourseId),
    #[error("lesson {lesson} not found in course {course}")]
    LessonNotFound { course: CourseId, lesson: LessonId },
    #[error(transparent)]
    Api(#[from] CatalogApiError),
}
