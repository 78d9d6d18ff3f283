#![forbid(unsafe_code)]

pub mod app_services;
pub mod auto_advance;
pub mod catalog;
pub mod downloads;
pub mod error;
pub mod profile_service;

pub use campus_core::Clock;

pub use app_services::AppServices;
pub use auto_advance::{AutoAdvanceHooks, AutoAdvanceTimer, TICK_INTERVAL};
pub use catalog::{
    AdminOverview, ApiConfig, CatalogApi, CatalogService, HttpCatalogApi, LessonContext,
    StaticCatalogApi,
};
pub use downloads::DownloadCatalog;
pub use error::{CatalogApiError, CatalogServiceError};
pub use profile_service::ProfileService;
