mod api;
mod fixtures;
mod service;

pub use api::{ApiConfig, CatalogApi, HttpCatalogApi};
pub use fixtures::StaticCatalogApi;
pub use service::{AdminOverview, CatalogService, LessonContext, RECENT_ACCESS_WINDOW_DAYS};
