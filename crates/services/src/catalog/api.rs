use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use campus_core::model::{AccessLog, Course, CourseId, ForumTopic, SerialKey};

use crate::error::CatalogApiError;

/// Read-only view of the course backend. Responses arrive fully shaped;
/// filtering and paging happen client-side.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_courses(&self) -> Result<Vec<Course>, CatalogApiError>;

    async fn get_course(&self, id: CourseId) -> Result<Course, CatalogApiError>;

    async fn list_forum_topics(&self) -> Result<Vec<ForumTopic>, CatalogApiError>;

    async fn list_serial_keys(&self) -> Result<Vec<SerialKey>, CatalogApiError>;

    async fn list_access_logs(&self) -> Result<Vec<AccessLog>, CatalogApiError>;
}

#[derive(Clone, Debug)]
pub struct ApiConfig {
    base_url: Url,
    token: Option<String>,
}

impl ApiConfig {
    /// # Errors
    ///
    /// Returns `CatalogApiError::InvalidBaseUrl` if `base_url` is not an absolute URL.
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, CatalogApiError> {
        // A trailing slash keeps `Url::join` from dropping the last path segment.
        let normalized = format!("{}/", base_url.trim().trim_end_matches('/'));
        let base_url = Url::parse(&normalized)
            .map_err(|_| CatalogApiError::InvalidBaseUrl(base_url.to_string()))?;
        let token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        Ok(Self { base_url, token })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, CatalogApiError> {
        self.base_url
            .join(path)
            .map_err(|_| CatalogApiError::InvalidBaseUrl(self.base_url.to_string()))
    }
}

#[derive(Clone)]
pub struct HttpCatalogApi {
    client: Client,
    config: ApiConfig,
}

impl HttpCatalogApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogApiError> {
        let url = self.config.endpoint(path)?;
        tracing::debug!(%url, "catalog request");

        let mut request = self.client.get(url);
        if let Some(token) = self.config.token.as_deref() {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;

        match response.status() {
            status if status.is_success() => Ok(response.json().await?),
            StatusCode::NOT_FOUND => Err(CatalogApiError::NotFound),
            status => Err(CatalogApiError::HttpStatus(status)),
        }
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn list_courses(&self) -> Result<Vec<Course>, CatalogApiError> {
        self.get_json("courses").await
    }

    async fn get_course(&self, id: CourseId) -> Result<Course, CatalogApiError> {
        self.get_json(&format!("courses/{id}")).await
    }

    async fn list_forum_topics(&self) -> Result<Vec<ForumTopic>, CatalogApiError> {
        self.get_json("forum/topics").await
    }

    async fn list_serial_keys(&self) -> Result<Vec<SerialKey>, CatalogApiError> {
        self.get_json("admin/serial-keys").await
    }

    async fn list_access_logs(&self) -> Result<Vec<AccessLog>, CatalogApiError> {
        self.get_json("admin/access-logs").await
    }
}
