use std::sync::Arc;

use campus_core::model::DEFAULT_AUTO_ADVANCE_SECS;
use storage::repository::Storage;
use tracing::{info, warn};

use crate::Clock;
use crate::catalog::{CatalogApi, CatalogService};
use crate::downloads::DownloadCatalog;
use crate::profile_service::ProfileService;

/// Assembles app-facing services.
#[derive(Clone)]
pub struct AppServices {
    profile: Arc<ProfileService>,
    catalog: Arc<CatalogService>,
    downloads: Arc<DownloadCatalog>,
    auto_advance_secs: i64,
}

impl AppServices {
    /// Build services backed by `SQLite` preference storage.
    ///
    /// If the database cannot be opened the app still starts; the profile
    /// prompt then reappears on every launch.
    pub async fn bootstrap_sqlite(
        db_url: &str,
        clock: Clock,
        api: Arc<dyn CatalogApi>,
        downloads: DownloadCatalog,
    ) -> Self {
        let storage = match Storage::sqlite(db_url).await {
            Ok(storage) => {
                info!(db_url, "preference storage ready");
                storage
            }
            Err(err) => {
                warn!(error = %err, db_url, "preference storage unavailable; preferences will not persist");
                Storage::unavailable()
            }
        };
        Self::from_storage(storage, clock, api, downloads)
    }

    #[must_use]
    pub fn from_storage(
        storage: Storage,
        clock: Clock,
        api: Arc<dyn CatalogApi>,
        downloads: DownloadCatalog,
    ) -> Self {
        Self {
            profile: Arc::new(ProfileService::new(clock, Arc::clone(&storage.preferences))),
            catalog: Arc::new(CatalogService::new(clock, api)),
            downloads: Arc::new(downloads),
            auto_advance_secs: DEFAULT_AUTO_ADVANCE_SECS,
        }
    }

    #[must_use]
    pub fn with_auto_advance_secs(mut self, secs: i64) -> Self {
        self.auto_advance_secs = secs;
        self
    }

    #[must_use]
    pub fn profile(&self) -> Arc<ProfileService> {
        Arc::clone(&self.profile)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn downloads(&self) -> Arc<DownloadCatalog> {
        Arc::clone(&self.downloads)
    }

    #[must_use]
    pub fn auto_advance_secs(&self) -> i64 {
        self.auto_advance_secs
    }
}
