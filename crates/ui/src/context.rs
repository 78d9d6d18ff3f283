use std::sync::Arc;

use campus_core::model::{Persona, ProfileSelection};
use dioxus::prelude::*;
use services::{AppServices, CatalogService, DownloadCatalog, ProfileService};
use tokio::sync::mpsc;
use tracing::warn;

pub trait UiApp: Send + Sync {
    /// Selection read from durable storage before the window opened.
    fn initial_profile(&self) -> ProfileSelection;
    fn auto_advance_secs(&self) -> i64;

    fn profile_service(&self) -> Arc<ProfileService>;
    fn catalog(&self) -> Arc<CatalogService>;
    fn downloads(&self) -> Arc<DownloadCatalog>;
}

#[derive(Clone)]
pub struct AppContext {
    initial_profile: ProfileSelection,
    auto_advance_secs: i64,

    profile_service: Arc<ProfileService>,
    catalog: Arc<CatalogService>,
    downloads: Arc<DownloadCatalog>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            initial_profile: app.initial_profile(),
            auto_advance_secs: app.auto_advance_secs(),
            profile_service: app.profile_service(),
            catalog: app.catalog(),
            downloads: app.downloads(),
        }
    }

    #[must_use]
    pub fn initial_profile(&self) -> ProfileSelection {
        self.initial_profile
    }

    #[must_use]
    pub fn auto_advance_secs(&self) -> i64 {
        self.auto_advance_secs
    }

    #[must_use]
    pub fn profile_service(&self) -> Arc<ProfileService> {
        Arc::clone(&self.profile_service)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn downloads(&self) -> Arc<DownloadCatalog> {
        Arc::clone(&self.downloads)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// A pending write of the persona choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProfileWrite {
    Select(Persona),
    Swap(ProfileSelection),
    Clear,
}

/// The active persona plus its persistence queue.
///
/// The signal changes first so the content area re-renders immediately.
/// Writes go through a single background task in the order they were made,
/// so the stored value always matches the last choice.
#[derive(Clone)]
pub struct ProfileState {
    selection: Signal<ProfileSelection>,
    writes: mpsc::UnboundedSender<ProfileWrite>,
}

impl ProfileState {
    #[must_use]
    pub fn current(&self) -> ProfileSelection {
        (self.selection)()
    }

    pub fn select(&mut self, persona: Persona) {
        self.selection.set(ProfileSelection::Selected(persona));
        self.persist(ProfileWrite::Select(persona));
    }

    /// Switch to the other persona. Does nothing while unset.
    pub fn swap(&mut self) {
        let current = *self.selection.peek();
        let next = current.swapped();
        if next == current {
            return;
        }
        self.selection.set(next);
        self.persist(ProfileWrite::Swap(current));
    }

    pub fn clear(&mut self) {
        self.selection.set(ProfileSelection::Unset);
        self.persist(ProfileWrite::Clear);
    }

    fn persist(&self, write: ProfileWrite) {
        if self.writes.send(write).is_err() {
            warn!(?write, "profile writer stopped; choice not persisted");
        }
    }
}

async fn apply_profile_writes(
    service: Arc<ProfileService>,
    mut writes: mpsc::UnboundedReceiver<ProfileWrite>,
) {
    while let Some(write) = writes.recv().await {
        match write {
            ProfileWrite::Select(persona) => {
                service.select(persona).await;
            }
            ProfileWrite::Swap(current) => {
                service.swap(current).await;
            }
            ProfileWrite::Clear => {
                service.clear().await;
            }
        }
    }
}

/// Provide `ProfileState` to the subtree, seeded from the startup read.
pub fn use_profile_state_provider(ctx: &AppContext) -> ProfileState {
    let initial = ctx.initial_profile();
    let service = ctx.profile_service();
    use_context_provider(move || {
        let (writes, rx) = mpsc::unbounded_channel();
        spawn(apply_profile_writes(service, rx));
        ProfileState {
            selection: Signal::new(initial),
            writes,
        }
    })
}

pub struct ServicesApp {
    services: AppServices,
    initial_profile: ProfileSelection,
}

impl ServicesApp {
    #[must_use]
    pub fn new(services: AppServices, initial_profile: ProfileSelection) -> Self {
        Self {
            services,
            initial_profile,
        }
    }
}

impl UiApp for ServicesApp {
    fn initial_profile(&self) -> ProfileSelection {
        self.initial_profile
    }

    fn auto_advance_secs(&self) -> i64 {
        self.services.auto_advance_secs()
    }

    fn profile_service(&self) -> Arc<ProfileService> {
        self.services.profile()
    }

    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }

    fn downloads(&self) -> Arc<DownloadCatalog> {
        self.services.downloads()
    }
}
