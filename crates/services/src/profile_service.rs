use std::sync::Arc;

use campus_core::model::{PROFILE_STORAGE_KEY, Persona, ProfileSelection};
use storage::repository::{PreferenceRecord, PreferenceRepository, StorageError};
use tracing::{debug, warn};

use crate::Clock;

/// Reads and writes the persona choice through an injected preference port.
///
/// Storage failures never reach the caller: reads degrade to
/// `ProfileSelection::Unset` and failed writes are logged, so the prompt
/// simply reappears on the next launch.
#[derive(Clone)]
pub struct ProfileService {
    clock: Clock,
    repo: Arc<dyn PreferenceRepository>,
}

impl ProfileService {
    #[must_use]
    pub fn new(clock: Clock, repo: Arc<dyn PreferenceRepository>) -> Self {
        Self { clock, repo }
    }

    /// Read the persisted selection once, at startup.
    pub async fn load(&self) -> ProfileSelection {
        match self.repo.get_preference(PROFILE_STORAGE_KEY).await {
            Ok(record) => {
                let selection =
                    ProfileSelection::from_stored(record.as_ref().map(|r| r.value.as_str()));
                debug!(?selection, "loaded profile selection");
                selection
            }
            Err(err) => {
                warn!(error = %err, "profile storage unreadable; treating selection as unset");
                ProfileSelection::Unset
            }
        }
    }

    /// Choose a persona and persist it.
    pub async fn select(&self, persona: Persona) -> ProfileSelection {
        let selection = ProfileSelection::Selected(persona);
        self.persist(selection).await;
        selection
    }

    /// Switch to the other persona and persist it. `Unset` stays `Unset`.
    pub async fn swap(&self, current: ProfileSelection) -> ProfileSelection {
        let next = current.swapped();
        if next != current {
            self.persist(next).await;
        }
        next
    }

    /// Forget the persisted choice.
    pub async fn clear(&self) -> ProfileSelection {
        self.persist(ProfileSelection::Unset).await;
        ProfileSelection::Unset
    }

    async fn persist(&self, selection: ProfileSelection) {
        let result = self.write(selection).await;
        match result {
            Ok(()) => debug!(?selection, "persisted profile selection"),
            Err(err) => warn!(error = %err, ?selection, "failed to persist profile selection"),
        }
    }

    async fn write(&self, selection: ProfileSelection) -> Result<(), StorageError> {
        match selection.persona() {
            Some(persona) => {
                let record = PreferenceRecord::new(
                    PROFILE_STORAGE_KEY,
                    persona.as_storage_value(),
                    self.clock.now(),
                );
                self.repo.set_preference(&record).await
            }
            None => self.repo.remove_preference(PROFILE_STORAGE_KEY).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::time::fixed_now;
    use storage::repository::{InMemoryRepository, UnavailableRepository};

    fn service(repo: Arc<dyn PreferenceRepository>) -> ProfileService {
        ProfileService::new(Clock::fixed(fixed_now()), repo)
    }

    #[tokio::test]
    async fn fresh_storage_is_unset() {
        let svc = service(Arc::new(InMemoryRepository::new()));
        assert_eq!(svc.load().await, ProfileSelection::Unset);
    }

    #[tokio::test]
    async fn select_then_load_round_trips() {
        let repo = Arc::new(InMemoryRepository::new());
        let svc = service(repo.clone());
        svc.select(Persona::Student).await;
        assert_eq!(
            svc.load().await,
            ProfileSelection::Selected(Persona::Student)
        );

        let stored = repo
            .get_preference(PROFILE_STORAGE_KEY)
            .await
            .unwrap()
            .expect("stored");
        assert_eq!(stored.value, "student");
    }

    #[tokio::test]
    async fn clear_removes_the_key() {
        let repo = Arc::new(InMemoryRepository::new());
        let svc = service(repo.clone());
        svc.select(Persona::Patient).await;
        assert_eq!(svc.clear().await, ProfileSelection::Unset);
        assert_eq!(svc.load().await, ProfileSelection::Unset);
        assert!(repo.get_preference(PROFILE_STORAGE_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn later_selection_overwrites_earlier_one() {
        let svc = service(Arc::new(InMemoryRepository::new()));
        svc.select(Persona::Patient).await;
        svc.select(Persona::Student).await;
        assert_eq!(
            svc.load().await,
            ProfileSelection::Selected(Persona::Student)
        );
    }

    #[tokio::test]
    async fn swap_persists_the_other_persona() {
        let svc = service(Arc::new(InMemoryRepository::new()));
        let current = svc.select(Persona::Student).await;
        let swapped = svc.swap(current).await;
        assert_eq!(swapped, ProfileSelection::Selected(Persona::Patient));
        assert_eq!(svc.load().await, swapped);
    }

    #[tokio::test]
    async fn swap_from_unset_writes_nothing() {
        let repo = Arc::new(InMemoryRepository::new());
        let svc = service(repo.clone());
        assert_eq!(svc.swap(ProfileSelection::Unset).await, ProfileSelection::Unset);
        assert!(repo.get_preference(PROFILE_STORAGE_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unknown_stored_value_is_unset() {
        let repo = Arc::new(InMemoryRepository::new());
        repo.set_preference(&PreferenceRecord::new(
            PROFILE_STORAGE_KEY,
            "doctor",
            fixed_now(),
        ))
        .await
        .unwrap();
        let svc = service(repo);
        assert_eq!(svc.load().await, ProfileSelection::Unset);
    }

    #[tokio::test]
    async fn unavailable_storage_degrades_silently() {
        let svc = service(Arc::new(UnavailableRepository));
        assert_eq!(svc.load().await, ProfileSelection::Unset);
        // The in-session choice still applies even though it cannot be saved.
        assert_eq!(
            svc.select(Persona::Student).await,
            ProfileSelection::Selected(Persona::Student)
        );
        assert_eq!(svc.load().await, ProfileSelection::Unset);
    }
}
