use arza::assessment::{
    EvaluationId, EvaluationRepository, InMemoryCatalog, RepositoryError, RoutineId, RoutinePlan,
    StoredEvaluation, UserId,
};
use arza::config::CatalogConfig;
use arza::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default)]
struct Store {
    evaluations: Vec<StoredEvaluation>,
    routines: HashMap<RoutineId, RoutinePlan>,
}

/// Process-local store used by the server and the demo.
#[derive(Default, Clone)]
pub(crate) struct InMemoryEvaluationRepository {
    store: Arc<Mutex<Store>>,
}

impl InMemoryEvaluationRepository {
    fn lock(&self) -> Result<MutexGuard<'_, Store>, RepositoryError> {
        self.store
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
    }
}

impl EvaluationRepository for InMemoryEvaluationRepository {
    fn insert(&self, entry: StoredEvaluation) -> Result<StoredEvaluation, RepositoryError> {
        let mut store = self.lock()?;
        if store.evaluations.iter().any(|stored| stored.id() == entry.id()) {
            return Err(RepositoryError::Conflict);
        }
        store.evaluations.push(entry.clone());
        Ok(entry)
    }

    fn fetch(&self, id: &EvaluationId) -> Result<Option<StoredEvaluation>, RepositoryError> {
        let store = self.lock()?;
        Ok(store
            .evaluations
            .iter()
            .find(|stored| stored.id() == id)
            .cloned())
    }

    fn latest_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<StoredEvaluation>, RepositoryError> {
        let store = self.lock()?;
        Ok(store
            .evaluations
            .iter()
            .rev()
            .find(|stored| stored.user_id() == user_id)
            .cloned())
    }

    fn save_routine(&self, routine: RoutinePlan) -> Result<RoutinePlan, RepositoryError> {
        let mut store = self.lock()?;
        if store.routines.contains_key(&routine.id) {
            return Err(RepositoryError::Conflict);
        }
        store.routines.insert(routine.id.clone(), routine.clone());
        Ok(routine)
    }

    fn routine_for_user(&self, user_id: &UserId) -> Result<Option<RoutinePlan>, RepositoryError> {
        let store = self.lock()?;
        Ok(store
            .routines
            .values()
            .find(|routine| &routine.user_id == user_id)
            .cloned())
    }

    fn fetch_routine(&self, id: &RoutineId) -> Result<Option<RoutinePlan>, RepositoryError> {
        let store = self.lock()?;
        Ok(store.routines.get(id).cloned())
    }
}

/// CSV catalog from the configured directory, or the built-in one.
pub(crate) fn load_catalog(config: &CatalogConfig) -> Result<InMemoryCatalog, AppError> {
    match &config.directory {
        Some(directory) => {
            let catalog = InMemoryCatalog::from_dir(directory)?;
            info!(
                directory = %directory.display(),
                templates = catalog.templates().len(),
                exercises = catalog.exercises().len(),
                "loaded routine catalog"
            );
            Ok(catalog)
        }
        None => Ok(InMemoryCatalog::standard()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_catalog_directory_is_an_error() {
        let config = CatalogConfig {
            directory: Some(std::env::temp_dir().join("arza-api-missing-catalog")),
        };

        match load_catalog(&config) {
            Err(AppError::Catalog(_)) => {}
            other => panic!("expected catalog error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn default_catalog_is_the_standard_one() {
        let catalog = load_catalog(&CatalogConfig::default()).expect("standard catalog");

        assert_eq!(catalog.templates().len(), 9);
    }
}
