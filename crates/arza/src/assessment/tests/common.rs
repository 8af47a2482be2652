use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::catalog::InMemoryCatalog;
use crate::assessment::record::{
    EvaluationId, EvaluationRepository, RepositoryError, StoredEvaluation, UserId,
};
use crate::assessment::responses::AssessmentResponses;
use crate::assessment::routine::{RoutineId, RoutinePlan};
use crate::assessment::scoring::ScoringConfig;
use crate::assessment::service::AssessmentService;

pub(super) fn code(value: &str) -> Option<String> {
    Some(value.to_string())
}

/// Pull-ups 18, strict muscle-up, +15 kg weighted muscle-up: Tirón 8.
pub(super) fn pull_responses() -> AssessmentResponses {
    AssessmentResponses {
        pullups_reps: code("18"),
        muscle_ups_type: code("strict"),
        weighted_muscle_ups_kg: code("15"),
        ..AssessmentResponses::with_abilities(["pullups"])
    }
}

/// 40 dips, multiple reps at 60-80 kg, 130 kg single: Empuje 17.
pub(super) fn dips_responses() -> AssessmentResponses {
    AssessmentResponses {
        dips_reps: code("40"),
        weighted_dips_kg: code("multiple_60_80"),
        extreme_dips_kg: code("130"),
        ..AssessmentResponses::with_abilities(["dips"])
    }
}

/// HSPU with one-arm and dynamic one-arm variations: Handstand 5.
pub(super) fn handstand_responses() -> AssessmentResponses {
    AssessmentResponses {
        handstand_level: code("hspu"),
        handstand_one_arm: true,
        handstand_dynamic_one_arm: true,
        ..AssessmentResponses::with_abilities(["handstand"])
    }
}

/// "None" selected with standard push-ups, medium knee push-ups, low rows: Beginner 10.
pub(super) fn beginner_responses() -> AssessmentResponses {
    AssessmentResponses {
        standard_pushups: code("yes"),
        knee_pushups_level: code("media"),
        australian_rows_level: code("baja"),
        ..AssessmentResponses::with_abilities(["none"])
    }
}

/// Every skill at its highest option.
pub(super) fn elite_responses() -> AssessmentResponses {
    AssessmentResponses {
        pullups_reps: code("35"),
        weighted_pullups_kg: code("45"),
        muscle_ups_type: code("multiple_strict"),
        weighted_muscle_ups_kg: code("20"),
        dips_reps: code("40"),
        weighted_dips_kg: code("multiple_60_80"),
        extreme_dips_kg: code("130"),
        handstand_level: code("hspu"),
        handstand_one_arm: true,
        handstand_ninety_degree: true,
        handstand_dynamic_one_arm: true,
        front_lever_level: code("front_lever_touch"),
        front_lever_elite: code("sat"),
        front_lever_victorian: true,
        front_lever_sat_supino: true,
        planche_level: code("full"),
        planche_elite: code("maltese"),
        planche_zanetti: true,
        planche_pelican: true,
        ..AssessmentResponses::with_abilities([
            "pullups",
            "dips",
            "handstand",
            "front_lever",
            "planche",
        ])
    }
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    evaluations: Mutex<Vec<StoredEvaluation>>,
    routines: Mutex<Vec<RoutinePlan>>,
}

impl MemoryRepository {
    pub(super) fn evaluation_count(&self) -> usize {
        self.evaluations.lock().expect("evaluations lock").len()
    }

    pub(super) fn routine_count(&self) -> usize {
        self.routines.lock().expect("routines lock").len()
    }
}

impl EvaluationRepository for MemoryRepository {
    fn insert(&self, entry: StoredEvaluation) -> Result<StoredEvaluation, RepositoryError> {
        let mut evaluations = self.evaluations.lock().expect("evaluations lock");
        if evaluations.iter().any(|stored| stored.id() == entry.id()) {
            return Err(RepositoryError::Conflict);
        }
        evaluations.push(entry.clone());
        Ok(entry)
    }

    fn fetch(&self, id: &EvaluationId) -> Result<Option<StoredEvaluation>, RepositoryError> {
        let evaluations = self.evaluations.lock().expect("evaluations lock");
        Ok(evaluations.iter().find(|stored| stored.id() == id).cloned())
    }

    fn latest_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<StoredEvaluation>, RepositoryError> {
        let evaluations = self.evaluations.lock().expect("evaluations lock");
        Ok(evaluations
            .iter()
            .rev()
            .find(|stored| stored.user_id() == user_id)
            .cloned())
    }

    fn save_routine(&self, routine: RoutinePlan) -> Result<RoutinePlan, RepositoryError> {
        self.routines
            .lock()
            .expect("routines lock")
            .push(routine.clone());
        Ok(routine)
    }

    fn routine_for_user(&self, user_id: &UserId) -> Result<Option<RoutinePlan>, RepositoryError> {
        let routines = self.routines.lock().expect("routines lock");
        Ok(routines
            .iter()
            .find(|routine| &routine.user_id == user_id)
            .cloned())
    }

    fn fetch_routine(&self, id: &RoutineId) -> Result<Option<RoutinePlan>, RepositoryError> {
        let routines = self.routines.lock().expect("routines lock");
        Ok(routines.iter().find(|routine| &routine.id == id).cloned())
    }
}

pub(super) struct ConflictRepository;

impl EvaluationRepository for ConflictRepository {
    fn insert(&self, _entry: StoredEvaluation) -> Result<StoredEvaluation, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &EvaluationId) -> Result<Option<StoredEvaluation>, RepositoryError> {
        Ok(None)
    }

    fn latest_for_user(
        &self,
        _user_id: &UserId,
    ) -> Result<Option<StoredEvaluation>, RepositoryError> {
        Ok(None)
    }

    fn save_routine(&self, routine: RoutinePlan) -> Result<RoutinePlan, RepositoryError> {
        Ok(routine)
    }

    fn routine_for_user(&self, _user_id: &UserId) -> Result<Option<RoutinePlan>, RepositoryError> {
        Ok(None)
    }

    fn fetch_routine(&self, _id: &RoutineId) -> Result<Option<RoutinePlan>, RepositoryError> {
        Ok(None)
    }
}

pub(super) struct UnavailableRepository;

impl EvaluationRepository for UnavailableRepository {
    fn insert(&self, _entry: StoredEvaluation) -> Result<StoredEvaluation, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &EvaluationId) -> Result<Option<StoredEvaluation>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn latest_for_user(
        &self,
        _user_id: &UserId,
    ) -> Result<Option<StoredEvaluation>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn save_routine(&self, _routine: RoutinePlan) -> Result<RoutinePlan, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn routine_for_user(&self, _user_id: &UserId) -> Result<Option<RoutinePlan>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch_routine(&self, _id: &RoutineId) -> Result<Option<RoutinePlan>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) type MemoryService = AssessmentService<MemoryRepository, InMemoryCatalog>;

pub(super) fn build_service() -> (Arc<MemoryService>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = Arc::new(AssessmentService::new(
        repository.clone(),
        Arc::new(InMemoryCatalog::standard()),
        ScoringConfig::default(),
    ));
    (service, repository)
}

pub(super) async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}
