use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::domain::AssessmentAnswers;
use super::record::{
    AssessmentResults, EvaluationId, EvaluationRecord, EvaluationRepository, RepositoryError,
    StatsRecord, StoredEvaluation, UserId,
};
use super::responses::AssessmentResponses;
use super::routine::{
    ExerciseCatalog, RoutineError, RoutineId, RoutinePlan, RoutinePlanner, RoutineRequest,
    TemplateCatalog, TrainingAvailability,
};
use super::scoring::{AssessmentEngine, AssessmentOutcome, ScoringConfig};
use super::validation::ValidationErrors;

/// Service composing the scoring engine, the evaluation store, and the routine planner.
pub struct AssessmentService<R, C> {
    engine: Arc<AssessmentEngine>,
    repository: Arc<R>,
    planner: RoutinePlanner<C>,
}

static EVALUATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static ROUTINE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_evaluation_id() -> EvaluationId {
    let id = EVALUATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    EvaluationId(format!("eval-{id:06}"))
}

fn next_routine_id() -> RoutineId {
    let id = ROUTINE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    RoutineId(format!("routine-{id:06}"))
}

impl<R, C> AssessmentService<R, C>
where
    R: EvaluationRepository + 'static,
    C: TemplateCatalog + ExerciseCatalog + 'static,
{
    pub fn new(repository: Arc<R>, catalog: Arc<C>, config: ScoringConfig) -> Self {
        Self {
            engine: Arc::new(AssessmentEngine::new(config)),
            repository,
            planner: RoutinePlanner::new(catalog),
        }
    }

    pub fn engine(&self) -> &AssessmentEngine {
        &self.engine
    }

    /// Score responses without persisting anything.
    pub fn preview(&self, responses: &AssessmentResponses) -> AssessmentOutcome {
        self.engine.evaluate(&AssessmentAnswers::from(responses))
    }

    /// Validate, score, and persist a completed questionnaire.
    pub fn submit(
        &self,
        user_id: UserId,
        responses: &AssessmentResponses,
    ) -> Result<AssessmentResults, AssessmentServiceError> {
        let answers = AssessmentAnswers::from(responses);
        let outcome = self.engine.evaluate(&answers);

        if !outcome.is_complete() {
            debug!(
                user_id = %user_id.0,
                missing = outcome.validation.len(),
                "rejecting incomplete assessment"
            );
            return Err(AssessmentServiceError::Validation(outcome.validation));
        }

        let evaluation_id = next_evaluation_id();
        let evaluation = EvaluationRecord::from_assessment(
            evaluation_id.clone(),
            user_id.clone(),
            &answers,
            &outcome,
            Utc::now(),
        );
        let stats = StatsRecord::from_outcome(evaluation_id, user_id, &outcome);

        let stored = self
            .repository
            .insert(StoredEvaluation { evaluation, stats })?;

        info!(
            evaluation_id = %stored.id().0,
            user_id = %stored.user_id().0,
            arza_card = stored.stats.arza_card,
            classification = %stored.stats.clasificacion_general,
            "assessment stored"
        );

        Ok(stored.results())
    }

    pub fn results(
        &self,
        evaluation_id: &EvaluationId,
    ) -> Result<AssessmentResults, AssessmentServiceError> {
        let stored = self
            .repository
            .fetch(evaluation_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(stored.results())
    }

    pub fn latest_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<AssessmentResults, AssessmentServiceError> {
        let stored = self
            .repository
            .latest_for_user(user_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(stored.results())
    }

    /// Build the subject's routine from an evaluation. A routine that already exists for the
    /// user is returned unchanged.
    pub fn generate_routine(
        &self,
        evaluation_id: &EvaluationId,
        availability: TrainingAvailability,
    ) -> Result<RoutinePlan, AssessmentServiceError> {
        let stored = self
            .repository
            .fetch(evaluation_id)?
            .ok_or(RepositoryError::NotFound)?;

        if let Some(existing) = self.repository.routine_for_user(stored.user_id())? {
            debug!(
                routine_id = %existing.id.0,
                user_id = %existing.user_id.0,
                "reusing existing routine"
            );
            return Ok(existing);
        }

        let request = RoutineRequest {
            user_id: stored.user_id().clone(),
            evaluation_id: stored.id().clone(),
            levels: stored.evaluation.levels(),
            availability,
        };
        let plan = match self.planner.plan(next_routine_id(), request, Utc::now()) {
            Ok(plan) => plan,
            Err(error) => {
                warn!(
                    evaluation_id = %stored.id().0,
                    days_per_week = availability.days_per_week(),
                    session_minutes = availability.session_minutes(),
                    %error,
                    "routine planning failed"
                );
                return Err(error.into());
            }
        };
        let saved = self.repository.save_routine(plan)?;

        info!(
            routine_id = %saved.id.0,
            template_id = %saved.template_id,
            exercises = saved.details.len(),
            "routine generated"
        );

        Ok(saved)
    }

    pub fn routine(&self, routine_id: &RoutineId) -> Result<RoutinePlan, AssessmentServiceError> {
        let routine = self
            .repository
            .fetch_routine(routine_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(routine)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error("assessment is incomplete: {0}")]
    Validation(ValidationErrors),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Routine(#[from] RoutineError),
}
