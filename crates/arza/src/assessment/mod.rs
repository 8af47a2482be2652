//! Calisthenics skill assessment.
//!
//! Answers collected by the questionnaire are validated, scored per category with fixed
//! additive rules, rated on a 0-99 card scale, and tiered into training levels. The
//! collaborators around that pure core persist results and turn levels into routines.

pub mod catalog;
pub mod domain;
pub mod profile;
pub mod record;
pub mod responses;
pub mod routine;
pub mod router;
pub mod scoring;
pub mod service;
pub mod unlock;
pub mod validation;
pub mod wizard;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, InMemoryCatalog};
pub use domain::{
    Ability, AbilitySet, Answer, AnswerOption, AssessmentAnswers, BeginnerAnswers, Category,
    FrontLeverAnswers, HandstandAnswers, PlancheAnswers, PullAnswers, PushAnswers,
};
pub use profile::UserProfile;
pub use record::{
    AssessmentResults, EvaluationId, EvaluationRecord, EvaluationRepository, RepositoryError,
    StatsRecord, StoredEvaluation, UserId,
};
pub use responses::AssessmentResponses;
pub use routine::{
    Exercise, ExerciseCatalog, RoutineDetail, RoutineError, RoutineId, RoutinePlan,
    RoutinePlanner, RoutineRequest, RoutineTemplate, TemplateBlock, TemplateCatalog,
    TrainingAvailability,
};
pub use router::assessment_router;
pub use scoring::{
    classify_levels, classify_overall, normalize, score, AssessmentEngine, AssessmentOutcome,
    CategoryMaxima, LevelResult, NormalizedResult, OverallClassification, OverallResult,
    ScoreComponent, ScoreResult, ScoringConfig,
};
pub use service::{AssessmentService, AssessmentServiceError};
pub use unlock::{
    effective_answers, is_unlocked, visible_fields, AnswerField, UnlockRule, UNLOCK_RULES,
};
pub use validation::{validate, ValidationErrors};
pub use wizard::{WizardBlock, WizardCursor};
