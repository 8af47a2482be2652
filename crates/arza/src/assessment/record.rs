use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{
    Ability, AssessmentAnswers, Category, ExtremeDipKg, FrontLeverDynamic, FrontLeverElite,
    PlancheDynamic, PlancheElite,
};
use super::routine::{RoutineId, RoutinePlan};
use super::scoring::{classify_levels, AssessmentOutcome, LevelResult, ScoreResult};
use super::unlock::effective_answers;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EvaluationId(pub String);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRecord {
    pub pullups_reps: Option<u8>,
    pub weighted_pullups_kg: Option<u8>,
    pub muscle_ups_type: Option<String>,
    pub weighted_muscle_ups_kg: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushRecord {
    pub dips_reps: Option<u8>,
    pub weighted_dips_kg: Option<u8>,
    pub weighted_dips_reps: bool,
    pub extreme_dips_kg: Option<u8>,
    pub extreme_dips_reps: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandstandRecord {
    pub handstand_level: Option<String>,
    pub handstand_one_arm: bool,
    pub handstand_90_degree: bool,
    pub handstand_dynamic_one_arm: bool,
}

/// Front lever answers expanded into one flag per progression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontLeverRecord {
    pub front_lever_level: Option<String>,
    pub front_lever_tuck_pullup: bool,
    pub front_lever_negative: bool,
    pub front_lever_pullup: bool,
    pub front_lever_pullup_touch: bool,
    pub front_lever_touch_wide: bool,
    pub front_lever_sat: bool,
    pub front_lever_victorian: bool,
    pub front_lever_sat_supino: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlancheRecord {
    pub planche_level: Option<String>,
    pub planche_tuck_negative: bool,
    pub planche_tuck_press: bool,
    pub planche_straddle_negative: bool,
    pub planche_full_press: bool,
    pub planche_full_pushup: bool,
    pub planche_maltese: bool,
    pub planche_zanetti: bool,
    pub planche_pelican: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeginnerRecord {
    pub standard_pushups: Option<bool>,
    pub knee_pushups_level: Option<String>,
    pub australian_rows_level: Option<String>,
}

/// Flattened evaluation row: effective answers of the selected blocks plus raw scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub id: EvaluationId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub can_pullups: bool,
    pub can_dips: bool,
    pub can_handstand: bool,
    pub can_front_lever: bool,
    pub can_planche: bool,
    pub is_beginner: bool,
    #[serde(flatten)]
    pub pull: PullRecord,
    #[serde(flatten)]
    pub push: PushRecord,
    #[serde(flatten)]
    pub handstand: HandstandRecord,
    #[serde(flatten)]
    pub front_lever: FrontLeverRecord,
    #[serde(flatten)]
    pub planche: PlancheRecord,
    #[serde(flatten)]
    pub beginner: BeginnerRecord,
    pub tiron_score: u8,
    pub empuje_score: u8,
    pub handstand_score: u8,
    pub front_lever_score: u8,
    pub planche_score: u8,
    pub beginner_score: u8,
}

impl EvaluationRecord {
    /// Only blocks whose ability was selected are carried over; the rest stay empty.
    pub fn from_assessment(
        id: EvaluationId,
        user_id: UserId,
        answers: &AssessmentAnswers,
        outcome: &AssessmentOutcome,
        created_at: DateTime<Utc>,
    ) -> Self {
        let effective = effective_answers(answers);
        let selected = |ability| effective.abilities.contains(ability);

        let pull = if selected(Ability::Pullups) {
            let answers = &effective.pull;
            PullRecord {
                pullups_reps: answers.reps.given().map(|reps| reps.reps()),
                weighted_pullups_kg: answers.weighted_kg.given().map(|load| load.kg()),
                muscle_ups_type: answers.muscle_up.code().map(str::to_string),
                weighted_muscle_ups_kg: answers.weighted_muscle_up_kg.given().map(|load| load.kg()),
            }
        } else {
            PullRecord::default()
        };

        let push = if selected(Ability::Dips) {
            let answers = &effective.push;
            let weighted = answers.weighted_kg.given();
            let extreme = answers.extreme_kg.given();
            PushRecord {
                dips_reps: answers.reps.given().map(|reps| reps.reps()),
                weighted_dips_kg: weighted.and_then(|load| load.kg()),
                weighted_dips_reps: weighted.map_or(false, |load| load.is_multiple()),
                extreme_dips_kg: extreme.and_then(|load| load.kg()),
                extreme_dips_reps: extreme == Some(ExtremeDipKg::From80To100Reps),
            }
        } else {
            PushRecord::default()
        };

        let handstand = if selected(Ability::Handstand) {
            let answers = &effective.handstand;
            HandstandRecord {
                handstand_level: answers.level.code().map(str::to_string),
                handstand_one_arm: answers.one_arm,
                handstand_90_degree: answers.ninety_degree,
                handstand_dynamic_one_arm: answers.dynamic_one_arm,
            }
        } else {
            HandstandRecord::default()
        };

        let front_lever = if selected(Ability::FrontLever) {
            let answers = &effective.front_lever;
            let dynamic = answers.dynamic.given();
            let elite = answers.elite.given();
            FrontLeverRecord {
                front_lever_level: answers.level.code().map(str::to_string),
                front_lever_tuck_pullup: dynamic == Some(FrontLeverDynamic::TuckPullup),
                front_lever_negative: dynamic == Some(FrontLeverDynamic::Negative),
                front_lever_pullup: dynamic == Some(FrontLeverDynamic::Pullup)
                    || elite == Some(FrontLeverElite::Pullup),
                front_lever_pullup_touch: elite == Some(FrontLeverElite::PullupTouch),
                front_lever_touch_wide: elite == Some(FrontLeverElite::TouchWide),
                front_lever_sat: elite == Some(FrontLeverElite::Sat),
                front_lever_victorian: answers.victorian,
                front_lever_sat_supino: answers.sat_supino,
            }
        } else {
            FrontLeverRecord::default()
        };

        let planche = if selected(Ability::Planche) {
            let answers = &effective.planche;
            let dynamic = answers.dynamic.given();
            let elite = answers.elite.given();
            PlancheRecord {
                planche_level: answers.level.code().map(str::to_string),
                planche_tuck_negative: dynamic == Some(PlancheDynamic::TuckNegative),
                planche_tuck_press: dynamic == Some(PlancheDynamic::TuckPress),
                planche_straddle_negative: dynamic == Some(PlancheDynamic::StraddleNegative),
                planche_full_press: elite == Some(PlancheElite::FullPress),
                planche_full_pushup: elite == Some(PlancheElite::FullPushup),
                planche_maltese: elite == Some(PlancheElite::Maltese),
                planche_zanetti: answers.zanetti,
                planche_pelican: answers.pelican,
            }
        } else {
            PlancheRecord::default()
        };

        let beginner = if selected(Ability::Beginner) {
            let answers = &effective.beginner;
            BeginnerRecord {
                standard_pushups: answers.standard_pushups.given(),
                knee_pushups_level: answers.knee_pushups.code().map(str::to_string),
                australian_rows_level: answers.australian_rows.code().map(str::to_string),
            }
        } else {
            BeginnerRecord::default()
        };

        let scores = &outcome.scores;
        Self {
            id,
            user_id,
            created_at,
            can_pullups: selected(Ability::Pullups),
            can_dips: selected(Ability::Dips),
            can_handstand: selected(Ability::Handstand),
            can_front_lever: selected(Ability::FrontLever),
            can_planche: selected(Ability::Planche),
            is_beginner: selected(Ability::Beginner),
            pull,
            push,
            handstand,
            front_lever,
            planche,
            beginner,
            tiron_score: scores.tiron,
            empuje_score: scores.empuje,
            handstand_score: scores.handstand,
            front_lever_score: scores.front_lever,
            planche_score: scores.planche,
            beginner_score: scores.beginner,
        }
    }

    pub fn scores(&self) -> ScoreResult {
        ScoreResult {
            tiron: self.tiron_score,
            empuje: self.empuje_score,
            handstand: self.handstand_score,
            front_lever: self.front_lever_score,
            planche: self.planche_score,
            beginner: self.beginner_score,
        }
    }

    /// Tiers recomputed from the stored raw scores.
    pub fn levels(&self) -> LevelResult {
        classify_levels(&self.scores())
    }
}

/// Card ratings persisted next to an evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRecord {
    pub evaluation_id: EvaluationId,
    pub user_id: UserId,
    pub tiron: u8,
    pub empuje: u8,
    pub handstand: u8,
    #[serde(rename = "front")]
    pub front_lever: u8,
    pub planche: u8,
    pub arza_card: u8,
    pub total: u16,
    pub clasificacion_general: String,
}

impl StatsRecord {
    pub fn from_outcome(
        evaluation_id: EvaluationId,
        user_id: UserId,
        outcome: &AssessmentOutcome,
    ) -> Self {
        let normalized = &outcome.normalized;
        Self {
            evaluation_id,
            user_id,
            tiron: normalized.get(Category::Tiron),
            empuje: normalized.get(Category::Empuje),
            handstand: normalized.get(Category::Handstand),
            front_lever: normalized.get(Category::FrontLever),
            planche: normalized.get(Category::Planche),
            arza_card: outcome.overall.rating,
            total: outcome.overall.total,
            clasificacion_general: outcome.overall.classification.label().to_string(),
        }
    }
}

/// An evaluation row and its card, stored together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEvaluation {
    pub evaluation: EvaluationRecord,
    pub stats: StatsRecord,
}

impl StoredEvaluation {
    pub fn id(&self) -> &EvaluationId {
        &self.evaluation.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.evaluation.user_id
    }

    pub fn results(&self) -> AssessmentResults {
        AssessmentResults {
            levels: self.evaluation.levels(),
            evaluation: self.evaluation.clone(),
            stats: self.stats.clone(),
        }
    }
}

/// What the results page renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentResults {
    pub evaluation: EvaluationRecord,
    pub stats: StatsRecord,
    pub levels: LevelResult,
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait EvaluationRepository: Send + Sync {
    fn insert(&self, entry: StoredEvaluation) -> Result<StoredEvaluation, RepositoryError>;
    fn fetch(&self, id: &EvaluationId) -> Result<Option<StoredEvaluation>, RepositoryError>;
    fn latest_for_user(&self, user_id: &UserId)
        -> Result<Option<StoredEvaluation>, RepositoryError>;
    fn save_routine(&self, routine: RoutinePlan) -> Result<RoutinePlan, RepositoryError>;
    fn routine_for_user(&self, user_id: &UserId) -> Result<Option<RoutinePlan>, RepositoryError>;
    fn fetch_routine(&self, id: &RoutineId) -> Result<Option<RoutinePlan>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
