mod config;
mod levels;
mod normalize;
mod overall;
mod rules;

pub use config::ScoringConfig;
pub use levels::{classify_levels, level_for, LevelResult};
pub use normalize::{normalize, normalize_scores, CategoryMaxima};
pub use overall::{classify_overall, OverallClassification, OverallResult};

use serde::{Deserialize, Serialize};

use super::domain::{AssessmentAnswers, Category};
use super::unlock::AnswerField;
use super::validation::{validate, ValidationErrors};

/// Stateless evaluator that applies the scoring configuration to an answer set.
#[derive(Debug, Clone, Default)]
pub struct AssessmentEngine {
    config: ScoringConfig,
}

impl AssessmentEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn evaluate(&self, answers: &AssessmentAnswers) -> AssessmentOutcome {
        let validation = validate(answers);
        let (scores, components) = rules::score_answers(answers);
        let normalized = normalize_scores(&scores, &self.config.maxima);
        let levels = classify_levels(&scores);
        let mut overall = classify_overall(&scores, &normalized, &self.config);
        // The beginner floor inflates the Tirón and Empuje ratings.
        if answers.abilities.is_beginner() {
            overall.classification = OverallClassification::Inicial;
        }

        AssessmentOutcome {
            scores,
            normalized,
            levels,
            overall,
            components,
            validation,
        }
    }
}

/// Raw additive points per category.
pub fn score(answers: &AssessmentAnswers) -> ScoreResult {
    rules::score_answers(answers).0
}

/// Discrete contribution to a category score, kept for audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<AnswerField>,
    pub points: u8,
    pub note: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub tiron: u8,
    pub empuje: u8,
    pub handstand: u8,
    pub front_lever: u8,
    pub planche: u8,
    pub beginner: u8,
}

impl ScoreResult {
    pub fn get(&self, category: Category) -> u8 {
        match category {
            Category::Tiron => self.tiron,
            Category::Empuje => self.empuje,
            Category::Handstand => self.handstand,
            Category::FrontLever => self.front_lever,
            Category::Planche => self.planche,
            Category::Beginner => self.beginner,
        }
    }
}

/// Card ratings (0-99) per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedResult {
    pub tiron: u8,
    pub empuje: u8,
    pub handstand: u8,
    pub front_lever: u8,
    pub planche: u8,
    pub beginner: u8,
}

impl NormalizedResult {
    pub fn get(&self, category: Category) -> u8 {
        match category {
            Category::Tiron => self.tiron,
            Category::Empuje => self.empuje,
            Category::Handstand => self.handstand,
            Category::FrontLever => self.front_lever,
            Category::Planche => self.planche,
            Category::Beginner => self.beginner,
        }
    }
}

/// Everything the engine derives from one answer set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentOutcome {
    pub scores: ScoreResult,
    pub normalized: NormalizedResult,
    pub levels: LevelResult,
    pub overall: OverallResult,
    pub components: Vec<ScoreComponent>,
    #[serde(skip_serializing_if = "ValidationErrors::is_empty")]
    pub validation: ValidationErrors,
}

impl AssessmentOutcome {
    pub fn is_complete(&self) -> bool {
        self.validation.is_empty()
    }
}
