use serde::{Deserialize, Serialize};

use super::config::ScoringConfig;
use super::{NormalizedResult, ScoreResult};
use crate::assessment::domain::Category;

/// Composite label shown on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallClassification {
    Inicial,
    Intermedio,
    Elite,
}

impl OverallClassification {
    pub fn label(self) -> &'static str {
        match self {
            OverallClassification::Inicial => "Inicial",
            OverallClassification::Intermedio => "Intermedio",
            OverallClassification::Elite => "Élite",
        }
    }
}

/// The "ARZA card": one rating summarizing every skill category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallResult {
    pub rating: u8,
    pub total: u16,
    pub classification: OverallClassification,
}

impl OverallResult {
    pub fn summary(&self) -> String {
        format!(
            "{} ({} / 99, {} raw points)",
            self.classification.label(),
            self.rating,
            self.total
        )
    }
}

/// Average the five skill ratings into the card rating and label it.
pub fn classify_overall(
    scores: &ScoreResult,
    normalized: &NormalizedResult,
    config: &ScoringConfig,
) -> OverallResult {
    let rating_sum: u32 = Category::SKILLS
        .iter()
        .map(|category| u32::from(normalized.get(*category)))
        .sum();
    let rating = (f64::from(rating_sum) / Category::SKILLS.len() as f64).round() as u8;

    let total = Category::SKILLS
        .iter()
        .map(|category| u16::from(scores.get(*category)))
        .sum();

    let classification = if rating >= config.elite_rating {
        OverallClassification::Elite
    } else if rating >= config.intermediate_rating {
        OverallClassification::Intermedio
    } else {
        OverallClassification::Inicial
    };

    OverallResult {
        rating,
        total,
        classification,
    }
}
