use serde::{Deserialize, Serialize};

use super::ScoreResult;
use crate::assessment::domain::Category;

/// Training tier per skill category, used to pick exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelResult {
    pub tiron: u8,
    pub empuje: u8,
    pub handstand: u8,
    pub front_lever: u8,
    pub planche: u8,
}

impl LevelResult {
    /// Beginner has no tier of its own.
    pub fn level_for(&self, category: Category) -> Option<u8> {
        match category {
            Category::Tiron => Some(self.tiron),
            Category::Empuje => Some(self.empuje),
            Category::Handstand => Some(self.handstand),
            Category::FrontLever => Some(self.front_lever),
            Category::Planche => Some(self.planche),
            Category::Beginner => None,
        }
    }
}

impl Default for LevelResult {
    fn default() -> Self {
        Self {
            tiron: 1,
            empuje: 1,
            handstand: 1,
            front_lever: 1,
            planche: 1,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct LevelBand {
    min: u8,
    max: Option<u8>,
    level: u8,
}

const fn band(min: u8, max: u8, level: u8) -> LevelBand {
    LevelBand {
        min,
        max: Some(max),
        level,
    }
}

const fn from(min: u8, level: u8) -> LevelBand {
    LevelBand {
        min,
        max: None,
        level,
    }
}

const TIRON_BANDS: &[LevelBand] = &[band(0, 7, 1), band(8, 12, 2), from(13, 3)];

const EMPUJE_BANDS: &[LevelBand] = &[band(0, 7, 1), band(8, 13, 2), from(14, 3)];

const FRONT_LEVER_BANDS: &[LevelBand] = &[
    band(0, 2, 1),
    band(3, 3, 2),
    band(4, 4, 3),
    band(5, 5, 4),
    band(6, 7, 5),
    band(8, 8, 6),
    from(9, 7),
];

const PLANCHE_BANDS: &[LevelBand] = &[
    band(0, 2, 1),
    band(3, 3, 2),
    band(4, 4, 3),
    band(5, 5, 4),
    band(6, 6, 5),
    band(7, 7, 6),
    band(8, 8, 7),
    from(9, 8),
];

const HANDSTAND_MIN_LEVEL: u8 = 1;
const HANDSTAND_MAX_LEVEL: u8 = 6;

fn classify(bands: &[LevelBand], score: u8) -> u8 {
    bands
        .iter()
        .find(|band| score >= band.min && band.max.map_or(true, |max| score <= max))
        .map_or(1, |band| band.level)
}

/// Tier for a single category's raw score. `None` for the beginner category.
pub fn level_for(category: Category, score: u8) -> Option<u8> {
    match category {
        Category::Tiron => Some(classify(TIRON_BANDS, score)),
        Category::Empuje => Some(classify(EMPUJE_BANDS, score)),
        Category::Handstand => Some(score.clamp(HANDSTAND_MIN_LEVEL, HANDSTAND_MAX_LEVEL)),
        Category::FrontLever => Some(classify(FRONT_LEVER_BANDS, score)),
        Category::Planche => Some(classify(PLANCHE_BANDS, score)),
        Category::Beginner => None,
    }
}

/// Tiers are derived from raw scores, never from card ratings.
pub fn classify_levels(scores: &ScoreResult) -> LevelResult {
    let tier = |category| level_for(category, scores.get(category)).unwrap_or(1);

    LevelResult {
        tiron: tier(Category::Tiron),
        empuje: tier(Category::Empuje),
        handstand: tier(Category::Handstand),
        front_lever: tier(Category::FrontLever),
        planche: tier(Category::Planche),
    }
}
