use serde::{Deserialize, Serialize};

use super::{NormalizedResult, ScoreResult};
use crate::assessment::domain::Category;

const CARD_CEILING: f64 = 99.0;
const CARD_EXPONENT: f64 = 0.6;

/// Map a raw score onto the 0-99 card scale: `round(99 * (raw / max)^0.6)`.
///
/// The ratio is capped at 1, so scores above the category maximum (the beginner floor)
/// rate 99 instead of overflowing the scale.
pub fn normalize(raw: u32, max: u32) -> u8 {
    if raw == 0 || max == 0 {
        return 0;
    }

    let ratio = (f64::from(raw) / f64::from(max)).min(1.0);
    (CARD_CEILING * ratio.powf(CARD_EXPONENT)).round() as u8
}

/// Highest reachable raw score per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMaxima {
    pub tiron: u8,
    pub empuje: u8,
    pub handstand: u8,
    pub front_lever: u8,
    pub planche: u8,
    pub beginner: u8,
}

impl Default for CategoryMaxima {
    fn default() -> Self {
        Self {
            tiron: 16,
            empuje: 17,
            handstand: 6,
            front_lever: 10,
            planche: 10,
            beginner: 11,
        }
    }
}

impl CategoryMaxima {
    pub fn max_for(&self, category: Category) -> u8 {
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

pub fn normalize_scores(scores: &ScoreResult, maxima: &CategoryMaxima) -> NormalizedResult {
    let rate = |category| {
        normalize(
            u32::from(scores.get(category)),
            u32::from(maxima.max_for(category)),
        )
    };

    NormalizedResult {
        tiron: rate(Category::Tiron),
        empuje: rate(Category::Empuje),
        handstand: rate(Category::Handstand),
        front_lever: rate(Category::FrontLever),
        planche: rate(Category::Planche),
        beginner: rate(Category::Beginner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_raw_or_zero_max_rates_zero() {
        assert_eq!(normalize(0, 16), 0);
        assert_eq!(normalize(5, 0), 0);
    }

    #[test]
    fn full_marks_rate_ninety_nine() {
        let maxima = CategoryMaxima::default();
        for category in Category::ALL {
            let max = u32::from(maxima.max_for(category));
            assert_eq!(normalize(max, max), 99, "{category:?}");
        }
    }

    #[test]
    fn rating_grows_with_raw_score() {
        let mut previous = 0;
        for raw in 1..=17 {
            let rating = normalize(raw, 17);
            assert!(rating >= previous, "raw {raw} dropped to {rating}");
            previous = rating;
        }
        assert_eq!(normalize(8, 16), 65);
        assert_eq!(normalize(1, 16), 19);
    }

    #[test]
    fn beginner_floor_is_capped() {
        assert_eq!(normalize(20, 16), 99);
        assert_eq!(normalize(20, 17), 99);
    }
}
