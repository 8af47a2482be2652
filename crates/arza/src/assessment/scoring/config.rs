use serde::{Deserialize, Serialize};

use super::normalize::CategoryMaxima;

/// Tunables for card normalization and the overall label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub maxima: CategoryMaxima,
    /// Card rating at which a subject stops being "Inicial".
    pub intermediate_rating: u8,
    /// Card rating at which a subject becomes "Élite".
    pub elite_rating: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            maxima: CategoryMaxima::default(),
            intermediate_rating: 35,
            elite_rating: 70,
        }
    }
}
