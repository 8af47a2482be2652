use serde::{Deserialize, Serialize};

use super::domain::{AbilitySet, AssessmentAnswers, Category};
use super::unlock::{self, AnswerField, UNLOCK_RULES};
use super::validation::validate;

/// Questionnaire page, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardBlock {
    Skills,
    Tiron,
    Empuje,
    Handstand,
    FrontLever,
    Planche,
    Beginner,
    Finish,
}

impl WizardBlock {
    pub const ORDER: [WizardBlock; 8] = [
        WizardBlock::Skills,
        WizardBlock::Tiron,
        WizardBlock::Empuje,
        WizardBlock::Handstand,
        WizardBlock::FrontLever,
        WizardBlock::Planche,
        WizardBlock::Beginner,
        WizardBlock::Finish,
    ];

    pub const fn category(self) -> Option<Category> {
        match self {
            WizardBlock::Skills | WizardBlock::Finish => None,
            WizardBlock::Tiron => Some(Category::Tiron),
            WizardBlock::Empuje => Some(Category::Empuje),
            WizardBlock::Handstand => Some(Category::Handstand),
            WizardBlock::FrontLever => Some(Category::FrontLever),
            WizardBlock::Planche => Some(Category::Planche),
            WizardBlock::Beginner => Some(Category::Beginner),
        }
    }

    fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|block| *block == self)
            .unwrap_or_default()
    }

    fn is_enabled(self, abilities: &AbilitySet) -> bool {
        match self.category() {
            Some(category) => abilities.contains(category.ability()),
            None => true,
        }
    }
}

/// Caller-owned position in the questionnaire. The engine never stores one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardCursor {
    block: WizardBlock,
}

impl Default for WizardCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardCursor {
    pub const TOTAL_STEPS: usize = WizardBlock::ORDER.len();

    pub fn new() -> Self {
        Self {
            block: WizardBlock::Skills,
        }
    }

    pub fn at(block: WizardBlock) -> Self {
        Self { block }
    }

    pub fn block(&self) -> WizardBlock {
        self.block
    }

    pub fn step(&self) -> usize {
        self.block.index() + 1
    }

    pub fn progress_percent(&self) -> u8 {
        ((self.step() as f64 / Self::TOTAL_STEPS as f64) * 100.0).round() as u8
    }

    /// Move to the next block whose ability is selected, ending at `Finish`.
    pub fn next(&mut self, abilities: &AbilitySet) -> WizardBlock {
        self.block = WizardBlock::ORDER[self.block.index() + 1..]
            .iter()
            .copied()
            .find(|block| block.is_enabled(abilities))
            .unwrap_or(WizardBlock::Finish);
        self.block
    }

    /// Move back to the previous selected block, ending at `Skills`.
    pub fn previous(&mut self, abilities: &AbilitySet) -> WizardBlock {
        self.block = WizardBlock::ORDER[..self.block.index()]
            .iter()
            .rev()
            .copied()
            .find(|block| block.is_enabled(abilities))
            .unwrap_or(WizardBlock::Skills);
        self.block
    }

    /// Unlocked, progress-gating questions of the current block that still lack an answer.
    pub fn pending_fields(&self, answers: &AssessmentAnswers) -> Vec<AnswerField> {
        let Some(category) = self.block.category() else {
            return Vec::new();
        };

        UNLOCK_RULES
            .iter()
            .filter(|rule| rule.gates_progress && rule.field.category() == category)
            .map(|rule| rule.field)
            .filter(|field| unlock::is_unlocked(*field, answers))
            .filter(|field| !unlock::is_answered(*field, answers))
            .collect()
    }

    pub fn can_advance(&self, answers: &AssessmentAnswers) -> bool {
        match self.block {
            WizardBlock::Skills => !answers.abilities.is_empty(),
            WizardBlock::Finish => validate(answers).is_empty(),
            _ => self.pending_fields(answers).is_empty(),
        }
    }
}
