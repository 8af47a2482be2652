use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::domain::{Ability, AssessmentAnswers};
use super::unlock::{self, AnswerField};

/// Field key to human-readable message. Empty means the payload passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.fields().collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Primary questions that must be answered once their block's ability is selected.
const REQUIRED_ANSWERS: &[(Ability, AnswerField, &str)] = &[
    (
        Ability::Pullups,
        AnswerField::PullupsReps,
        "Select how many pull-ups you can do",
    ),
    (
        Ability::Pullups,
        AnswerField::MuscleUpsType,
        "Select your muscle-up type",
    ),
    (
        Ability::Dips,
        AnswerField::DipsReps,
        "Select how many dips you can do",
    ),
    (
        Ability::Handstand,
        AnswerField::HandstandLevel,
        "Select your handstand level",
    ),
    (
        Ability::FrontLever,
        AnswerField::FrontLeverLevel,
        "Select your front lever level",
    ),
    (
        Ability::Planche,
        AnswerField::PlancheLevel,
        "Select your planche level",
    ),
    (
        Ability::Beginner,
        AnswerField::StandardPushups,
        "Tell us whether you can do standard push-ups",
    ),
    (
        Ability::Beginner,
        AnswerField::KneePushupsLevel,
        "Select your knee push-up volume",
    ),
    (
        Ability::Beginner,
        AnswerField::AustralianRowsLevel,
        "Select your australian row volume",
    ),
];

pub const ABILITIES_FIELD: &str = "abilities";

/// Check that every selected block has its primary questions answered.
///
/// Second-order conditional fields are never required here; the wizard gates those.
pub fn validate(answers: &AssessmentAnswers) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if answers.abilities.is_empty() {
        errors.insert(ABILITIES_FIELD, "Select at least one ability");
    }

    for (ability, field, message) in REQUIRED_ANSWERS {
        if answers.abilities.contains(*ability) && !unlock::is_answered(*field, answers) {
            errors.insert(field.key(), *message);
        }
    }

    errors
}
