//! Conditional question visibility.
//!
//! Every questionnaire field has one row in [`UNLOCK_RULES`]. A field is unlocked when its
//! own predicate holds and its parent (if any) is unlocked as well, so clearing a parent
//! answer transitively locks the whole chain below it. Locked answers are discarded before
//! scoring.

use std::fmt;

use serde::{Serialize, Serializer};

use super::domain::{
    AssessmentAnswers, Category, FrontLeverElite, FrontLeverLevel, MuscleUpType, PlancheElite,
    PlancheLevel, WeightedDipKg,
};

/// Questionnaire field, addressed by its wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AnswerField {
    PullupsReps,
    WeightedPullupsKg,
    MuscleUpsType,
    WeightedMuscleUpsKg,
    DipsReps,
    WeightedDipsKg,
    ExtremeDipsKg,
    HandstandLevel,
    HandstandOneArm,
    HandstandNinetyDegree,
    HandstandDynamicOneArm,
    FrontLeverLevel,
    FrontLeverDynamic,
    FrontLeverElite,
    FrontLeverVictorian,
    FrontLeverSatSupino,
    PlancheLevel,
    PlancheDynamic,
    PlancheElite,
    PlancheZanetti,
    PlanchePelican,
    StandardPushups,
    KneePushupsLevel,
    AustralianRowsLevel,
}

impl AnswerField {
    pub const fn key(self) -> &'static str {
        match self {
            AnswerField::PullupsReps => "pullups_reps",
            AnswerField::WeightedPullupsKg => "weighted_pullups_kg",
            AnswerField::MuscleUpsType => "muscle_ups_type",
            AnswerField::WeightedMuscleUpsKg => "weighted_muscle_ups_kg",
            AnswerField::DipsReps => "dips_reps",
            AnswerField::WeightedDipsKg => "weighted_dips_kg",
            AnswerField::ExtremeDipsKg => "extreme_dips_kg",
            AnswerField::HandstandLevel => "handstand_level",
            AnswerField::HandstandOneArm => "handstand_one_arm",
            AnswerField::HandstandNinetyDegree => "handstand_90_degree",
            AnswerField::HandstandDynamicOneArm => "handstand_dynamic_one_arm",
            AnswerField::FrontLeverLevel => "front_lever_level",
            AnswerField::FrontLeverDynamic => "front_lever_dynamic",
            AnswerField::FrontLeverElite => "front_lever_elite",
            AnswerField::FrontLeverVictorian => "front_lever_victorian",
            AnswerField::FrontLeverSatSupino => "front_lever_sat_supino",
            AnswerField::PlancheLevel => "planche_level",
            AnswerField::PlancheDynamic => "planche_dynamic",
            AnswerField::PlancheElite => "planche_elite",
            AnswerField::PlancheZanetti => "planche_zanetti",
            AnswerField::PlanchePelican => "planche_pelican",
            AnswerField::StandardPushups => "standard_pushups",
            AnswerField::KneePushupsLevel => "knee_pushups_level",
            AnswerField::AustralianRowsLevel => "australian_rows_level",
        }
    }

    pub const fn category(self) -> Category {
        match self {
            AnswerField::PullupsReps
            | AnswerField::WeightedPullupsKg
            | AnswerField::MuscleUpsType
            | AnswerField::WeightedMuscleUpsKg => Category::Tiron,
            AnswerField::DipsReps | AnswerField::WeightedDipsKg | AnswerField::ExtremeDipsKg => {
                Category::Empuje
            }
            AnswerField::HandstandLevel
            | AnswerField::HandstandOneArm
            | AnswerField::HandstandNinetyDegree
            | AnswerField::HandstandDynamicOneArm => Category::Handstand,
            AnswerField::FrontLeverLevel
            | AnswerField::FrontLeverDynamic
            | AnswerField::FrontLeverElite
            | AnswerField::FrontLeverVictorian
            | AnswerField::FrontLeverSatSupino => Category::FrontLever,
            AnswerField::PlancheLevel
            | AnswerField::PlancheDynamic
            | AnswerField::PlancheElite
            | AnswerField::PlancheZanetti
            | AnswerField::PlanchePelican => Category::Planche,
            AnswerField::StandardPushups
            | AnswerField::KneePushupsLevel
            | AnswerField::AustralianRowsLevel => Category::Beginner,
        }
    }

    /// Toggles are always considered answered; selects need a value.
    pub const fn is_toggle(self) -> bool {
        matches!(
            self,
            AnswerField::HandstandOneArm
                | AnswerField::HandstandNinetyDegree
                | AnswerField::HandstandDynamicOneArm
                | AnswerField::FrontLeverVictorian
                | AnswerField::FrontLeverSatSupino
                | AnswerField::PlancheZanetti
                | AnswerField::PlanchePelican
        )
    }
}

impl Serialize for AnswerField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// One row of the visibility table.
#[derive(Clone, Copy)]
pub struct UnlockRule {
    pub field: AnswerField,
    pub parent: Option<AnswerField>,
    /// Human-readable predicate, surfaced in audits.
    pub condition: &'static str,
    /// Whether the wizard must have this field answered (when unlocked) to move on.
    pub gates_progress: bool,
    predicate: fn(&AssessmentAnswers) -> bool,
}

impl fmt::Debug for UnlockRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnlockRule")
            .field("field", &self.field)
            .field("parent", &self.parent)
            .field("condition", &self.condition)
            .field("gates_progress", &self.gates_progress)
            .finish()
    }
}

const fn root(field: AnswerField, gates_progress: bool) -> UnlockRule {
    UnlockRule {
        field,
        parent: None,
        condition: "always",
        gates_progress,
        predicate: always,
    }
}

const fn child(
    field: AnswerField,
    parent: AnswerField,
    condition: &'static str,
    gates_progress: bool,
    predicate: fn(&AssessmentAnswers) -> bool,
) -> UnlockRule {
    UnlockRule {
        field,
        parent: Some(parent),
        condition,
        gates_progress,
        predicate,
    }
}

pub const UNLOCK_RULES: &[UnlockRule] = &[
    root(AnswerField::PullupsReps, true),
    child(
        AnswerField::WeightedPullupsKg,
        AnswerField::PullupsReps,
        "pullups_reps >= 10",
        true,
        weighted_pull_open,
    ),
    root(AnswerField::MuscleUpsType, false),
    child(
        AnswerField::WeightedMuscleUpsKg,
        AnswerField::MuscleUpsType,
        "muscle_ups_type in {strict, multiple_strict}",
        true,
        weighted_muscle_up_open,
    ),
    root(AnswerField::DipsReps, true),
    child(
        AnswerField::WeightedDipsKg,
        AnswerField::DipsReps,
        "dips_reps >= 8",
        true,
        weighted_dips_open,
    ),
    child(
        AnswerField::ExtremeDipsKg,
        AnswerField::WeightedDipsKg,
        "weighted_dips_kg in {single_60_80, multiple_60_80}",
        true,
        extreme_dips_open,
    ),
    root(AnswerField::HandstandLevel, true),
    child(
        AnswerField::HandstandOneArm,
        AnswerField::HandstandLevel,
        "handstand_level in {consistente, hspu}",
        false,
        handstand_variations,
    ),
    child(
        AnswerField::HandstandNinetyDegree,
        AnswerField::HandstandLevel,
        "handstand_level in {consistente, hspu}",
        false,
        handstand_variations,
    ),
    child(
        AnswerField::HandstandDynamicOneArm,
        AnswerField::HandstandLevel,
        "handstand_level in {consistente, hspu}",
        false,
        handstand_variations,
    ),
    root(AnswerField::FrontLeverLevel, true),
    child(
        AnswerField::FrontLeverDynamic,
        AnswerField::FrontLeverLevel,
        "front_lever_level in {tuck, tuck_advanced, front_lever}",
        true,
        front_lever_dynamic_open,
    ),
    child(
        AnswerField::FrontLeverElite,
        AnswerField::FrontLeverLevel,
        "front_lever_level = front_lever_touch",
        true,
        front_lever_elite_open,
    ),
    child(
        AnswerField::FrontLeverVictorian,
        AnswerField::FrontLeverElite,
        "front_lever_elite = sat",
        false,
        front_lever_sat,
    ),
    child(
        AnswerField::FrontLeverSatSupino,
        AnswerField::FrontLeverElite,
        "front_lever_elite = sat",
        false,
        front_lever_sat,
    ),
    root(AnswerField::PlancheLevel, true),
    child(
        AnswerField::PlancheDynamic,
        AnswerField::PlancheLevel,
        "planche_level in {lean, tuck, advanced_tuck, straddle}",
        true,
        planche_dynamic_open,
    ),
    child(
        AnswerField::PlancheElite,
        AnswerField::PlancheLevel,
        "planche_level = full",
        true,
        planche_elite_open,
    ),
    child(
        AnswerField::PlancheZanetti,
        AnswerField::PlancheElite,
        "planche_elite = maltese",
        false,
        planche_maltese,
    ),
    child(
        AnswerField::PlanchePelican,
        AnswerField::PlancheElite,
        "planche_elite = maltese",
        false,
        planche_maltese,
    ),
    root(AnswerField::StandardPushups, true),
    root(AnswerField::KneePushupsLevel, true),
    root(AnswerField::AustralianRowsLevel, true),
];

fn always(_: &AssessmentAnswers) -> bool {
    true
}

fn weighted_pull_open(answers: &AssessmentAnswers) -> bool {
    answers
        .pull
        .reps
        .given()
        .map_or(false, |reps| reps.reps() >= 10)
}

fn weighted_muscle_up_open(answers: &AssessmentAnswers) -> bool {
    answers
        .pull
        .muscle_up
        .given()
        .map_or(false, MuscleUpType::is_strict)
}

fn weighted_dips_open(answers: &AssessmentAnswers) -> bool {
    answers
        .push
        .reps
        .given()
        .map_or(false, |reps| reps.reps() >= 8)
}

fn extreme_dips_open(answers: &AssessmentAnswers) -> bool {
    answers
        .push
        .weighted_kg
        .given()
        .map_or(false, WeightedDipKg::is_top_tier)
}

fn front_lever_dynamic_open(answers: &AssessmentAnswers) -> bool {
    matches!(
        answers.front_lever.level.given(),
        Some(FrontLeverLevel::Tuck | FrontLeverLevel::TuckAdvanced | FrontLeverLevel::FrontLever)
    )
}

fn front_lever_elite_open(answers: &AssessmentAnswers) -> bool {
    answers
        .front_lever
        .level
        .is(FrontLeverLevel::FrontLeverTouch)
}

fn planche_dynamic_open(answers: &AssessmentAnswers) -> bool {
    matches!(
        answers.planche.level.given(),
        Some(
            PlancheLevel::Lean
                | PlancheLevel::Tuck
                | PlancheLevel::AdvancedTuck
                | PlancheLevel::Straddle
        )
    )
}

fn planche_elite_open(answers: &AssessmentAnswers) -> bool {
    answers.planche.level.is(PlancheLevel::Full)
}

fn handstand_variations(answers: &AssessmentAnswers) -> bool {
    answers
        .handstand
        .level
        .given()
        .map_or(false, |level| level.unlocks_variations())
}

fn front_lever_sat(answers: &AssessmentAnswers) -> bool {
    answers.front_lever.elite.is(FrontLeverElite::Sat)
}

fn planche_maltese(answers: &AssessmentAnswers) -> bool {
    answers.planche.elite.is(PlancheElite::Maltese)
}

pub fn rule_for(field: AnswerField) -> Option<&'static UnlockRule> {
    UNLOCK_RULES.iter().find(|rule| rule.field == field)
}

pub fn is_unlocked(field: AnswerField, answers: &AssessmentAnswers) -> bool {
    let Some(rule) = rule_for(field) else {
        return true;
    };

    (rule.predicate)(answers) && rule.parent.map_or(true, |parent| is_unlocked(parent, answers))
}

/// Whether the field carries a value; toggles always do.
pub fn is_answered(field: AnswerField, answers: &AssessmentAnswers) -> bool {
    match field {
        AnswerField::PullupsReps => answers.pull.reps.is_answered(),
        AnswerField::WeightedPullupsKg => answers.pull.weighted_kg.is_answered(),
        AnswerField::MuscleUpsType => answers.pull.muscle_up.is_answered(),
        AnswerField::WeightedMuscleUpsKg => answers.pull.weighted_muscle_up_kg.is_answered(),
        AnswerField::DipsReps => answers.push.reps.is_answered(),
        AnswerField::WeightedDipsKg => answers.push.weighted_kg.is_answered(),
        AnswerField::ExtremeDipsKg => answers.push.extreme_kg.is_answered(),
        AnswerField::HandstandLevel => answers.handstand.level.is_answered(),
        AnswerField::FrontLeverLevel => answers.front_lever.level.is_answered(),
        AnswerField::FrontLeverDynamic => answers.front_lever.dynamic.is_answered(),
        AnswerField::FrontLeverElite => answers.front_lever.elite.is_answered(),
        AnswerField::PlancheLevel => answers.planche.level.is_answered(),
        AnswerField::PlancheDynamic => answers.planche.dynamic.is_answered(),
        AnswerField::PlancheElite => answers.planche.elite.is_answered(),
        AnswerField::StandardPushups => answers.beginner.standard_pushups.is_answered(),
        AnswerField::KneePushupsLevel => answers.beginner.knee_pushups.is_answered(),
        AnswerField::AustralianRowsLevel => answers.beginner.australian_rows.is_answered(),
        AnswerField::HandstandOneArm
        | AnswerField::HandstandNinetyDegree
        | AnswerField::HandstandDynamicOneArm
        | AnswerField::FrontLeverVictorian
        | AnswerField::FrontLeverSatSupino
        | AnswerField::PlancheZanetti
        | AnswerField::PlanchePelican => true,
    }
}

/// Fields the wizard should render: the block's ability is selected and the field is unlocked.
pub fn visible_fields(answers: &AssessmentAnswers) -> Vec<AnswerField> {
    UNLOCK_RULES
        .iter()
        .map(|rule| rule.field)
        .filter(|field| answers.abilities.contains(field.category().ability()))
        .filter(|field| is_unlocked(*field, answers))
        .collect()
}

/// Copy of `answers` with every locked field reset to its unanswered state.
pub fn effective_answers(answers: &AssessmentAnswers) -> AssessmentAnswers {
    let mut effective = answers.clone();
    for rule in UNLOCK_RULES {
        if !is_unlocked(rule.field, answers) {
            clear(rule.field, &mut effective);
        }
    }
    effective
}

fn clear(field: AnswerField, answers: &mut AssessmentAnswers) {
    match field {
        AnswerField::PullupsReps => answers.pull.reps = Default::default(),
        AnswerField::WeightedPullupsKg => answers.pull.weighted_kg = Default::default(),
        AnswerField::MuscleUpsType => answers.pull.muscle_up = Default::default(),
        AnswerField::WeightedMuscleUpsKg => {
            answers.pull.weighted_muscle_up_kg = Default::default()
        }
        AnswerField::DipsReps => answers.push.reps = Default::default(),
        AnswerField::WeightedDipsKg => answers.push.weighted_kg = Default::default(),
        AnswerField::ExtremeDipsKg => answers.push.extreme_kg = Default::default(),
        AnswerField::HandstandLevel => answers.handstand.level = Default::default(),
        AnswerField::HandstandOneArm => answers.handstand.one_arm = false,
        AnswerField::HandstandNinetyDegree => answers.handstand.ninety_degree = false,
        AnswerField::HandstandDynamicOneArm => answers.handstand.dynamic_one_arm = false,
        AnswerField::FrontLeverLevel => answers.front_lever.level = Default::default(),
        AnswerField::FrontLeverDynamic => answers.front_lever.dynamic = Default::default(),
        AnswerField::FrontLeverElite => answers.front_lever.elite = Default::default(),
        AnswerField::FrontLeverVictorian => answers.front_lever.victorian = false,
        AnswerField::FrontLeverSatSupino => answers.front_lever.sat_supino = false,
        AnswerField::PlancheLevel => answers.planche.level = Default::default(),
        AnswerField::PlancheDynamic => answers.planche.dynamic = Default::default(),
        AnswerField::PlancheElite => answers.planche.elite = Default::default(),
        AnswerField::PlancheZanetti => answers.planche.zanetti = false,
        AnswerField::PlanchePelican => answers.planche.pelican = false,
        AnswerField::StandardPushups => answers.beginner.standard_pushups = Default::default(),
        AnswerField::KneePushupsLevel => answers.beginner.knee_pushups = Default::default(),
        AnswerField::AustralianRowsLevel => answers.beginner.australian_rows = Default::default(),
    }
}
