use super::common::*;
use crate::assessment::responses::AssessmentResponses;
use crate::assessment::scoring::{
    score, AssessmentEngine, LevelResult, OverallClassification, ScoringConfig,
};
use crate::assessment::unlock::AnswerField;

fn evaluate(responses: &AssessmentResponses) -> crate::assessment::AssessmentOutcome {
    AssessmentEngine::default().evaluate(&responses.answers())
}

#[test]
fn pull_block_scores_reps_muscle_up_and_weighted_muscle_up() {
    let outcome = evaluate(&pull_responses());

    assert!(outcome.is_complete());
    assert_eq!(outcome.scores.tiron, 8);
    assert_eq!(outcome.normalized.tiron, 65);
    assert_eq!(outcome.levels.tiron, 2);
    assert_eq!(outcome.scores.empuje, 0);
    assert_eq!(outcome.overall.rating, 13);
    assert_eq!(
        outcome.overall.classification,
        OverallClassification::Inicial
    );
}

#[test]
fn dips_block_reaches_the_category_maximum() {
    let outcome = evaluate(&dips_responses());

    assert_eq!(outcome.scores.empuje, 17);
    assert_eq!(outcome.normalized.empuje, 99);
    assert_eq!(outcome.levels.empuje, 3);
}

#[test]
fn handstand_variations_add_one_point_each() {
    let outcome = evaluate(&handstand_responses());

    assert_eq!(outcome.scores.handstand, 5);
    assert_eq!(outcome.normalized.handstand, 89);
    assert_eq!(outcome.levels.handstand, 5);
}

#[test]
fn beginner_gets_floor_scores_and_stays_inicial() {
    let outcome = evaluate(&beginner_responses());

    assert!(outcome.is_complete());
    assert_eq!(outcome.scores.tiron, 20);
    assert_eq!(outcome.scores.empuje, 20);
    assert_eq!(outcome.scores.beginner, 10);
    assert_eq!(outcome.normalized.tiron, 99);
    assert_eq!(outcome.overall.rating, 40);
    assert_eq!(outcome.overall.total, 40);
    assert_eq!(
        outcome.overall.classification,
        OverallClassification::Inicial
    );

    let floors: Vec<_> = outcome
        .components
        .iter()
        .filter(|component| component.field.is_none())
        .collect();
    assert_eq!(floors.len(), 2);
}

#[test]
fn beginner_floor_ignores_populated_pull_and_dip_answers() {
    let responses = AssessmentResponses {
        pullups_reps: code("35"),
        weighted_pullups_kg: code("45"),
        muscle_ups_type: code("multiple_strict"),
        dips_reps: code("40"),
        weighted_dips_kg: code("multiple_60_80"),
        ..beginner_responses()
    };

    let scores = score(&responses.answers());

    assert_eq!((scores.tiron, scores.empuje), (20, 20));
    assert_eq!(scores.beginner, 10);
}

#[test]
fn none_scores_the_same_wherever_it_is_listed() {
    let with = |abilities: [&str; 2]| AssessmentResponses {
        pullups_reps: code("35"),
        dips_reps: code("8"),
        ..AssessmentResponses::with_abilities(abilities)
    };

    let trailing = score(&with(["pullups", "none"]).answers());
    let leading = score(&with(["none", "pullups"]).answers());

    assert_eq!(leading, trailing);
    assert_eq!((leading.tiron, leading.empuje), (20, 20));
}

#[test]
fn elite_subject_maxes_every_card() {
    let outcome = evaluate(&elite_responses());

    assert_eq!(outcome.scores.tiron, 16);
    assert_eq!(outcome.scores.empuje, 17);
    assert_eq!(outcome.scores.handstand, 6);
    assert_eq!(outcome.scores.front_lever, 10);
    assert_eq!(outcome.scores.planche, 10);
    assert_eq!(outcome.overall.rating, 99);
    assert_eq!(outcome.overall.total, 59);
    assert_eq!(outcome.overall.classification, OverallClassification::Elite);
    assert_eq!(
        outcome.levels,
        LevelResult {
            tiron: 3,
            empuje: 3,
            handstand: 6,
            front_lever: 7,
            planche: 8,
        }
    );
}

#[test]
fn two_maxed_blocks_land_in_intermedio() {
    let responses = AssessmentResponses {
        pullups_reps: code("35"),
        weighted_pullups_kg: code("45"),
        muscle_ups_type: code("multiple_strict"),
        weighted_muscle_ups_kg: code("20"),
        dips_reps: code("40"),
        weighted_dips_kg: code("multiple_60_80"),
        extreme_dips_kg: code("130"),
        ..AssessmentResponses::with_abilities(["pullups", "dips"])
    };

    let outcome = evaluate(&responses);

    assert_eq!(outcome.overall.rating, 40);
    assert_eq!(
        outcome.overall.classification,
        OverallClassification::Intermedio
    );
    assert_eq!(outcome.overall.summary(), "Intermedio (40 / 99, 33 raw points)");
}

#[test]
fn classification_thresholds_follow_config() {
    let engine = AssessmentEngine::new(ScoringConfig {
        intermediate_rating: 10,
        elite_rating: 60,
        ..ScoringConfig::default()
    });

    let outcome = engine.evaluate(&pull_responses().answers());

    assert_eq!(outcome.overall.rating, 13);
    assert_eq!(
        outcome.overall.classification,
        OverallClassification::Intermedio
    );
}

#[test]
fn locked_pull_answers_do_not_score() {
    let responses = AssessmentResponses {
        pullups_reps: code("3"),
        weighted_pullups_kg: code("45"),
        muscle_ups_type: code("kipping"),
        weighted_muscle_ups_kg: code("20"),
        ..AssessmentResponses::with_abilities(["pullups"])
    };

    let scores = score(&responses.answers());

    assert_eq!(scores.tiron, 2);
}

#[test]
fn extreme_dips_need_a_top_weighted_bracket() {
    let responses = AssessmentResponses {
        dips_reps: code("18"),
        weighted_dips_kg: code("single_40_60"),
        extreme_dips_kg: code("130"),
        ..AssessmentResponses::with_abilities(["dips"])
    };

    assert_eq!(score(&responses.answers()).empuje, 8);
}

#[test]
fn heavy_dip_brackets_score_nothing_at_low_rep_tier() {
    let responses = AssessmentResponses {
        dips_reps: code("18"),
        weighted_dips_kg: code("single_60_80"),
        extreme_dips_kg: code("100"),
        ..AssessmentResponses::with_abilities(["dips"])
    };

    let outcome = evaluate(&responses);

    assert_eq!(outcome.scores.empuje, 8);
    assert!(!outcome
        .components
        .iter()
        .any(|component| component.field == Some(AnswerField::WeightedDipsKg)));
}

#[test]
fn front_lever_elite_stays_locked_below_touch() {
    let responses = AssessmentResponses {
        front_lever_level: code("tuck_advanced"),
        front_lever_dynamic: code("pullup"),
        front_lever_elite: code("sat"),
        front_lever_victorian: true,
        ..AssessmentResponses::with_abilities(["front_lever"])
    };

    let outcome = evaluate(&responses);

    assert_eq!(outcome.scores.front_lever, 5);
    assert_eq!(outcome.levels.front_lever, 4);
}

#[test]
fn planche_maltese_unlocks_bonus_toggles() {
    let responses = AssessmentResponses {
        planche_level: code("full"),
        planche_elite: code("maltese"),
        planche_zanetti: true,
        ..AssessmentResponses::with_abilities(["planche"])
    };

    let outcome = evaluate(&responses);

    assert_eq!(outcome.scores.planche, 9);
    assert_eq!(outcome.levels.planche, 8);
}

#[test]
fn planche_lean_opens_dynamic_progressions() {
    let responses = AssessmentResponses {
        planche_level: code("lean"),
        planche_dynamic: code("straddle_negative"),
        ..AssessmentResponses::with_abilities(["planche"])
    };

    let outcome = evaluate(&responses);

    assert_eq!(outcome.scores.planche, 4);
    assert_eq!(outcome.levels.planche, 3);
}

#[test]
fn unrecognized_codes_score_nothing_and_fail_nothing() {
    let responses = AssessmentResponses {
        pullups_reps: code("a lot"),
        muscle_ups_type: code("strict"),
        ..AssessmentResponses::with_abilities(["pullups"])
    };

    let outcome = evaluate(&responses);

    assert_eq!(outcome.scores.tiron, 2);
    assert!(outcome.is_complete());
}

#[test]
fn components_sum_to_category_scores() {
    let outcome = evaluate(&elite_responses());

    let tiron: u32 = outcome
        .components
        .iter()
        .filter(|component| component.category == crate::assessment::Category::Tiron)
        .map(|component| u32::from(component.points))
        .sum();

    assert_eq!(tiron, u32::from(outcome.scores.tiron));
    assert!(outcome
        .components
        .iter()
        .all(|component| component.points > 0));
}
