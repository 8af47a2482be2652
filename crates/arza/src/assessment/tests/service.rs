use super::common::*;
use crate::assessment::catalog::InMemoryCatalog;
use crate::assessment::record::{EvaluationId, RepositoryError, UserId};
use crate::assessment::responses::AssessmentResponses;
use crate::assessment::routine::{RoutineError, RoutineId, TrainingAvailability};
use crate::assessment::scoring::ScoringConfig;
use crate::assessment::service::{AssessmentService, AssessmentServiceError};
use std::sync::Arc;

fn schedule(days: u8, minutes: u16) -> TrainingAvailability {
    TrainingAvailability::new(days, minutes).expect("supported schedule")
}

#[test]
fn submit_persists_evaluation_and_card() {
    let (service, repository) = build_service();

    let results = service
        .submit(UserId("user-1".to_string()), &pull_responses())
        .expect("submission succeeds");

    assert_eq!(repository.evaluation_count(), 1);
    assert_eq!(results.evaluation.tiron_score, 8);
    assert_eq!(results.evaluation.pull.pullups_reps, Some(18));
    assert_eq!(results.evaluation.pull.weighted_muscle_ups_kg, Some(15));
    assert!(results.evaluation.can_pullups);
    assert!(!results.evaluation.can_dips);
    assert_eq!(results.stats.tiron, 65);
    assert_eq!(results.stats.arza_card, 13);
    assert_eq!(results.stats.clasificacion_general, "Inicial");
    assert_eq!(results.levels.tiron, 2);
}

#[test]
fn submit_rejects_incomplete_answers_without_storing() {
    let (service, repository) = build_service();
    let responses = AssessmentResponses::with_abilities(["planche"]);

    match service.submit(UserId("user-1".to_string()), &responses) {
        Err(AssessmentServiceError::Validation(errors)) => {
            assert!(errors.contains("planche_level"));
        }
        other => panic!("expected validation errors, got {other:?}"),
    }
    assert_eq!(repository.evaluation_count(), 0);
}

#[test]
fn submit_propagates_repository_conflicts() {
    let service = AssessmentService::new(
        Arc::new(ConflictRepository),
        Arc::new(InMemoryCatalog::standard()),
        ScoringConfig::default(),
    );

    match service.submit(UserId("user-1".to_string()), &pull_responses()) {
        Err(AssessmentServiceError::Repository(RepositoryError::Conflict)) => {}
        other => panic!("expected conflict, got {other:?}"),
    }
}

#[test]
fn records_only_keep_effective_answers() {
    let (service, _) = build_service();
    let responses = AssessmentResponses {
        dips_reps: code("18"),
        weighted_dips_kg: code("single_40_60"),
        extreme_dips_kg: code("130"),
        pullups_reps: code("35"),
        ..AssessmentResponses::with_abilities(["dips"])
    };

    let results = service
        .submit(UserId("user-2".to_string()), &responses)
        .expect("submission succeeds");

    let push = &results.evaluation.push;
    assert_eq!(push.dips_reps, Some(18));
    assert_eq!(push.weighted_dips_kg, Some(60));
    assert!(!push.weighted_dips_reps);
    assert_eq!(push.extreme_dips_kg, None);
    assert_eq!(results.evaluation.pull.pullups_reps, None);
    assert_eq!(results.evaluation.empuje_score, 8);
}

#[test]
fn results_and_latest_read_back_stored_evaluations() {
    let (service, _) = build_service();
    let user = UserId("user-3".to_string());

    let first = service
        .submit(user.clone(), &pull_responses())
        .expect("first submission");
    let second = service
        .submit(user.clone(), &dips_responses())
        .expect("second submission");

    let fetched = service
        .results(&first.evaluation.id)
        .expect("results available");
    assert_eq!(fetched, first);

    let latest = service.latest_for_user(&user).expect("latest available");
    assert_eq!(latest.evaluation.id, second.evaluation.id);
}

#[test]
fn results_report_missing_evaluations() {
    let (service, _) = build_service();

    match service.results(&EvaluationId("eval-missing".to_string())) {
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn generate_routine_picks_exercises_for_each_level() {
    let (service, repository) = build_service();
    let results = service
        .submit(UserId("user-4".to_string()), &pull_responses())
        .expect("submission succeeds");

    let routine = service
        .generate_routine(&results.evaluation.id, schedule(3, 45))
        .expect("routine generated");

    assert_eq!(repository.routine_count(), 1);
    assert_eq!(routine.template_id, "arza-3x45");
    assert_eq!(routine.levels.tiron, 2);
    let first = &routine.details[0];
    assert_eq!(first.exercise_id, "tiron-2-pullups");
    assert_eq!(first.series, 3);
    assert_eq!(first.repetitions, "8-12");
    assert_eq!(first.rest, "90s");
    assert!(routine
        .details
        .iter()
        .all(|detail| detail.category != crate::assessment::Category::Planche));

    let fetched = service.routine(&routine.id).expect("routine stored");
    assert_eq!(fetched, routine);
}

#[test]
fn generate_routine_reuses_the_users_existing_routine() {
    let (service, repository) = build_service();
    let user = UserId("user-5".to_string());
    let first = service
        .submit(user.clone(), &pull_responses())
        .expect("first submission");
    let second = service
        .submit(user, &elite_responses())
        .expect("second submission");

    let existing = service
        .generate_routine(&first.evaluation.id, schedule(3, 45))
        .expect("routine generated");
    let reused = service
        .generate_routine(&second.evaluation.id, schedule(5, 90))
        .expect("routine reused");

    assert_eq!(reused.id, existing.id);
    assert_eq!(repository.routine_count(), 1);
}

#[test]
fn generate_routine_fails_without_template() {
    let repository = Arc::new(MemoryRepository::default());
    let service = AssessmentService::new(
        repository,
        Arc::new(InMemoryCatalog::default()),
        ScoringConfig::default(),
    );
    let results = service
        .submit(UserId("user-6".to_string()), &pull_responses())
        .expect("submission succeeds");

    match service.generate_routine(&results.evaluation.id, schedule(4, 60)) {
        Err(AssessmentServiceError::Routine(RoutineError::NoTemplate {
            days_per_week: 4,
            session_minutes: 60,
        })) => {}
        other => panic!("expected missing template, got {other:?}"),
    }
}

#[test]
fn routine_lookup_surfaces_repository_outages() {
    let service = AssessmentService::new(
        Arc::new(UnavailableRepository),
        Arc::new(InMemoryCatalog::standard()),
        ScoringConfig::default(),
    );

    match service.routine(&RoutineId("routine-000001".to_string())) {
        Err(AssessmentServiceError::Repository(RepositoryError::Unavailable(_))) => {}
        other => panic!("expected unavailable repository, got {other:?}"),
    }
}

#[test]
fn availability_rejects_unsupported_schedules() {
    match TrainingAvailability::new(6, 45) {
        Err(RoutineError::UnsupportedAvailability {
            days_per_week: 6, ..
        }) => {}
        other => panic!("expected unsupported schedule, got {other:?}"),
    }
}
