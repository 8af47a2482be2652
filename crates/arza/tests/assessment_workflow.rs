//! End-to-end scenarios for the assessment workflow.
//!
//! Scenarios drive the public service facade and HTTP router so scoring, persistence, and
//! routine generation are exercised without reaching into private modules.

mod common {
    use std::sync::{Arc, Mutex};

    use arza::assessment::{
        AssessmentResponses, AssessmentService, EvaluationId, EvaluationRepository,
        InMemoryCatalog, RepositoryError, RoutineId, RoutinePlan, ScoringConfig,
        StoredEvaluation, UserId,
    };

    fn code(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    pub(super) fn intermediate_responses() -> AssessmentResponses {
        AssessmentResponses {
            pullups_reps: code("30"),
            weighted_pullups_kg: code("20"),
            muscle_ups_type: code("strict"),
            weighted_muscle_ups_kg: code("7"),
            dips_reps: code("35"),
            weighted_dips_kg: code("single_60_80"),
            extreme_dips_kg: code("80_100_reps"),
            handstand_level: code("consistente"),
            handstand_ninety_degree: true,
            front_lever_level: code("front_lever"),
            front_lever_dynamic: code("negative"),
            ..AssessmentResponses::with_abilities([
                "pullups",
                "dips",
                "handstand",
                "front_lever",
            ])
        }
    }

    pub(super) fn beginner_responses() -> AssessmentResponses {
        AssessmentResponses {
            standard_pushups: code("no"),
            knee_pushups_level: code("minima"),
            australian_rows_level: code("minima"),
            ..AssessmentResponses::with_abilities(["none"])
        }
    }

    #[derive(Default)]
    pub(super) struct Repository {
        evaluations: Mutex<Vec<StoredEvaluation>>,
        routines: Mutex<Vec<RoutinePlan>>,
    }

    impl EvaluationRepository for Repository {
        fn insert(&self, entry: StoredEvaluation) -> Result<StoredEvaluation, RepositoryError> {
            self.evaluations
                .lock()
                .expect("lock")
                .push(entry.clone());
            Ok(entry)
        }

        fn fetch(&self, id: &EvaluationId) -> Result<Option<StoredEvaluation>, RepositoryError> {
            let evaluations = self.evaluations.lock().expect("lock");
            Ok(evaluations.iter().find(|stored| stored.id() == id).cloned())
        }

        fn latest_for_user(
            &self,
            user_id: &UserId,
        ) -> Result<Option<StoredEvaluation>, RepositoryError> {
            let evaluations = self.evaluations.lock().expect("lock");
            Ok(evaluations
                .iter()
                .rev()
                .find(|stored| stored.user_id() == user_id)
                .cloned())
        }

        fn save_routine(&self, routine: RoutinePlan) -> Result<RoutinePlan, RepositoryError> {
            self.routines.lock().expect("lock").push(routine.clone());
            Ok(routine)
        }

        fn routine_for_user(
            &self,
            user_id: &UserId,
        ) -> Result<Option<RoutinePlan>, RepositoryError> {
            let routines = self.routines.lock().expect("lock");
            Ok(routines
                .iter()
                .find(|routine| &routine.user_id == user_id)
                .cloned())
        }

        fn fetch_routine(&self, id: &RoutineId) -> Result<Option<RoutinePlan>, RepositoryError> {
            let routines = self.routines.lock().expect("lock");
            Ok(routines.iter().find(|routine| &routine.id == id).cloned())
        }
    }

    pub(super) fn build_service() -> Arc<AssessmentService<Repository, InMemoryCatalog>> {
        Arc::new(AssessmentService::new(
            Arc::new(Repository::default()),
            Arc::new(InMemoryCatalog::standard()),
            ScoringConfig::default(),
        ))
    }
}

mod service_flow {
    use super::common::*;
    use arza::assessment::{
        AssessmentServiceError, OverallClassification, TrainingAvailability, UserId,
    };

    #[test]
    fn intermediate_subject_is_scored_and_stored() {
        let service = build_service();

        let results = service
            .submit(UserId("athlete-1".to_string()), &intermediate_responses())
            .expect("submission should succeed");

        let evaluation = &results.evaluation;
        assert_eq!(evaluation.tiron_score, 8);
        assert_eq!(evaluation.empuje_score, 13);
        assert_eq!(evaluation.handstand_score, 3);
        assert_eq!(evaluation.front_lever_score, 5);
        assert_eq!(evaluation.planche_score, 0);
        assert_eq!(evaluation.push.weighted_dips_kg, Some(80));
        assert!(evaluation.push.extreme_dips_reps);
        assert!(evaluation.front_lever.front_lever_negative);
        assert!(evaluation.handstand.handstand_90_degree);

        assert_eq!(results.stats.total, 29);
        assert_eq!(results.stats.arza_card, 56);
        assert_eq!(results.stats.clasificacion_general, "Intermedio");
        assert_eq!(results.levels.tiron, 2);
        assert_eq!(results.levels.empuje, 2);
        assert_eq!(results.levels.front_lever, 4);
        assert_eq!(results.levels.planche, 1);
    }

    #[test]
    fn beginner_subject_is_always_inicial() {
        let service = build_service();

        let outcome = service.preview(&beginner_responses());

        assert!(outcome.is_complete());
        assert_eq!(outcome.scores.beginner, 4);
        assert_eq!(
            outcome.overall.classification,
            OverallClassification::Inicial
        );
    }

    #[test]
    fn routine_follows_stored_levels() {
        let service = build_service();
        let results = service
            .submit(UserId("athlete-2".to_string()), &intermediate_responses())
            .expect("submission should succeed");

        let availability = TrainingAvailability::new(4, 60).expect("supported schedule");
        let routine = service
            .generate_routine(&results.evaluation.id, availability)
            .expect("routine should be generated");

        assert_eq!(routine.template_id, "arza-4x60");
        assert_eq!(routine.evaluation_id, results.evaluation.id);
        assert!(routine
            .details
            .iter()
            .any(|detail| detail.exercise_id.starts_with("fl-4")));
        assert!(routine
            .details
            .iter()
            .all(|detail| !detail.exercise_id.starts_with("pl-")));
    }

    #[test]
    fn empty_submission_lists_missing_abilities() {
        let service = build_service();

        match service.submit(
            UserId("athlete-3".to_string()),
            &arza::assessment::AssessmentResponses::default(),
        ) {
            Err(AssessmentServiceError::Validation(errors)) => {
                assert!(errors.contains("abilities"));
            }
            other => panic!("expected validation errors, got {other:?}"),
        }
    }
}

mod routing {
    use super::common::*;
    use arza::assessment::assessment_router;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn read_json(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        serde_json::from_slice(&body).expect("json")
    }

    #[tokio::test]
    async fn submit_then_fetch_results_and_routine() {
        let router = assessment_router(build_service());

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/users/athlete-4/assessments")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::to_vec(&intermediate_responses()).expect("serialize"),
                    ))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = read_json(response).await;
        let evaluation_id = created["evaluation"]["id"]
            .as_str()
            .expect("evaluation id")
            .to_string();

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/api/v1/assessments/{evaluation_id}"))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        let fetched = read_json(response).await;
        assert_eq!(fetched["stats"]["clasificacion_general"], json!("Intermedio"));

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/v1/assessments/{evaluation_id}/routine"))
                    .header("content-type", "application/json")
                    .body(Body::from(
                        json!({ "days_per_week": 3, "session_minutes": 90 }).to_string(),
                    ))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        let routine = read_json(response).await;
        assert_eq!(routine["template_id"], json!("arza-3x90"));
        assert!(routine["details"]
            .as_array()
            .is_some_and(|details| !details.is_empty()));
    }

    #[tokio::test]
    async fn unknown_routine_is_not_found() {
        let router = assessment_router(build_service());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/routines/routine-999999")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
