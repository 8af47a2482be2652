use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState, InMemoryEvaluationRepository};
use crate::routes::with_assessment_routes;
use arza::assessment::AssessmentService;
use arza::config::AppConfig;
use arza::error::AppError;
use arza::telemetry;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryEvaluationRepository::default());
    let catalog = Arc::new(load_catalog(&config.catalog)?);
    let assessment_service = Arc::new(AssessmentService::new(
        repository,
        catalog,
        config.scoring.clone(),
    ));

    let app = with_assessment_routes(assessment_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        intermediate_rating = config.scoring.intermediate_rating,
        elite_rating = config.scoring.elite_rating,
        "arza assessment service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
