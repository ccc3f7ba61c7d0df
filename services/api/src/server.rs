use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryApplicantRepository};
use crate::routes::with_enrollment_routes;
use crate::seed::seed_roster;
use algoseat::config::AppConfig;
use algoseat::error::AppError;
use algoseat::telemetry;
use algoseat::workflows::enrollment::EnrollmentService;
use algoseat::workflows::roster::RosterImporter;
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

    let roster = match args.roster.take() {
        Some(path) => RosterImporter::from_path(path)?,
        None => seed_roster(),
    };
    info!(applicants = roster.len(), "roster loaded");

    let repository = Arc::new(InMemoryApplicantRepository::seeded(roster));
    let enrollment_service = Arc::new(EnrollmentService::new(
        repository,
        config.enrollment.clone(),
    ));

    let app = with_enrollment_routes(enrollment_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        total_slots = config.enrollment.total_slots,
        "enrollment dashboard ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
