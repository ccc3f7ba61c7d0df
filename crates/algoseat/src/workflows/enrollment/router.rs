use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ApplicantId, ApplicationStatus};
use super::listing::PageRequest;
use super::repository::{ApplicantRepository, RepositoryError};
use super::service::{EnrollmentService, EnrollmentServiceError};
use super::session::LoginRequest;

/// Router builder exposing the administrator dashboard endpoints.
pub fn enrollment_router<R>(service: Arc<EnrollmentService<R>>) -> Router
where
    R: ApplicantRepository + 'static,
{
    Router::new()
        .route("/api/v1/session", post(login_handler::<R>))
        .route("/api/v1/dashboard", get(overview_handler::<R>))
        .route("/api/v1/applicants", get(list_handler::<R>))
        .route("/api/v1/applicants/:applicant_id", get(profile_handler::<R>))
        .route(
            "/api/v1/applicants/:applicant_id/status",
            put(status_update_handler::<R>),
        )
        .route("/api/v1/rankings", get(rankings_handler::<R>))
        .route("/api/v1/slots", get(slots_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListQuery {
    #[serde(default)]
    status: Option<ApplicationStatus>,
    #[serde(default)]
    page: Option<usize>,
    #[serde(default)]
    per_page: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusUpdateRequest {
    status: ApplicationStatus,
}

pub(crate) async fn login_handler<R>(
    State(service): State<Arc<EnrollmentService<R>>>,
    axum::Json(request): axum::Json<LoginRequest>,
) -> Response
where
    R: ApplicantRepository + 'static,
{
    match service.authenticate(&request) {
        Ok(()) => (
            StatusCode::OK,
            axum::Json(json!({ "authenticated": true })),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn overview_handler<R>(
    State(service): State<Arc<EnrollmentService<R>>>,
) -> Response
where
    R: ApplicantRepository + 'static,
{
    match service.overview() {
        Ok(overview) => (StatusCode::OK, axum::Json(overview)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<EnrollmentService<R>>>,
    Query(query): Query<ListQuery>,
) -> Response
where
    R: ApplicantRepository + 'static,
{
    let defaults = service.default_page();
    let request = PageRequest::new(
        query.page.unwrap_or(defaults.page),
        query.per_page.unwrap_or(defaults.per_page),
    );
    let status = query.status.unwrap_or_default();

    match service.list(status, request) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn profile_handler<R>(
    State(service): State<Arc<EnrollmentService<R>>>,
    Path(applicant_id): Path<String>,
) -> Response
where
    R: ApplicantRepository + 'static,
{
    match service.profile(&ApplicantId(applicant_id)) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn status_update_handler<R>(
    State(service): State<Arc<EnrollmentService<R>>>,
    Path(applicant_id): Path<String>,
    axum::Json(request): axum::Json<StatusUpdateRequest>,
) -> Response
where
    R: ApplicantRepository + 'static,
{
    match service.update_status(&ApplicantId(applicant_id), request.status) {
        Ok(applicant) => (StatusCode::OK, axum::Json(applicant)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn rankings_handler<R>(
    State(service): State<Arc<EnrollmentService<R>>>,
) -> Response
where
    R: ApplicantRepository + 'static,
{
    match service.rankings() {
        Ok(ranking) => (StatusCode::OK, axum::Json(ranking)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn slots_handler<R>(State(service): State<Arc<EnrollmentService<R>>>) -> Response
where
    R: ApplicantRepository + 'static,
{
    match service.slot_summary() {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: EnrollmentServiceError) -> Response {
    let status = match &error {
        EnrollmentServiceError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        EnrollmentServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        EnrollmentServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        EnrollmentServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
