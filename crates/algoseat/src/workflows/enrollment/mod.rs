//! Applicant roster management for the enrollment dashboard: ranking, status
//! lists, slot utilization, and the administrator session state.

pub mod domain;
pub mod listing;
pub mod ranking;
pub mod repository;
pub mod router;
pub mod service;
pub mod session;
pub mod slots;
pub mod state;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{Applicant, ApplicantId, ApplicationStatus, UnknownStatus};
pub use listing::{applicants_with_status, PageRequest, Paginated, PaginationMeta, StatusListView};
pub use ranking::{
    rank, RankedApplicant, RankingEngine, ScoreBreakdown, ScoreComponent, ScoringFactor,
    ScoringRubric, MAX_IN_DOMAIN_SCORE,
};
pub use repository::{ApplicantRepository, RepositoryError};
pub use router::enrollment_router;
pub use service::{ApplicantProfileView, EnrollmentService, EnrollmentServiceError};
pub use session::{AdminCredentials, LoginRequest};
pub use slots::{DashboardOverview, SlotSummary, StatusCounts};
pub use state::{DashboardAction, DashboardPage, DashboardState, StateError};
pub use validation::{ApplicantValidator, ValidationIssue};
