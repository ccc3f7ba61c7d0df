use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::domain::{Applicant, ApplicantId, ApplicationStatus};
use super::listing::{applicants_with_status, PageRequest, StatusListView};
use super::ranking::{RankedApplicant, RankingEngine, ScoreBreakdown};
use super::repository::{ApplicantRepository, RepositoryError};
use super::session::LoginRequest;
use super::slots::{DashboardOverview, SlotSummary};
use super::validation::{ApplicantValidator, ValidationIssue};
use crate::config::EnrollmentConfig;

/// Service composing the applicant repository, ranking engine, and slot settings.
pub struct EnrollmentService<R> {
    repository: Arc<R>,
    engine: RankingEngine,
    config: EnrollmentConfig,
}

impl<R> EnrollmentService<R>
where
    R: ApplicantRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: EnrollmentConfig) -> Self {
        Self::with_engine(repository, RankingEngine::standard(), config)
    }

    pub fn with_engine(repository: Arc<R>, engine: RankingEngine, config: EnrollmentConfig) -> Self {
        Self {
            repository,
            engine,
            config,
        }
    }

    pub fn config(&self) -> &EnrollmentConfig {
        &self.config
    }

    /// Page request used when a caller does not specify one.
    pub fn default_page(&self) -> PageRequest {
        PageRequest::new(1, self.config.page_size)
    }

    pub fn authenticate(&self, request: &LoginRequest) -> Result<(), EnrollmentServiceError> {
        if self
            .config
            .admin
            .matches(&request.username, &request.password)
        {
            info!(username = %request.username, "administrator signed in");
            Ok(())
        } else {
            warn!(username = %request.username, "rejected administrator sign-in");
            Err(EnrollmentServiceError::InvalidCredentials)
        }
    }

    /// Store a new applicant. Out-of-domain fields are logged, not rejected.
    pub fn register(&self, applicant: Applicant) -> Result<Applicant, EnrollmentServiceError> {
        let issues = ApplicantValidator::check(&applicant);
        if !issues.is_empty() {
            warn!(
                applicant = %applicant.id,
                issues = ?issues,
                "applicant registered with out-of-domain fields",
            );
        }
        let stored = self.repository.insert(applicant)?;
        debug!(applicant = %stored.id, status = %stored.status, "applicant registered");
        Ok(stored)
    }

    /// Profile of the first record with `id`. Records sharing an id rank
    /// separately, so the rank is that record's own.
    pub fn profile(&self, id: &ApplicantId) -> Result<ApplicantProfileView, EnrollmentServiceError> {
        let roster = self.repository.all()?;
        let position = roster
            .iter()
            .position(|applicant| &applicant.id == id)
            .ok_or(RepositoryError::NotFound)?;
        let applicant = roster[position].clone();

        Ok(ApplicantProfileView {
            breakdown: self.engine.score(&applicant),
            issues: ApplicantValidator::check(&applicant),
            rank: self.engine.rank_of(&roster, position),
            ranked_out_of: roster.len(),
            applicant,
        })
    }

    pub fn list(
        &self,
        status: ApplicationStatus,
        request: PageRequest,
    ) -> Result<StatusListView, EnrollmentServiceError> {
        let roster = self.repository.all()?;
        Ok(applicants_with_status(&roster, status, request))
    }

    /// Set `status` on every record with `id` and return the first of them.
    pub fn update_status(
        &self,
        id: &ApplicantId,
        status: ApplicationStatus,
    ) -> Result<Applicant, EnrollmentServiceError> {
        let previous = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?
            .status;
        let updated = self.repository.update_status(id, status)?;
        let records = updated.len();
        let first = updated
            .into_iter()
            .next()
            .ok_or(RepositoryError::NotFound)?;

        info!(
            applicant = %id,
            from = %previous,
            to = %status,
            records,
            "application status updated"
        );
        Ok(first)
    }

    /// Snapshot ranking of the whole roster; later status edits need a new call.
    pub fn rankings(&self) -> Result<Vec<RankedApplicant>, EnrollmentServiceError> {
        let roster = self.repository.all()?;
        let ranking = self.engine.rank(&roster);
        debug!(applicants = ranking.len(), "ranking computed");
        Ok(ranking)
    }

    pub fn slot_summary(&self) -> Result<SlotSummary, EnrollmentServiceError> {
        let roster = self.repository.all()?;
        let summary = SlotSummary::compute(self.config.total_slots, &roster);
        if summary.is_oversubscribed() {
            warn!(
                approved = summary.filled_slots,
                capacity = summary.total_slots,
                "more applicants approved than slots available"
            );
        }
        Ok(summary)
    }

    pub fn overview(&self) -> Result<DashboardOverview, EnrollmentServiceError> {
        let roster = self.repository.all()?;
        Ok(DashboardOverview::compute(self.config.total_slots, &roster))
    }
}

/// Applicant detail page: the record, how its score is built, and where it ranks.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicantProfileView {
    pub applicant: Applicant,
    pub breakdown: ScoreBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<usize>,
    pub ranked_out_of: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<ValidationIssue>,
}

/// Error raised by the enrollment service.
#[derive(Debug, thiserror::Error)]
pub enum EnrollmentServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("invalid administrator credentials")]
    InvalidCredentials,
}
