use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::config::EnrollmentConfig;
use crate::workflows::enrollment::domain::{Applicant, ApplicantId, ApplicationStatus};
use crate::workflows::enrollment::repository::{ApplicantRepository, RepositoryError};
use crate::workflows::enrollment::{enrollment_router, EnrollmentService};

pub(super) fn applicant(
    id: &str,
    grades: f64,
    exam: f64,
    income: f64,
    proximity: f64,
) -> Applicant {
    Applicant {
        id: ApplicantId::from(id),
        full_name: format!("Applicant {id}"),
        application_id: format!("APP-{id}"),
        address: "Barangay San Roque, Marikina".to_string(),
        school_attended: "Marikina Elementary".to_string(),
        grades,
        entrance_exam_score: exam,
        household_income: income,
        proximity_to_school: proximity,
        parent_guardian_names: format!("Guardian of {id}"),
        submission_date: NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date"),
        status: ApplicationStatus::Pending,
    }
}

/// Scores 191 under the standard rubric.
pub(super) fn strong_applicant() -> Applicant {
    applicant("a", 3.8, 92.0, 15000.0, 2.0)
}

/// Scores 140 under the standard rubric.
pub(super) fn affluent_applicant() -> Applicant {
    applicant("b", 3.2, 80.0, 60000.0, 1.0)
}

pub(super) fn roster() -> Vec<Applicant> {
    vec![
        affluent_applicant().with_status(ApplicationStatus::Approved),
        strong_applicant(),
        applicant("c", 2.9, 75.0, 8000.0, 6.5).with_status(ApplicationStatus::Waitlisted),
        applicant("d", 3.5, 88.0, 22000.0, 0.5),
        applicant("e", 2.1, 55.0, 95000.0, 12.0).with_status(ApplicationStatus::Rejected),
        applicant("f", 3.9, 97.0, 12000.0, 3.0),
    ]
}

pub(super) fn enrollment_config() -> EnrollmentConfig {
    EnrollmentConfig {
        total_slots: 4,
        page_size: 2,
        ..EnrollmentConfig::default()
    }
}

pub(super) fn build_service() -> (EnrollmentService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::with(roster()));
    let service = EnrollmentService::new(repository.clone(), enrollment_config());
    (service, repository)
}

pub(super) fn router_with_service(service: EnrollmentService<MemoryRepository>) -> axum::Router {
    enrollment_router(Arc::new(service))
}

pub(super) fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    records: Mutex<Vec<Applicant>>,
}

impl MemoryRepository {
    pub(super) fn with(applicants: Vec<Applicant>) -> Self {
        Self {
            records: Mutex::new(applicants),
        }
    }
}

impl ApplicantRepository for MemoryRepository {
    fn insert(&self, applicant: Applicant) -> Result<Applicant, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == applicant.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(applicant.clone());
        Ok(applicant)
    }

    fn update_status(
        &self,
        id: &ApplicantId,
        status: ApplicationStatus,
    ) -> Result<Vec<Applicant>, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let updated = guard
            .iter_mut()
            .filter(|existing| &existing.id == id)
            .map(|existing| {
                existing.status = status;
                existing.clone()
            })
            .collect::<Vec<_>>();
        if updated.is_empty() {
            return Err(RepositoryError::NotFound);
        }
        Ok(updated)
    }

    fn fetch(&self, id: &ApplicantId) -> Result<Option<Applicant>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|existing| &existing.id == id).cloned())
    }

    fn all(&self) -> Result<Vec<Applicant>, RepositoryError> {
        Ok(self.records.lock().expect("repository mutex poisoned").clone())
    }
}

pub(super) struct UnavailableRepository;

impl ApplicantRepository for UnavailableRepository {
    fn insert(&self, _applicant: Applicant) -> Result<Applicant, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance".to_string()))
    }

    fn update_status(
        &self,
        _id: &ApplicantId,
        _status: ApplicationStatus,
    ) -> Result<Vec<Applicant>, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance".to_string()))
    }

    fn fetch(&self, _id: &ApplicantId) -> Result<Option<Applicant>, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance".to_string()))
    }

    fn all(&self) -> Result<Vec<Applicant>, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
