use super::domain::{Applicant, ApplicantId, ApplicationStatus};

/// Storage abstraction so the service module can be exercised in isolation.
///
/// `all` returns records in insertion order; rankings break ties on it.
pub trait ApplicantRepository: Send + Sync {
    fn insert(&self, applicant: Applicant) -> Result<Applicant, RepositoryError>;
    /// Set `status` on every record carrying `id`; other fields are kept per record.
    /// Returns the updated records in roster order.
    fn update_status(
        &self,
        id: &ApplicantId,
        status: ApplicationStatus,
    ) -> Result<Vec<Applicant>, RepositoryError>;
    fn fetch(&self, id: &ApplicantId) -> Result<Option<Applicant>, RepositoryError>;
    fn all(&self) -> Result<Vec<Applicant>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
