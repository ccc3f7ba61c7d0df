use algoseat::workflows::enrollment::{
    Applicant, ApplicantId, ApplicantRepository, ApplicationStatus, RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Roster held in memory in insertion order, so ties rank by arrival.
#[derive(Default, Clone)]
pub(crate) struct InMemoryApplicantRepository {
    records: Arc<Mutex<Vec<Applicant>>>,
}

impl InMemoryApplicantRepository {
    pub(crate) fn seeded(applicants: Vec<Applicant>) -> Self {
        Self {
            records: Arc::new(Mutex::new(applicants)),
        }
    }
}

impl ApplicantRepository for InMemoryApplicantRepository {
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
            Err(RepositoryError::NotFound)
        } else {
            Ok(updated)
        }
    }

    fn fetch(&self, id: &ApplicantId) -> Result<Option<Applicant>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|existing| &existing.id == id).cloned())
    }

    fn all(&self) -> Result<Vec<Applicant>, RepositoryError> {
        Ok(self.records.lock().expect("repository mutex poisoned").clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_roster;

    #[test]
    fn status_update_keeps_each_duplicate_record_intact() {
        let original = seed_roster()[0].clone();
        let mut second = original.clone();
        second.full_name = "Second Record".to_string();
        second.grades = 1.0;
        let repository = InMemoryApplicantRepository::seeded(vec![original.clone(), second]);

        let updated = repository
            .update_status(&original.id, ApplicationStatus::Rejected)
            .expect("update succeeds");
        assert_eq!(updated.len(), 2);

        let all = repository.all().expect("all");
        assert!(all
            .iter()
            .all(|applicant| applicant.status == ApplicationStatus::Rejected));
        assert_eq!(all[0].full_name, original.full_name);
        assert_eq!(all[1].full_name, "Second Record");
        assert_eq!(all[1].grades, 1.0);

        assert!(matches!(
            repository.update_status(&ApplicantId::from("ghost"), ApplicationStatus::Approved),
            Err(RepositoryError::NotFound)
        ));
    }

    #[test]
    fn insert_rejects_known_ids_while_status_updates_accept_them() {
        let repository = InMemoryApplicantRepository::seeded(seed_roster());
        let duplicate = seed_roster()[3].clone();
        assert!(matches!(
            repository.insert(duplicate.clone()),
            Err(RepositoryError::Conflict)
        ));
        let updated = repository
            .update_status(&duplicate.id, ApplicationStatus::Approved)
            .expect("known id");
        assert_eq!(updated, vec![duplicate.with_status(ApplicationStatus::Approved)]);
    }
}
