use std::sync::Arc;

use super::common::*;
use crate::workflows::enrollment::domain::{ApplicantId, ApplicationStatus};
use crate::workflows::enrollment::repository::{ApplicantRepository, RepositoryError};
use crate::workflows::enrollment::service::{EnrollmentService, EnrollmentServiceError};
use crate::workflows::enrollment::session::LoginRequest;
use crate::workflows::enrollment::ScoringFactor;

#[test]
fn rankings_cover_the_whole_roster() {
    let (service, _) = build_service();
    let ranking = service.rankings().expect("ranking succeeds");

    let order = ranking
        .iter()
        .map(|entry| entry.applicant.id.0.as_str())
        .collect::<Vec<_>>();
    assert_eq!(order, vec!["f", "a", "d", "c", "b", "e"]);
    assert!(approx_eq(ranking[0].composite_score, 194.0));
    assert!(approx_eq(ranking[5].composite_score, 80.0));
}

#[test]
fn profile_includes_breakdown_and_rank() {
    let (service, _) = build_service();
    let view = service.profile(&ApplicantId::from("a")).expect("profile");

    assert_eq!(view.rank, Some(2));
    assert_eq!(view.ranked_out_of, 6);
    assert!(approx_eq(view.breakdown.total, 191.0));
    assert!(approx_eq(
        view.breakdown.points_for(ScoringFactor::HouseholdIncome),
        35.0
    ));
    assert!(view.issues.is_empty());
}

#[test]
fn profile_of_unknown_applicant_is_not_found() {
    let (service, _) = build_service();
    let err = service
        .profile(&ApplicantId::from("missing"))
        .expect_err("unknown applicant");
    assert!(matches!(
        err,
        EnrollmentServiceError::Repository(RepositoryError::NotFound)
    ));
}

#[test]
fn status_update_is_persisted_and_reflected_in_slots() {
    let (service, repository) = build_service();

    let updated = service
        .update_status(&ApplicantId::from("f"), ApplicationStatus::Approved)
        .expect("update succeeds");
    assert_eq!(updated.status, ApplicationStatus::Approved);

    let stored = repository
        .fetch(&ApplicantId::from("f"))
        .expect("fetch")
        .expect("record exists");
    assert_eq!(stored.status, ApplicationStatus::Approved);

    let summary = service.slot_summary().expect("summary");
    assert_eq!(summary.filled_slots, 2);
    assert_eq!(summary.available_slots, 2);
    assert!(approx_eq(summary.filled_percentage, 50.0));

    let pending = service
        .list(ApplicationStatus::Pending, service.default_page())
        .expect("list");
    assert_eq!(pending.page.meta.total_items, 2);
}

#[test]
fn status_update_for_unknown_applicant_fails() {
    let (service, _) = build_service();
    let err = service
        .update_status(&ApplicantId::from("ghost"), ApplicationStatus::Rejected)
        .expect_err("unknown applicant");
    assert!(matches!(
        err,
        EnrollmentServiceError::Repository(RepositoryError::NotFound)
    ));
}

#[test]
fn register_keeps_out_of_domain_records_and_rejects_duplicates() {
    let (service, repository) = build_service();

    let outlier = applicant("g", 4.4, 101.0, 5000.0, 1.0);
    service.register(outlier).expect("outlier stored");
    assert_eq!(repository.all().expect("all").len(), 7);

    let err = service
        .register(strong_applicant())
        .expect_err("duplicate id");
    assert!(matches!(
        err,
        EnrollmentServiceError::Repository(RepositoryError::Conflict)
    ));

    let view = service.profile(&ApplicantId::from("g")).expect("profile");
    assert_eq!(view.issues.len(), 2);
}

#[test]
fn authenticate_checks_configured_credentials() {
    let (service, _) = build_service();

    service
        .authenticate(&LoginRequest {
            username: "admin@algofordaseat.edu".to_string(),
            password: "admin123".to_string(),
        })
        .expect("valid credentials");

    let err = service
        .authenticate(&LoginRequest {
            username: "admin@algofordaseat.edu".to_string(),
            password: "wrong".to_string(),
        })
        .expect_err("invalid credentials");
    assert!(matches!(err, EnrollmentServiceError::InvalidCredentials));
}

#[test]
fn overview_and_default_page_follow_config() {
    let (service, _) = build_service();
    let overview = service.overview().expect("overview");

    assert_eq!(overview.total_applications, 6);
    assert_eq!(overview.slots.total_slots, 4);
    assert_eq!(service.default_page().per_page, 2);
    assert_eq!(service.config().total_slots, 4);
}

#[test]
fn unavailable_repository_surfaces_errors() {
    let service = EnrollmentService::new(Arc::new(UnavailableRepository), enrollment_config());
    assert!(matches!(
        service.rankings(),
        Err(EnrollmentServiceError::Repository(RepositoryError::Unavailable(_)))
    ));
    assert!(service.slot_summary().is_err());
}

#[test]
fn status_update_keeps_fields_of_records_sharing_an_id() {
    let mut second = applicant("a", 1.0, 40.0, 60000.0, 10.0);
    second.full_name = "Second Record".to_string();
    let repository = Arc::new(MemoryRepository::with(vec![strong_applicant(), second]));
    let service = EnrollmentService::new(repository.clone(), enrollment_config());

    let updated = service
        .update_status(&ApplicantId::from("a"), ApplicationStatus::Approved)
        .expect("update succeeds");
    assert_eq!(updated.full_name, strong_applicant().full_name);

    let all = repository.all().expect("all");
    assert_eq!(all.len(), 2);
    assert!(all
        .iter()
        .all(|record| record.status == ApplicationStatus::Approved));
    assert_eq!(all[0].grades, 3.8);
    assert_eq!(all[1].full_name, "Second Record");
    assert_eq!(all[1].grades, 1.0);

    let ranking = service.rankings().expect("ranking");
    assert!(approx_eq(ranking[0].composite_score, 191.0));
    assert!(approx_eq(ranking[1].composite_score, 45.0));
}

#[test]
fn profile_reports_the_rank_of_the_fetched_record() {
    let weaker = applicant("dup", 1.0, 40.0, 60000.0, 10.0);
    let stronger = applicant("dup", 3.9, 97.0, 12000.0, 3.0);
    let repository = Arc::new(MemoryRepository::with(vec![
        weaker.clone(),
        strong_applicant(),
        stronger,
    ]));
    let service = EnrollmentService::new(repository, enrollment_config());

    let view = service.profile(&ApplicantId::from("dup")).expect("profile");
    assert_eq!(view.applicant, weaker);
    assert_eq!(view.rank, Some(3));
    assert_eq!(view.ranked_out_of, 3);
    assert!(approx_eq(view.breakdown.total, 45.0));
}

#[test]
fn profile_rank_survives_non_finite_fields() {
    let odd = applicant("odd", f64::NAN, 90.0, 10000.0, 1.0);
    let repository = Arc::new(MemoryRepository::with(vec![strong_applicant(), odd]));
    let service = EnrollmentService::new(repository, enrollment_config());

    let view = service.profile(&ApplicantId::from("odd")).expect("profile");
    assert_eq!(view.rank, Some(2));
    assert!(!view.issues.is_empty());
}
