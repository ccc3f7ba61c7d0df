use serde::Serialize;

use super::domain::Applicant;

/// Out-of-domain field found on an applicant record.
///
/// Ranking accepts every value; these issues are advisory and are surfaced to
/// callers that want to review records before trusting a ranking.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum ValidationIssue {
    #[error("applicant identifier is blank")]
    BlankIdentifier,
    #[error("{field} is not a finite number")]
    NonFinite { field: &'static str },
    #[error("{field} {value} is outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{field} {value} is negative")]
    Negative { field: &'static str, value: f64 },
}

pub struct ApplicantValidator;

impl ApplicantValidator {
    pub fn check(applicant: &Applicant) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if applicant.id.0.trim().is_empty() {
            issues.push(ValidationIssue::BlankIdentifier);
        }

        check_range(&mut issues, "grades", applicant.grades, 0.0, 4.0);
        check_range(
            &mut issues,
            "entrance_exam_score",
            applicant.entrance_exam_score,
            0.0,
            100.0,
        );
        check_non_negative(&mut issues, "household_income", applicant.household_income);
        check_non_negative(
            &mut issues,
            "proximity_to_school",
            applicant.proximity_to_school,
        );

        issues
    }

    pub fn is_in_domain(applicant: &Applicant) -> bool {
        Self::check(applicant).is_empty()
    }
}

fn check_range(
    issues: &mut Vec<ValidationIssue>,
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !value.is_finite() {
        issues.push(ValidationIssue::NonFinite { field });
    } else if value < min || value > max {
        issues.push(ValidationIssue::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
}

fn check_non_negative(issues: &mut Vec<ValidationIssue>, field: &'static str, value: f64) {
    if !value.is_finite() {
        issues.push(ValidationIssue::NonFinite { field });
    } else if value < 0.0 {
        issues.push(ValidationIssue::Negative { field, value });
    }
}
