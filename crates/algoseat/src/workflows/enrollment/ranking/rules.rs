use super::super::domain::Applicant;
use super::rubric::ScoringRubric;
use super::{ScoreBreakdown, ScoreComponent, ScoringFactor};

pub(crate) fn score_applicant(applicant: &Applicant, rubric: &ScoringRubric) -> ScoreBreakdown {
    let grades = finite_or_zero(applicant.grades);
    let exam = finite_or_zero(applicant.entrance_exam_score);
    let income = finite_or_zero(applicant.household_income).max(0.0);
    let distance = finite_or_zero(applicant.proximity_to_school).max(0.0);

    let academic = saturate(grades * rubric.academic_weight);
    let exam_points = saturate(exam * rubric.exam_weight);
    let income_points = floor_at_zero(rubric.income_ceiling - income / rubric.income_step);
    let proximity_points =
        floor_at_zero(rubric.proximity_ceiling - distance * rubric.proximity_penalty_per_km);

    let components = vec![
        ScoreComponent {
            factor: ScoringFactor::AcademicPerformance,
            points: academic,
            notes: format!("GPA {grades:.2} x {}", rubric.academic_weight),
        },
        ScoreComponent {
            factor: ScoringFactor::EntranceExam,
            points: exam_points,
            notes: format!("exam score {exam:.1} x {}", rubric.exam_weight),
        },
        ScoreComponent {
            factor: ScoringFactor::HouseholdIncome,
            points: income_points,
            notes: if income_points == 0.0 {
                format!("monthly income {income:.0} at or above equity cutoff")
            } else {
                format!("monthly income {income:.0} earns equity points")
            },
        },
        ScoreComponent {
            factor: ScoringFactor::Proximity,
            points: proximity_points,
            notes: if proximity_points == 0.0 {
                format!("{distance:.1} km is beyond proximity range")
            } else {
                format!("{distance:.1} km from school")
            },
        },
    ];

    // `+ 0.0` folds a negative zero so equal scores compare equal under `total_cmp`.
    let total = saturate(academic + exam_points + income_points + proximity_points) + 0.0;

    ScoreBreakdown { components, total }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn saturate(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(f64::MIN, f64::MAX)
    }
}

fn floor_at_zero(value: f64) -> f64 {
    saturate(value).max(0.0)
}
