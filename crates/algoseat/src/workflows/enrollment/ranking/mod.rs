//! Composite admission-priority scoring and applicant ordering.
//!
//! Scores balance academic merit against household income and distance to the
//! school. Ranking sorts by descending score and breaks exact ties by the
//! applicant's position in the input, so identical inputs always produce
//! identical rankings.

mod rubric;
mod rules;

pub use rubric::{ScoringRubric, MAX_IN_DOMAIN_SCORE};

use super::domain::Applicant;
use serde::{Deserialize, Serialize};

/// Stateless scorer; each call works on a borrowed snapshot of applicants.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RankingEngine {
    rubric: ScoringRubric,
}

impl RankingEngine {
    pub fn standard() -> Self {
        Self {
            rubric: ScoringRubric::STANDARD,
        }
    }

    pub fn with_rubric(rubric: ScoringRubric) -> Self {
        Self { rubric }
    }

    pub fn rubric(&self) -> &ScoringRubric {
        &self.rubric
    }

    pub fn score(&self, applicant: &Applicant) -> ScoreBreakdown {
        rules::score_applicant(applicant, &self.rubric)
    }

    pub fn composite_score(&self, applicant: &Applicant) -> f64 {
        self.score(applicant).total
    }

    /// Order applicants by descending composite score.
    ///
    /// The output has one entry per input record (duplicates included) with
    /// ranks `1..=n`. Equal scores keep their input order.
    pub fn rank(&self, applicants: &[Applicant]) -> Vec<RankedApplicant> {
        self.ordered(applicants)
            .into_iter()
            .enumerate()
            .map(|(index, (position, composite_score))| RankedApplicant {
                applicant: applicants[position].clone(),
                composite_score,
                rank: index + 1,
            })
            .collect()
    }

    /// Rank of the record at `position` in `applicants`, as `rank` would report it.
    pub fn rank_of(&self, applicants: &[Applicant], position: usize) -> Option<usize> {
        self.ordered(applicants)
            .iter()
            .position(|(candidate, _)| *candidate == position)
            .map(|index| index + 1)
    }

    fn ordered(&self, applicants: &[Applicant]) -> Vec<(usize, f64)> {
        let mut scored = applicants
            .iter()
            .enumerate()
            .map(|(position, applicant)| (position, self.composite_score(applicant)))
            .collect::<Vec<_>>();

        scored.sort_by(|(left_pos, left_score), (right_pos, right_score)| {
            right_score
                .total_cmp(left_score)
                .then_with(|| left_pos.cmp(right_pos))
        });
        scored
    }
}

/// Rank with the standard rubric.
pub fn rank(applicants: &[Applicant]) -> Vec<RankedApplicant> {
    RankingEngine::standard().rank(applicants)
}

/// Scoring factors contributing to the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringFactor {
    AcademicPerformance,
    EntranceExam,
    HouseholdIncome,
    Proximity,
}

impl ScoringFactor {
    pub const fn label(self) -> &'static str {
        match self {
            ScoringFactor::AcademicPerformance => "Academic performance",
            ScoringFactor::EntranceExam => "Entrance exam",
            ScoringFactor::HouseholdIncome => "Household income",
            ScoringFactor::Proximity => "Proximity to school",
        }
    }
}

/// Discrete contribution to a composite score, kept for transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoringFactor,
    pub points: f64,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub components: Vec<ScoreComponent>,
    pub total: f64,
}

impl ScoreBreakdown {
    pub fn points_for(&self, factor: ScoringFactor) -> f64 {
        self.components
            .iter()
            .filter(|component| component.factor == factor)
            .map(|component| component.points)
            .sum()
    }
}

/// Applicant paired with its score and 1-based position in a ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedApplicant {
    #[serde(flatten)]
    pub applicant: Applicant,
    pub composite_score: f64,
    pub rank: usize,
}
