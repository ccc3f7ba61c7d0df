use serde::{Deserialize, Serialize};

/// Highest composite score reachable with in-domain inputs (4.0 GPA, perfect
/// exam, zero income, zero distance). Reference only; scores are never rescaled.
pub const MAX_IN_DOMAIN_SCORE: f64 = 225.0;

/// Weights and ceilings of the composite admission-priority score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringRubric {
    /// Points per GPA point.
    pub academic_weight: f64,
    /// Points per exam point.
    pub exam_weight: f64,
    /// Income term before any deduction.
    pub income_ceiling: f64,
    /// Monthly income that costs one point.
    pub income_step: f64,
    /// Proximity term before any deduction.
    pub proximity_ceiling: f64,
    /// Points deducted per kilometer.
    pub proximity_penalty_per_km: f64,
}

impl ScoringRubric {
    pub const STANDARD: ScoringRubric = ScoringRubric {
        academic_weight: 25.0,
        exam_weight: 0.5,
        income_ceiling: 50.0,
        income_step: 1000.0,
        proximity_ceiling: 25.0,
        proximity_penalty_per_km: 5.0,
    };

    pub fn max_in_domain_score(&self) -> f64 {
        4.0 * self.academic_weight
            + 100.0 * self.exam_weight
            + self.income_ceiling
            + self.proximity_ceiling
    }
}

impl Default for ScoringRubric {
    fn default() -> Self {
        Self::STANDARD
    }
}
