use serde::{Deserialize, Serialize};

use super::domain::{Applicant, ApplicationStatus};

/// Applicant totals per admission status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub approved: usize,
    pub waitlisted: usize,
    pub rejected: usize,
}

impl StatusCounts {
    pub fn tally(applicants: &[Applicant]) -> Self {
        applicants
            .iter()
            .fold(Self::default(), |mut counts, applicant| {
                match applicant.status {
                    ApplicationStatus::Pending => counts.pending += 1,
                    ApplicationStatus::Approved => counts.approved += 1,
                    ApplicationStatus::Waitlisted => counts.waitlisted += 1,
                    ApplicationStatus::Rejected => counts.rejected += 1,
                }
                counts
            })
    }

    pub fn get(&self, status: ApplicationStatus) -> usize {
        match status {
            ApplicationStatus::Pending => self.pending,
            ApplicationStatus::Approved => self.approved,
            ApplicationStatus::Waitlisted => self.waitlisted,
            ApplicationStatus::Rejected => self.rejected,
        }
    }

    pub fn total(&self) -> usize {
        self.pending + self.approved + self.waitlisted + self.rejected
    }
}

/// Capacity utilization of the program. Approved applicants occupy slots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotSummary {
    pub total_slots: u32,
    pub filled_slots: u32,
    pub available_slots: u32,
    pub students_approved: usize,
    pub pending_applications: usize,
    pub waitlisted_applications: usize,
    pub rejected_applications: usize,
    pub filled_percentage: f64,
}

impl SlotSummary {
    pub fn compute(total_slots: u32, applicants: &[Applicant]) -> Self {
        let counts = StatusCounts::tally(applicants);
        let filled_slots = u32::try_from(counts.approved).unwrap_or(u32::MAX);
        let filled_percentage = if total_slots == 0 {
            0.0
        } else {
            f64::from(filled_slots) / f64::from(total_slots) * 100.0
        };

        Self {
            total_slots,
            filled_slots,
            available_slots: total_slots.saturating_sub(filled_slots),
            students_approved: counts.approved,
            pending_applications: counts.pending,
            waitlisted_applications: counts.waitlisted,
            rejected_applications: counts.rejected,
            filled_percentage,
        }
    }

    pub fn is_oversubscribed(&self) -> bool {
        self.filled_slots > self.total_slots
    }
}

/// Landing view of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub total_applications: usize,
    pub slots: SlotSummary,
}

impl DashboardOverview {
    pub fn compute(total_slots: u32, applicants: &[Applicant]) -> Self {
        Self {
            total_applications: applicants.len(),
            slots: SlotSummary::compute(total_slots, applicants),
        }
    }
}
