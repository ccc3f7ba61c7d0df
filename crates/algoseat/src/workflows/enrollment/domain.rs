use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for applicant records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicantId(pub String);

impl fmt::Display for ApplicantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ApplicantId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Candidate for an enrollment slot.
///
/// The four numeric fields feed the ranking engine. `status` is owned by the
/// dashboard state layer and is never read while scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    pub id: ApplicantId,
    pub full_name: String,
    pub application_id: String,
    pub address: String,
    pub school_attended: String,
    /// GPA-like scale, 0.0 to 4.0.
    pub grades: f64,
    /// Entrance exam result, 0 to 100.
    pub entrance_exam_score: f64,
    /// Monthly household income in currency units.
    pub household_income: f64,
    /// Distance to the school in kilometers.
    pub proximity_to_school: f64,
    pub parent_guardian_names: String,
    pub submission_date: NaiveDate,
    pub status: ApplicationStatus,
}

impl Applicant {
    /// Copy of this applicant carrying a different status.
    pub fn with_status(&self, status: ApplicationStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

/// Admission decision state of an applicant.
///
/// Every state may move to every other state; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Waitlisted,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::Pending,
        ApplicationStatus::Approved,
        ApplicationStatus::Waitlisted,
        ApplicationStatus::Rejected,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Waitlisted => "waitlisted",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    pub const fn list_title(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending Applications",
            ApplicationStatus::Approved => "Approved Applications",
            ApplicationStatus::Waitlisted => "Waitlisted Applications",
            ApplicationStatus::Rejected => "Rejected Applications",
        }
    }

    pub const fn list_subtitle(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Applications awaiting review and decision",
            ApplicationStatus::Approved => "Students accepted into the program",
            ApplicationStatus::Waitlisted => "Applications awaiting slot availability",
            ApplicationStatus::Rejected => "Applications that did not meet admission criteria",
        }
    }

    /// Status changes carry no guard; kept as a function so callers state intent.
    pub const fn can_transition_to(self, _next: ApplicationStatus) -> bool {
        true
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown application status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for ApplicationStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "waitlisted" => Ok(Self::Waitlisted),
            "rejected" => Ok(Self::Rejected),
            _ => Err(UnknownStatus(value.to_string())),
        }
    }
}
