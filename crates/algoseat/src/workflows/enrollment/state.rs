//! Dashboard session state as a value with pure transitions.
//!
//! `DashboardState::apply` never touches the receiver; each action yields a
//! fresh state or a `StateError`, which keeps navigation and status edits
//! testable without a UI.

use serde::{Deserialize, Serialize};

use super::domain::{Applicant, ApplicantId, ApplicationStatus};
use super::session::AdminCredentials;

/// Screens reachable from the dashboard sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "page", content = "target", rename_all = "snake_case")]
pub enum DashboardPage {
    #[default]
    Overview,
    SlotVisualization,
    Applications(ApplicationStatus),
    Rankings,
    ApplicantProfile(ApplicantId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    Login { username: String, password: String },
    Logout,
    Navigate(DashboardPage),
    ViewApplicant(ApplicantId),
    UpdateStatus {
        id: ApplicantId,
        status: ApplicationStatus,
    },
    BackToList,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("invalid administrator credentials")]
    InvalidCredentials,
    #[error("log in before using the dashboard")]
    Unauthenticated,
    #[error("no applicant with id {0}")]
    UnknownApplicant(ApplicantId),
    #[error("no applicant is selected")]
    NothingSelected,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub authenticated: bool,
    pub page: DashboardPage,
    pub selected: Option<ApplicantId>,
    pub applicants: Vec<Applicant>,
}

impl DashboardState {
    pub fn new(applicants: Vec<Applicant>) -> Self {
        Self {
            authenticated: false,
            page: DashboardPage::Overview,
            selected: None,
            applicants,
        }
    }

    pub fn selected_applicant(&self) -> Option<&Applicant> {
        let id = self.selected.as_ref()?;
        self.applicants.iter().find(|applicant| &applicant.id == id)
    }

    pub fn apply(
        &self,
        action: DashboardAction,
        credentials: &AdminCredentials,
    ) -> Result<DashboardState, StateError> {
        match action {
            DashboardAction::Login { username, password } => {
                if !credentials.matches(&username, &password) {
                    return Err(StateError::InvalidCredentials);
                }
                Ok(Self {
                    authenticated: true,
                    ..self.clone()
                })
            }
            _ if !self.authenticated => Err(StateError::Unauthenticated),
            DashboardAction::Logout => Ok(Self {
                authenticated: false,
                page: DashboardPage::Overview,
                selected: None,
                applicants: self.applicants.clone(),
            }),
            DashboardAction::Navigate(page) => Ok(Self {
                page,
                selected: None,
                ..self.clone()
            }),
            DashboardAction::ViewApplicant(id) => {
                if !self.applicants.iter().any(|applicant| applicant.id == id) {
                    return Err(StateError::UnknownApplicant(id));
                }
                Ok(Self {
                    page: DashboardPage::ApplicantProfile(id.clone()),
                    selected: Some(id),
                    ..self.clone()
                })
            }
            DashboardAction::UpdateStatus { id, status } => {
                let applicants = update_status(&self.applicants, &id, status)?;
                Ok(Self {
                    applicants,
                    ..self.clone()
                })
            }
            DashboardAction::BackToList => {
                let applicant = self
                    .selected_applicant()
                    .ok_or(StateError::NothingSelected)?;
                Ok(Self {
                    page: DashboardPage::Applications(applicant.status),
                    selected: None,
                    ..self.clone()
                })
            }
        }
    }
}

/// New roster where every record with `id` carries `status`.
pub fn update_status(
    applicants: &[Applicant],
    id: &ApplicantId,
    status: ApplicationStatus,
) -> Result<Vec<Applicant>, StateError> {
    if !applicants.iter().any(|applicant| &applicant.id == id) {
        return Err(StateError::UnknownApplicant(id.clone()));
    }

    Ok(applicants
        .iter()
        .map(|applicant| {
            if &applicant.id == id && applicant.status.can_transition_to(status) {
                applicant.with_status(status)
            } else {
                applicant.clone()
            }
        })
        .collect())
}
