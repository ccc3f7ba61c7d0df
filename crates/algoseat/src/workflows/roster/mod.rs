mod parser;

pub use parser::RowIssue;

use crate::workflows::enrollment::domain::Applicant;
use crate::workflows::enrollment::validation::ApplicantValidator;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug)]
pub enum RosterImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidRow(RowIssue),
}

impl std::fmt::Display for RosterImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterImportError::Io(err) => write!(f, "failed to read roster file: {}", err),
            RosterImportError::Csv(err) => write!(f, "invalid roster CSV data: {}", err),
            RosterImportError::InvalidRow(issue) => {
                write!(f, "roster row {} rejected: {}", issue.row, issue.detail)
            }
        }
    }
}

impl std::error::Error for RosterImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterImportError::Io(err) => Some(err),
            RosterImportError::Csv(err) => Some(err),
            RosterImportError::InvalidRow(_) => None,
        }
    }
}

impl From<std::io::Error> for RosterImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RosterImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads applicant rosters exported as CSV.
pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Applicant>, RosterImportError> {
        let file = std::fs::File::open(path.as_ref())?;
        let applicants = Self::from_reader(file)?;
        info!(
            path = %path.as_ref().display(),
            applicants = applicants.len(),
            "roster imported"
        );
        Ok(applicants)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Applicant>, RosterImportError> {
        let applicants = parser::parse_applicants(reader)?;

        for applicant in &applicants {
            for issue in ApplicantValidator::check(applicant) {
                warn!(applicant = %applicant.id, %issue, "roster value outside documented range");
            }
        }

        Ok(applicants)
    }
}
