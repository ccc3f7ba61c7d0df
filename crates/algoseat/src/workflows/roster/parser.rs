use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::RosterImportError;
use crate::workflows::enrollment::domain::{Applicant, ApplicantId, ApplicationStatus};

/// Row-level problem that is not a CSV syntax error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowIssue {
    /// 1-based data row (header excluded).
    pub row: usize,
    pub detail: String,
}

pub(crate) fn parse_applicants<R: Read>(reader: R) -> Result<Vec<Applicant>, RosterImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut applicants = Vec::new();

    for (index, record) in csv_reader.deserialize::<RosterRow>().enumerate() {
        let row = record?;
        let applicant = row.into_applicant().map_err(|detail| {
            RosterImportError::InvalidRow(RowIssue {
                row: index + 1,
                detail,
            })
        })?;
        applicants.push(applicant);
    }

    Ok(applicants)
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    id: String,
    #[serde(default)]
    full_name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    application_id: Option<String>,
    #[serde(default)]
    address: String,
    #[serde(default)]
    school_attended: String,
    grades: f64,
    entrance_exam_score: f64,
    household_income: f64,
    proximity_to_school: f64,
    #[serde(default)]
    parent_guardian_names: String,
    submission_date: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    status: Option<String>,
}

impl RosterRow {
    fn into_applicant(self) -> Result<Applicant, String> {
        if self.id.trim().is_empty() {
            return Err("id column is empty".to_string());
        }

        let submission_date = NaiveDate::parse_from_str(self.submission_date.trim(), "%Y-%m-%d")
            .map_err(|err| {
                format!(
                    "submission_date '{}' is not YYYY-MM-DD ({err})",
                    self.submission_date
                )
            })?;

        let status = match self.status.as_deref() {
            Some(raw) => raw.parse::<ApplicationStatus>().map_err(|err| err.to_string())?,
            None => ApplicationStatus::Pending,
        };

        let application_id = self.application_id.unwrap_or_else(|| self.id.clone());

        Ok(Applicant {
            id: ApplicantId(self.id),
            full_name: self.full_name,
            application_id,
            address: self.address,
            school_attended: self.school_attended,
            grades: self.grades,
            entrance_exam_score: self.entrance_exam_score,
            household_income: self.household_income,
            proximity_to_school: self.proximity_to_school,
            parent_guardian_names: self.parent_guardian_names,
            submission_date,
            status,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
