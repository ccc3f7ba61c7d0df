use algoseat::workflows::enrollment::{Applicant, ApplicantId, ApplicationStatus};
use chrono::NaiveDate;

struct SeedRow {
    id: &'static str,
    full_name: &'static str,
    address: &'static str,
    school_attended: &'static str,
    grades: f64,
    entrance_exam_score: f64,
    household_income: f64,
    proximity_to_school: f64,
    parent_guardian_names: &'static str,
    submitted: (i32, u32, u32),
    status: ApplicationStatus,
}

const SEED_ROWS: [SeedRow; 10] = [
    SeedRow {
        id: "1",
        full_name: "Maria Santos",
        address: "123 Rizal Street, Quezon City",
        school_attended: "Quezon City Elementary School",
        grades: 3.8,
        entrance_exam_score: 92.0,
        household_income: 15000.0,
        proximity_to_school: 2.0,
        parent_guardian_names: "Jose Santos, Ana Santos",
        submitted: (2024, 1, 15),
        status: ApplicationStatus::Pending,
    },
    SeedRow {
        id: "2",
        full_name: "Juan Dela Cruz",
        address: "45 Mabini Avenue, Manila",
        school_attended: "Manila Central School",
        grades: 3.2,
        entrance_exam_score: 80.0,
        household_income: 60000.0,
        proximity_to_school: 1.0,
        parent_guardian_names: "Pedro Dela Cruz",
        submitted: (2024, 1, 16),
        status: ApplicationStatus::Approved,
    },
    SeedRow {
        id: "3",
        full_name: "Ana Reyes",
        address: "8 Bonifacio Road, Pasig City",
        school_attended: "Pasig Elementary School",
        grades: 3.9,
        entrance_exam_score: 97.0,
        household_income: 12000.0,
        proximity_to_school: 3.0,
        parent_guardian_names: "Carmen Reyes",
        submitted: (2024, 1, 17),
        status: ApplicationStatus::Pending,
    },
    SeedRow {
        id: "4",
        full_name: "Carlos Mendoza",
        address: "17 Luna Street, Marikina",
        school_attended: "Marikina Heights Elementary",
        grades: 2.9,
        entrance_exam_score: 75.0,
        household_income: 8000.0,
        proximity_to_school: 6.5,
        parent_guardian_names: "Rosa Mendoza, Luis Mendoza",
        submitted: (2024, 1, 18),
        status: ApplicationStatus::Waitlisted,
    },
    SeedRow {
        id: "5",
        full_name: "Isabel Garcia",
        address: "230 Aurora Boulevard, San Juan",
        school_attended: "San Juan Elementary School",
        grades: 3.5,
        entrance_exam_score: 88.0,
        household_income: 22000.0,
        proximity_to_school: 0.5,
        parent_guardian_names: "Teresa Garcia",
        submitted: (2024, 1, 19),
        status: ApplicationStatus::Approved,
    },
    SeedRow {
        id: "6",
        full_name: "Miguel Torres",
        address: "5 Katipunan Avenue, Quezon City",
        school_attended: "Loyola Heights Elementary",
        grades: 2.1,
        entrance_exam_score: 55.0,
        household_income: 95000.0,
        proximity_to_school: 12.0,
        parent_guardian_names: "Ramon Torres",
        submitted: (2024, 1, 20),
        status: ApplicationStatus::Rejected,
    },
    SeedRow {
        id: "7",
        full_name: "Sofia Villanueva",
        address: "62 Shaw Boulevard, Mandaluyong",
        school_attended: "Mandaluyong Elementary School",
        grades: 3.6,
        entrance_exam_score: 85.0,
        household_income: 30000.0,
        proximity_to_school: 1.5,
        parent_guardian_names: "Elena Villanueva, Marco Villanueva",
        submitted: (2024, 1, 21),
        status: ApplicationStatus::Pending,
    },
    SeedRow {
        id: "8",
        full_name: "Paolo Ramos",
        address: "19 Ortigas Extension, Cainta",
        school_attended: "Cainta Elementary School",
        grades: 3.0,
        entrance_exam_score: 78.0,
        household_income: 18000.0,
        proximity_to_school: 4.0,
        parent_guardian_names: "Gloria Ramos",
        submitted: (2024, 1, 22),
        status: ApplicationStatus::Waitlisted,
    },
    SeedRow {
        id: "9",
        full_name: "Bea Navarro",
        address: "77 J.P. Rizal Street, Makati",
        school_attended: "Makati Elementary School",
        grades: 3.7,
        entrance_exam_score: 90.0,
        household_income: 45000.0,
        proximity_to_school: 2.5,
        parent_guardian_names: "Victor Navarro, Liza Navarro",
        submitted: (2024, 1, 23),
        status: ApplicationStatus::Approved,
    },
    SeedRow {
        id: "10",
        full_name: "Rafael Aquino",
        address: "301 Marcos Highway, Antipolo",
        school_attended: "Antipolo Elementary School",
        grades: 3.4,
        entrance_exam_score: 83.0,
        household_income: 10000.0,
        proximity_to_school: 5.0,
        parent_guardian_names: "Nora Aquino",
        submitted: (2024, 1, 24),
        status: ApplicationStatus::Pending,
    },
];

/// Sample roster used by `serve` and `demo` when no CSV is supplied.
pub(crate) fn seed_roster() -> Vec<Applicant> {
    SEED_ROWS
        .iter()
        .map(|row| {
            let (year, month, day) = row.submitted;
            Applicant {
                id: ApplicantId::from(row.id),
                full_name: row.full_name.to_string(),
                application_id: format!("APP-2024-{:0>3}", row.id),
                address: row.address.to_string(),
                school_attended: row.school_attended.to_string(),
                grades: row.grades,
                entrance_exam_score: row.entrance_exam_score,
                household_income: row.household_income,
                proximity_to_school: row.proximity_to_school,
                parent_guardian_names: row.parent_guardian_names.to_string(),
                submission_date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN),
                status: row.status,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoseat::workflows::enrollment::{ApplicantValidator, StatusCounts};

    #[test]
    fn seed_roster_is_in_domain_with_unique_ids() {
        let roster = seed_roster();
        assert_eq!(roster.len(), 10);
        assert!(roster.iter().all(ApplicantValidator::is_in_domain));

        let mut ids = roster.iter().map(|a| a.id.clone()).collect::<Vec<_>>();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 10);
        assert_eq!(roster[9].application_id, "APP-2024-010");
    }

    #[test]
    fn seed_roster_covers_every_status() {
        let counts = StatusCounts::tally(&seed_roster());
        assert_eq!(counts.pending, 4);
        assert_eq!(counts.approved, 3);
        assert_eq!(counts.waitlisted, 2);
        assert_eq!(counts.rejected, 1);
    }
}
