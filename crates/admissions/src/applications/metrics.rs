use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{ApplicationRecord, ApplicationStatus};

/// Aggregate dashboard figures, recomputed from the store on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub total_applicants: usize,
    pub verified_applicants: usize,
    pub rejected_applicants: usize,
    pub pending_applicants: usize,
    pub programs: Vec<ProgramCount>,
    pub application_trends: Vec<TrendPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub count: usize,
}

impl MetricsSnapshot {
    pub fn from_records(records: &[ApplicationRecord]) -> Self {
        let mut verified_applicants = 0;
        let mut rejected_applicants = 0;
        let mut pending_applicants = 0;
        let mut programs: Vec<ProgramCount> = Vec::new();
        let mut program_slots: HashMap<&str, usize> = HashMap::new();
        let mut trends: BTreeMap<NaiveDate, usize> = BTreeMap::new();

        for record in records {
            match record.status {
                ApplicationStatus::Verified => verified_applicants += 1,
                ApplicationStatus::Rejected => rejected_applicants += 1,
                ApplicationStatus::Pending => pending_applicants += 1,
                ApplicationStatus::Unrecognized(_) => {}
            }

            // programs keep first-seen order
            match program_slots.get(record.program.as_str()) {
                Some(&slot) => programs[slot].count += 1,
                None => {
                    program_slots.insert(record.program.as_str(), programs.len());
                    programs.push(ProgramCount {
                        name: record.program.clone(),
                        count: 1,
                    });
                }
            }

            *trends.entry(record.application_date).or_default() += 1;
        }

        Self {
            total_applicants: records.len(),
            verified_applicants,
            rejected_applicants,
            pending_applicants,
            programs,
            application_trends: trends
                .into_iter()
                .map(|(date, count)| TrendPoint { date, count })
                .collect(),
        }
    }
}
