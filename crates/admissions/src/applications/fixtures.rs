//! Synthetic application records used to seed the in-memory store.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::domain::{ApplicationId, ApplicationRecord, ApplicationStatus, TestScores};

/// Programs an applicant can be enrolled into.
pub const PROGRAMS: [&str; 5] = [
    "Computer Science",
    "Engineering",
    "Business",
    "Medicine",
    "Law",
];

const RECORDS_PER_MONTH: u32 = 8;

/// Shape of the generated fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureConfig {
    pub count: u32,
    pub year: i32,
    pub seed: u64,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            count: 25,
            year: 2023,
            seed: 2023,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("cannot build application date {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

/// Generate `config.count` records in id order. The same config always yields
/// the same records.
pub fn generate_applications(
    config: &FixtureConfig,
) -> Result<Vec<ApplicationRecord>, FixtureError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    (1..=config.count)
        .map(|sequence| fixture_record(config.year, sequence, &mut rng))
        .collect()
}

fn fixture_record(
    year: i32,
    sequence: u32,
    rng: &mut StdRng,
) -> Result<ApplicationRecord, FixtureError> {
    let program = PROGRAMS[sequence as usize % PROGRAMS.len()];
    let status = match sequence % 3 {
        0 => ApplicationStatus::Pending,
        1 => ApplicationStatus::Verified,
        _ => ApplicationStatus::Rejected,
    };
    let notes = if sequence % 4 == 0 {
        "Scholarship applicant"
    } else {
        "Regular applicant"
    };

    let gpa: f64 = rng.gen_range(2.0..4.0);
    let test_scores = TestScores {
        sat: rng.gen_range(1200..1600),
        gpa: (gpa * 10.0).round() / 10.0,
    };

    Ok(ApplicationRecord {
        id: ApplicationId::sequenced(year, sequence),
        name: format!("Student {sequence}"),
        email: format!("student{sequence}@university.edu"),
        program: program.to_string(),
        status,
        application_date: fixture_date(year, sequence)?,
        documents: vec![
            format!("transcript_{sequence}.pdf"),
            format!("recommendation_{sequence}.pdf"),
        ],
        test_scores,
        address: format!("{sequence} Main Street, City"),
        phone: format!("+1-555-01{sequence:02}"),
        guardian: format!("Guardian {sequence}"),
        notes: notes.to_string(),
    })
}

// Eight applications per month starting in January, spread over days 1-28.
fn fixture_date(year: i32, sequence: u32) -> Result<NaiveDate, FixtureError> {
    let month = sequence.div_ceil(RECORDS_PER_MONTH).clamp(1, 12);
    let day = sequence % 28 + 1;
    NaiveDate::from_ymd_opt(year, month, day).ok_or(FixtureError::InvalidDate { year, month, day })
}
