//! Statutory thresholds for the EC 104/2020 transition and permanent rules.
//!
//! Score requirements are step functions of the simulation date. Each table is
//! an ordered list of steps; the step in force is the latest one whose
//! effective date is on or before the simulation date, and dates before the
//! first step use the first step.

use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{Gender, RuleTrack, ServantRole};
use super::period::DAYS_PER_YEAR;

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid threshold date"),
    }
}

/// Publication date of EC 104/2020 separating the old and new regimes.
pub const CUTOFF_DATE: NaiveDate = ymd(2020, 9, 15);

/// Age at which retirement becomes compulsory, in calendar years.
pub const COMPULSORY_AGE_YEARS: u32 = 75;

/// A value that differs by gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenderPair {
    pub male: i64,
    pub female: i64,
}

impl GenderPair {
    pub const fn new(male: i64, female: i64) -> Self {
        Self { male, female }
    }

    pub const fn for_gender(self, gender: Gender) -> i64 {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
        }
    }
}

pub const POINTS_GENERAL_MIN_AGE: GenderPair = GenderPair::new(62, 56);
pub const POINTS_GENERAL_MIN_CONTRIBUTION_YEARS: GenderPair = GenderPair::new(35, 30);
pub const POINTS_TEACHER_MIN_AGE: GenderPair = GenderPair::new(57, 51);
pub const POINTS_TEACHER_MIN_CONTRIBUTION_YEARS: GenderPair = GenderPair::new(30, 25);
pub const TEACHER_TRANSITION_MIN_REGENCY_YEARS: GenderPair = GenderPair::new(30, 25);

pub const TOLL_HALF_GENERAL_MIN_AGE: GenderPair = GenderPair::new(60, 55);
pub const TOLL_HALF_TEACHER_MIN_AGE: GenderPair = GenderPair::new(55, 50);
pub const TOLL_FULL_GENERAL_MIN_AGE: GenderPair = GenderPair::new(60, 57);
pub const TOLL_FULL_TEACHER_MIN_AGE: GenderPair = GenderPair::new(55, 52);

pub const PERMANENT_GENERAL_MIN_AGE: GenderPair = GenderPair::new(65, 62);
pub const PERMANENT_GENERAL_MIN_CONTRIBUTION_YEARS: GenderPair = GenderPair::new(25, 25);
pub const PERMANENT_TEACHER_MIN_AGE: GenderPair = GenderPair::new(60, 57);
pub const PERMANENT_TEACHER_MIN_REGENCY_YEARS: GenderPair = GenderPair::new(25, 25);

pub const TOLL_TARGET_GENERAL_YEARS: GenderPair = GenderPair::new(35, 30);
pub const TOLL_TARGET_TEACHER_YEARS: GenderPair = GenderPair::new(30, 25);

/// One step of a score table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreStep {
    pub effective: NaiveDate,
    pub points: i64,
    pub label: &'static str,
}

const fn step(effective: NaiveDate, points: i64, label: &'static str) -> ScoreStep {
    ScoreStep {
        effective,
        points,
        label,
    }
}

const GENERAL_MALE: [ScoreStep; 4] = [
    step(CUTOFF_DATE, 97, "97 pts (até 31/03/22)"),
    step(ymd(2022, 4, 1), 98, "98 pts (01/04/22 a 30/06/23)"),
    step(ymd(2023, 7, 1), 99, "99 pts (01/07/23 a 30/09/24)"),
    step(ymd(2024, 10, 1), 100, "100 pts (Desde 01/10/24)"),
];

const GENERAL_FEMALE: [ScoreStep; 4] = [
    step(CUTOFF_DATE, 86, "86 pts (até 31/03/22)"),
    step(ymd(2022, 4, 1), 87, "87 pts (01/04/22 a 30/06/23)"),
    step(ymd(2023, 7, 1), 88, "88 pts (01/07/23 a 30/09/24)"),
    step(ymd(2024, 10, 1), 89, "89 pts (Desde 01/10/24)"),
];

const TEACHER_MALE: [ScoreStep; 9] = [
    step(ymd(2021, 1, 1), 92, "92 pts (em 2021)"),
    step(ymd(2022, 1, 1), 93, "93 pts (em 2022)"),
    step(ymd(2023, 1, 1), 94, "94 pts (em 2023)"),
    step(ymd(2024, 1, 1), 95, "95 pts (em 2024)"),
    step(ymd(2025, 1, 1), 96, "96 pts (em 2025)"),
    step(ymd(2026, 1, 1), 97, "97 pts (em 2026)"),
    step(ymd(2027, 1, 1), 98, "98 pts (em 2027)"),
    step(ymd(2028, 1, 1), 99, "99 pts (em 2028)"),
    step(ymd(2029, 1, 1), 100, "100 pts (Desde 2029)"),
];

const TEACHER_FEMALE: [ScoreStep; 12] = [
    step(ymd(2021, 1, 1), 81, "81 pts (em 2021)"),
    step(ymd(2022, 1, 1), 82, "82 pts (em 2022)"),
    step(ymd(2023, 1, 1), 83, "83 pts (em 2023)"),
    step(ymd(2024, 1, 1), 84, "84 pts (em 2024)"),
    step(ymd(2025, 1, 1), 85, "85 pts (em 2025)"),
    step(ymd(2026, 1, 1), 86, "86 pts (em 2026)"),
    step(ymd(2027, 1, 1), 87, "87 pts (em 2027)"),
    step(ymd(2028, 1, 1), 88, "88 pts (em 2028)"),
    step(ymd(2029, 1, 1), 89, "89 pts (em 2029)"),
    step(ymd(2030, 1, 1), 90, "90 pts (em 2030)"),
    step(ymd(2031, 1, 1), 91, "91 pts (em 2031)"),
    step(ymd(2032, 1, 1), 92, "92 pts (Desde 2032)"),
];

/// Score required by the points rules on a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequiredScore {
    pub points: i64,
    pub label: String,
}

pub fn score_table(track: RuleTrack, gender: Gender) -> &'static [ScoreStep] {
    match (track, gender) {
        (RuleTrack::General, Gender::Male) => &GENERAL_MALE,
        (RuleTrack::General, Gender::Female) => &GENERAL_FEMALE,
        (RuleTrack::Teacher, Gender::Male) => &TEACHER_MALE,
        (RuleTrack::Teacher, Gender::Female) => &TEACHER_FEMALE,
    }
}

pub fn track_required_score(track: RuleTrack, gender: Gender, date: NaiveDate) -> RequiredScore {
    let table = score_table(track, gender);
    let in_force = table.partition_point(|step| step.effective <= date);
    let step = table[in_force.saturating_sub(1)];
    RequiredScore {
        points: step.points,
        label: step.label.to_string(),
    }
}

pub fn required_score(role: ServantRole, gender: Gender, date: NaiveDate) -> RequiredScore {
    track_required_score(role.track(), gender, date)
}

/// Contribution target, in days, against which the toll is measured.
pub fn track_toll_target(track: RuleTrack, gender: Gender) -> i64 {
    let years = match track {
        RuleTrack::General => TOLL_TARGET_GENERAL_YEARS,
        RuleTrack::Teacher => TOLL_TARGET_TEACHER_YEARS,
    };
    years.for_gender(gender) * DAYS_PER_YEAR
}

pub fn required_toll_target(role: ServantRole, gender: Gender) -> i64 {
    track_toll_target(role.track(), gender)
}
