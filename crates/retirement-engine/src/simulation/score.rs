use serde::{Deserialize, Serialize};

use super::period::DAYS_PER_YEAR;

/// Combined age + contribution metric used by the points transition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub total_days: i64,
    pub whole_points: i64,
    pub remainder_days: i64,
}

impl ScoreResult {
    /// Days still needed to reach the next whole point.
    pub fn days_to_next_point(&self) -> i64 {
        DAYS_PER_YEAR - self.remainder_days
    }
}

pub fn score(age_days: i64, contribution_days: i64) -> ScoreResult {
    let total_days = age_days + contribution_days;
    ScoreResult {
        total_days,
        whole_points: total_days.div_euclid(DAYS_PER_YEAR),
        remainder_days: total_days.rem_euclid(DAYS_PER_YEAR),
    }
}
