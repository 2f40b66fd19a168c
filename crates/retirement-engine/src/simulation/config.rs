use serde::{Deserialize, Serialize};

use super::period::DayCountPolicy;

/// Engine settings fixed for every evaluation it performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub day_count_policy: DayCountPolicy,
}
