use serde::{Deserialize, Serialize};

/// Surcharge applied to the time missing at the cutoff date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TollMode {
    Half,
    Full,
}

impl TollMode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Half => "50%",
            Self::Full => "100%",
        }
    }
}

/// Pedágio owed on top of the target contribution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TollResult {
    pub mode: TollMode,
    pub time_at_cutoff: i64,
    pub target_days: i64,
    pub deficit_days: i64,
    pub toll_days: i64,
}

impl TollResult {
    /// Contribution time required once the toll is added.
    pub fn required_days(&self) -> i64 {
        self.target_days + self.toll_days
    }
}

pub fn toll(time_at_cutoff: i64, target_days: i64, mode: TollMode) -> TollResult {
    let deficit_days = (target_days - time_at_cutoff).max(0);
    let toll_days = match mode {
        // always rounds up: ceil(deficit * 0.5)
        TollMode::Half => (deficit_days + 1) / 2,
        TollMode::Full => deficit_days,
    };

    TollResult {
        mode,
        time_at_cutoff,
        target_days,
        deficit_days,
        toll_days,
    }
}
