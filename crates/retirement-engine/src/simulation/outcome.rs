use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::aggregate::AggregatedTimes;
use super::domain::{Gender, ServantRole};
use super::period::{format_date_br, format_days, DayCountPolicy};
use super::rules::RuleVerdictSet;
use super::score::ScoreResult;
use super::toll::TollResult;

/// Everything the engine derives for one simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub role: ServantRole,
    pub gender: Gender,
    pub simulation_date: NaiveDate,
    pub day_count_policy: DayCountPolicy,
    pub aggregated_times: AggregatedTimes,
    pub score: ScoreResult,
    /// 50% toll against the role's own target.
    pub toll: TollResult,
    /// 100% toll against the same target.
    pub full_toll: TollResult,
    pub verdicts: RuleVerdictSet,
    pub eligible: bool,
    pub projected_eligibility_date: NaiveDate,
    pub compulsory_date: NaiveDate,
}

impl SimulationOutcome {
    pub fn memory(&self) -> CalculationMemory {
        let times = &self.aggregated_times;
        CalculationMemory {
            age: times.age.label.clone(),
            age_days: times.age.total_days,
            service: times.service.label.clone(),
            service_days: times.service.total_days,
            credited: format_days(times.credited_days),
            deducted: format_days(times.deducted_days),
            bonus: format_days(times.bonus_days),
            contribution: format_days(times.contribution_days),
            contribution_days: times.contribution_days,
            score_points: self.score.whole_points,
            score_balance_days: self.score.remainder_days,
            days_to_next_point: self.score.days_to_next_point(),
            time_at_cutoff: format_days(self.toll.time_at_cutoff),
            missing_at_cutoff: format_days(self.toll.deficit_days),
            toll: format_days(self.toll.toll_days),
            required_time: format_days(self.toll.required_days()),
            projected_eligibility_date: format_date_br(self.projected_eligibility_date),
            compulsory_date: format_date_br(self.compulsory_date),
            verdict: self.verdict_summary().to_string(),
        }
    }

    pub fn verdict_summary(&self) -> &'static str {
        if self.eligible {
            "O servidor atende aos requisitos legais para aposentadoria em pelo menos uma regra."
        } else {
            "Os requisitos cumulativos para aposentadoria ainda não foram atingidos nesta data."
        }
    }
}

/// Display-ready calculation memory (memória de cálculo).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationMemory {
    pub age: String,
    pub age_days: i64,
    pub service: String,
    pub service_days: i64,
    pub credited: String,
    pub deducted: String,
    pub bonus: String,
    pub contribution: String,
    pub contribution_days: i64,
    pub score_points: i64,
    pub score_balance_days: i64,
    pub days_to_next_point: i64,
    pub time_at_cutoff: String,
    pub missing_at_cutoff: String,
    pub toll: String,
    pub required_time: String,
    pub projected_eligibility_date: String,
    pub compulsory_date: String,
    pub verdict: String,
}
