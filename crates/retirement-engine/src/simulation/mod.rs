//! Retirement eligibility simulation for PMMG civilian staff.
//!
//! The pipeline is one-way and pure: intake is validated into a
//! [`SimulationInput`], times are aggregated under a single
//! [`DayCountPolicy`], score and toll are derived, and the rule catalogue is
//! evaluated into a [`RuleVerdictSet`].

pub mod aggregate;
pub mod batch;
mod config;
pub mod domain;
mod intake;
pub mod period;
pub mod router;
pub mod rules;
pub mod score;
pub mod thresholds;
pub mod toll;

mod outcome;

#[cfg(test)]
mod tests;

pub use aggregate::{aggregate, AggregatedTimes, CutoffTimes};
pub use batch::{read_requests, write_summary_csv, BatchEntry, BatchError};
pub use config::SimulationConfig;
pub use domain::{
    BonusLeaveCredit, CareerFlags, CreditRegime, CreditedDuration, CreditedPeriod, DateSpan,
    Deduction, DeductionKind, Gender, RuleTrack, ServantRole, SimulationInput,
};
pub use intake::{InputError, SimulationRequest};
pub use outcome::{CalculationMemory, SimulationOutcome};
pub use period::{period_between, DayCountPolicy, InvalidRangeError, PeriodResult};
pub use router::simulation_router;
pub use rules::{rule_catalogue, Requirement, RuleFamily, RuleSummary, RuleVerdict, RuleVerdictSet};
pub use score::{score, ScoreResult};
pub use thresholds::{required_score, required_toll_target, RequiredScore, CUTOFF_DATE};
pub use toll::{toll, TollMode, TollResult};

use chrono::{Days, Months, NaiveDate};
use tracing::debug;

use rules::{evaluate_rules, RuleContext};
use thresholds::COMPULSORY_AGE_YEARS;

/// Stateless evaluator applying the rule catalogue to a servant profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct RetirementEngine {
    config: SimulationConfig,
}

impl RetirementEngine {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn policy(&self) -> DayCountPolicy {
        self.config.day_count_policy
    }

    pub fn evaluate(&self, input: &SimulationInput) -> Result<SimulationOutcome, InputError> {
        let policy = self.policy();
        let times = aggregate(input, policy)?;
        let score = score(times.age.total_days, times.contribution_days);

        let target_days = required_toll_target(input.role, input.gender);
        let half = toll(times.cutoff.contribution_days, target_days, TollMode::Half);
        let full = toll(times.cutoff.contribution_days, target_days, TollMode::Full);

        let compulsory_date = compulsory_date(input.birth_date);
        let verdicts = evaluate_rules(&RuleContext {
            input,
            times: &times,
            score: &score,
            compulsory_date,
        });
        let eligible = verdicts.any_satisfied();

        let missing_days = (half.required_days() - times.contribution_days).max(0);
        let projected_eligibility_date = input
            .simulation_date
            .checked_add_days(Days::new(missing_days.unsigned_abs()))
            .unwrap_or(NaiveDate::MAX);

        debug!(
            role = %input.role,
            policy = %policy,
            contribution_days = times.contribution_days,
            points = score.whole_points,
            toll_days = half.toll_days,
            eligible,
            "simulation evaluated"
        );

        Ok(SimulationOutcome {
            role: input.role,
            gender: input.gender,
            simulation_date: input.simulation_date,
            day_count_policy: policy,
            aggregated_times: times,
            score,
            toll: half,
            full_toll: full,
            verdicts,
            eligible,
            projected_eligibility_date,
            compulsory_date,
        })
    }

    /// Validates a raw request and evaluates it.
    pub fn evaluate_request(
        &self,
        request: SimulationRequest,
    ) -> Result<SimulationOutcome, InputError> {
        let input = request.into_input()?;
        self.evaluate(&input)
    }
}

/// Birth date plus 75 calendar years; 29 February falls back to 28 February.
pub fn compulsory_date(birth_date: NaiveDate) -> NaiveDate {
    birth_date
        .checked_add_months(Months::new(COMPULSORY_AGE_YEARS * 12))
        .unwrap_or(NaiveDate::MAX)
}
