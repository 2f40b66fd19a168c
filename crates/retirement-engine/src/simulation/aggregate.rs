use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{CreditedDuration, CreditedPeriod, SimulationInput};
use super::intake::InputError;
use super::period::{period_between, DayCountPolicy, PeriodResult, DAYS_PER_YEAR};
use super::thresholds::CUTOFF_DATE;

/// Net age and contribution figures for one simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedTimes {
    pub age: PeriodResult,
    pub service: PeriodResult,
    pub credited_days: i64,
    pub deducted_days: i64,
    pub bonus_days: i64,
    /// Service + credited + doubled bonus − deducted. May be negative.
    pub contribution_days: i64,
    /// Declared regency years plus credited periods flagged as regency.
    pub regency_days: i64,
    pub cutoff: CutoffTimes,
}

impl AggregatedTimes {
    /// Birthdays reached by the simulation date.
    pub fn age_years(&self) -> i64 {
        self.age.completed_years
    }

    pub fn contribution_years(&self) -> i64 {
        self.contribution_days.div_euclid(DAYS_PER_YEAR)
    }

    pub fn regency_years(&self) -> i64 {
        self.regency_days.div_euclid(DAYS_PER_YEAR)
    }
}

/// The same quantities restricted to what had accrued by the cutoff date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutoffTimes {
    pub cutoff_date: NaiveDate,
    pub service: PeriodResult,
    pub credited_days: i64,
    pub deducted_days: i64,
    pub bonus_days: i64,
    pub contribution_days: i64,
}

/// Combines the intake records into age and contribution totals.
pub fn aggregate(
    input: &SimulationInput,
    policy: DayCountPolicy,
) -> Result<AggregatedTimes, InputError> {
    input.validate_ranges()?;

    let age = measure(input.birth_date, input.simulation_date, policy, "birth_date")?;
    let service = measure(
        input.admission_date,
        input.simulation_date,
        policy,
        "admission_date",
    )?;

    let credited_days = credited_total(input.credited_periods.iter(), policy)?;
    let deducted_days = input
        .deductions
        .iter()
        .map(|deduction| i64::from(deduction.days))
        .sum::<i64>();
    let bonus_days = input
        .bonus_leave_credits
        .iter()
        .map(|credit| i64::from(credit.days) * 2)
        .sum::<i64>();

    let contribution_days = service.total_days + credited_days + bonus_days - deducted_days;

    let regency_credit = credited_total(
        input
            .credited_periods
            .iter()
            .filter(|period| period.counts_toward_regency),
        policy,
    )?;
    let regency_days = i64::from(input.regency_years) * DAYS_PER_YEAR + regency_credit;

    let cutoff = cutoff_times(input, policy)?;

    Ok(AggregatedTimes {
        age,
        service,
        credited_days,
        deducted_days,
        bonus_days,
        contribution_days,
        regency_days,
        cutoff,
    })
}

fn cutoff_times(input: &SimulationInput, policy: DayCountPolicy) -> Result<CutoffTimes, InputError> {
    let cutoff_date = CUTOFF_DATE;
    let service_end = input.simulation_date.min(cutoff_date);
    let service = if input.admission_date > service_end {
        PeriodResult::zero()
    } else {
        measure(input.admission_date, service_end, policy, "admission_date")?
    };

    let credited_days = credited_total(
        input
            .credited_periods
            .iter()
            .filter(|period| period.before_cutoff),
        policy,
    )?;
    let deducted_days = input
        .deductions
        .iter()
        .filter(|deduction| deduction.before_cutoff)
        .map(|deduction| i64::from(deduction.days))
        .sum::<i64>();
    let bonus_days = input
        .bonus_leave_credits
        .iter()
        .filter(|credit| credit.before_cutoff)
        .map(|credit| i64::from(credit.days) * 2)
        .sum::<i64>();

    let contribution_days = service.total_days + credited_days + bonus_days - deducted_days;

    Ok(CutoffTimes {
        cutoff_date,
        service,
        credited_days,
        deducted_days,
        bonus_days,
        contribution_days,
    })
}

fn credited_total<'a>(
    periods: impl Iterator<Item = &'a CreditedPeriod>,
    policy: DayCountPolicy,
) -> Result<i64, InputError> {
    let mut total = 0;
    for period in periods {
        total += match period.duration {
            CreditedDuration::Explicit { years, days } => {
                i64::from(years) * DAYS_PER_YEAR + i64::from(days)
            }
            CreditedDuration::Span { start, end } => {
                measure(start, end, policy, "credited_periods")?.total_days
            }
        };
    }
    Ok(total)
}

fn measure(
    start: NaiveDate,
    end: NaiveDate,
    policy: DayCountPolicy,
    field: &'static str,
) -> Result<PeriodResult, InputError> {
    period_between(start, end, policy).map_err(|err| InputError::InvalidRange {
        field,
        start: err.start,
        end: err.end,
    })
}
