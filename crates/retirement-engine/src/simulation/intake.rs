use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{
    BonusLeaveCredit, CareerFlags, CreditedDuration, CreditedPeriod, Deduction, Gender,
    ServantRole, SimulationInput,
};

/// Intake payload as captured by a form, CLI or HTTP client.
///
/// Identification fields are optional here so that an incomplete capture is
/// reported as [`InputError::MissingRequiredField`] rather than a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationRequest {
    pub role: Option<ServantRole>,
    pub gender: Option<Gender>,
    pub simulation_date: Option<NaiveDate>,
    pub birth_date: Option<NaiveDate>,
    pub admission_date: Option<NaiveDate>,
    pub credited_periods: Vec<CreditedPeriod>,
    pub deductions: Vec<Deduction>,
    pub bonus_leave_credits: Vec<BonusLeaveCredit>,
    pub career_flags: CareerFlags,
    pub regency_years: u32,
}

/// Rejection raised before any computation runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("required field '{field}' is missing")]
    MissingRequiredField { field: &'static str },
    #[error("{field}: start date {start} is after end date {end}")]
    InvalidRange {
        field: &'static str,
        start: NaiveDate,
        end: NaiveDate,
    },
}

impl InputError {
    pub fn field(&self) -> &'static str {
        match self {
            InputError::MissingRequiredField { field } | InputError::InvalidRange { field, .. } => {
                field
            }
        }
    }
}

impl SimulationRequest {
    pub fn into_input(self) -> Result<SimulationInput, InputError> {
        let input = SimulationInput {
            role: required(self.role, "role")?,
            gender: required(self.gender, "gender")?,
            simulation_date: required(self.simulation_date, "simulation_date")?,
            birth_date: required(self.birth_date, "birth_date")?,
            admission_date: required(self.admission_date, "admission_date")?,
            credited_periods: self.credited_periods,
            deductions: self.deductions,
            bonus_leave_credits: self.bonus_leave_credits,
            career_flags: self.career_flags,
            regency_years: self.regency_years,
        };

        input.validate_ranges()?;
        Ok(input)
    }
}

impl From<SimulationInput> for SimulationRequest {
    fn from(input: SimulationInput) -> Self {
        Self {
            role: Some(input.role),
            gender: Some(input.gender),
            simulation_date: Some(input.simulation_date),
            birth_date: Some(input.birth_date),
            admission_date: Some(input.admission_date),
            credited_periods: input.credited_periods,
            deductions: input.deductions,
            bonus_leave_credits: input.bonus_leave_credits,
            career_flags: input.career_flags,
            regency_years: input.regency_years,
        }
    }
}

impl SimulationInput {
    /// Checks `birth <= admission <= simulation` and every recorded span.
    pub fn validate_ranges(&self) -> Result<(), InputError> {
        ordered(self.birth_date, self.admission_date, "birth_date")?;
        ordered(self.admission_date, self.simulation_date, "admission_date")?;

        for period in &self.credited_periods {
            if let CreditedDuration::Span { start, end } = period.duration {
                ordered(start, end, "credited_periods")?;
            }
        }
        for span in self.deductions.iter().filter_map(|deduction| deduction.span) {
            ordered(span.start, span.end, "deductions")?;
        }

        Ok(())
    }
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, InputError> {
    value.ok_or(InputError::MissingRequiredField { field })
}

fn ordered(start: NaiveDate, end: NaiveDate, field: &'static str) -> Result<(), InputError> {
    if start > end {
        Err(InputError::InvalidRange { field, start, end })
    } else {
        Ok(())
    }
}
