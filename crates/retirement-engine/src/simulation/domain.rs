use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Career positions covered by the PMMG civilian staff regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServantRole {
    #[serde(rename = "PEBPM")]
    Pebpm,
    #[serde(rename = "EEBPM")]
    Eebpm,
    #[serde(rename = "ASPM")]
    Aspm,
    #[serde(rename = "AAPM")]
    Aapm,
    #[serde(rename = "AGPM")]
    Agpm,
}

impl ServantRole {
    pub const fn ordered() -> [Self; 5] {
        [Self::Pebpm, Self::Eebpm, Self::Aspm, Self::Aapm, Self::Agpm]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Pebpm => "PEBPM",
            Self::Eebpm => "EEBPM",
            Self::Aspm => "ASPM",
            Self::Aapm => "AAPM",
            Self::Agpm => "AGPM",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pebpm => "Professor de Ed. Básica (PEBPM)",
            Self::Eebpm => "Especialista em Ed. Básica (EEBPM)",
            Self::Aspm => "Assistente Administrativo (ASPM)",
            Self::Aapm => "Auxiliar Administrativo (AAPM)",
            Self::Agpm => "Analista de Gestão (AGPM)",
        }
    }

    /// Only classroom teachers are placed on the teacher track.
    pub const fn track(self) -> RuleTrack {
        match self {
            Self::Pebpm => RuleTrack::Teacher,
            _ => RuleTrack::General,
        }
    }

    pub const fn is_teacher(self) -> bool {
        matches!(self.track(), RuleTrack::Teacher)
    }
}

impl fmt::Display for ServantRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ServantRole {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase();
        Self::ordered()
            .into_iter()
            .find(|role| role.code() == normalized)
            .ok_or_else(|| {
                format!("unknown servant role '{value}' (expected PEBPM, EEBPM, ASPM, AAPM or AGPM)")
            })
    }
}

/// Threshold family a rule or a role belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleTrack {
    General,
    Teacher,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Masculino",
            Self::Female => "Feminino",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "masculino" => Ok(Self::Male),
            "female" | "f" | "feminino" => Ok(Self::Female),
            other => Err(format!("unknown gender '{other}' (expected male or female)")),
        }
    }
}

/// Pension regime the credited time was earned under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditRegime {
    #[serde(rename = "RGPS")]
    Rgps,
    #[serde(rename = "RPPS")]
    Rpps,
}

impl CreditRegime {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rgps => "RGPS (INSS)",
            Self::Rpps => "RPPS (Regime Próprio)",
        }
    }
}

/// Length of a credited period, either declared or measured from its dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CreditedDuration {
    Explicit { years: u32, days: u32 },
    Span { start: NaiveDate, end: NaiveDate },
}

/// Externally earned service time (averbação).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditedPeriod {
    pub duration: CreditedDuration,
    #[serde(default)]
    pub before_cutoff: bool,
    #[serde(default)]
    pub counts_toward_regency: bool,
    #[serde(default)]
    pub regime: Option<CreditRegime>,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub function: String,
}

/// Reasons a period stops counting toward contribution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionKind {
    Absence,
    UnpaidPersonalLeave,
    Suspension,
    ImproperPreRetirementLeave,
    FamilyIllnessLeave,
    #[default]
    Other,
}

impl DeductionKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Absence => "Faltas ao serviço",
            Self::UnpaidPersonalLeave => {
                "Período de licença para tratar de interesse particular (LIP) sem contribuição"
            }
            Self::Suspension => "Suspensões",
            Self::ImproperPreRetirementLeave => {
                "Período de afastamento preliminar à aposentadoria indevido"
            }
            Self::FamilyIllnessLeave => "Períodos de licença para tratar de pessoa doente da família",
            Self::Other => "Outros",
        }
    }
}

/// Calendar dates a record was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Non-counting period (desconto). `days` is what gets deducted; the span,
/// when present, only records where the count came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deduction {
    pub days: u32,
    #[serde(default)]
    pub before_cutoff: bool,
    #[serde(default)]
    pub kind: DeductionKind,
    #[serde(default)]
    pub span: Option<DateSpan>,
}

/// Banked bonus leave (férias-prêmio); every day counts twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusLeaveCredit {
    pub days: u32,
    #[serde(default)]
    pub before_cutoff: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CareerFlags {
    /// Entered public service until 31/12/2003.
    #[serde(default)]
    pub entered_until_2003: bool,
    /// Entered between 01/01/2004 and 15/09/2020.
    #[serde(default)]
    pub entered_2004_to_2020: bool,
    #[serde(default)]
    pub ten_years_public_service: bool,
    #[serde(default)]
    pub five_years_in_position: bool,
}

impl CareerFlags {
    pub const fn entered_before_cutoff(&self) -> bool {
        self.entered_until_2003 || self.entered_2004_to_2020
    }

    pub const fn entry_label(&self) -> &'static str {
        if self.entered_until_2003 {
            "Até 31/12/2003"
        } else if self.entered_2004_to_2020 {
            "Transição (Pós-2003)"
        } else {
            "Novo Regime"
        }
    }
}

/// Validated servant profile consumed by the engine.
///
/// Built through [`SimulationRequest::into_input`](super::SimulationRequest::into_input)
/// so every identification field is present; date ordering is re-checked by
/// the aggregator before any arithmetic runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationInput {
    pub role: ServantRole,
    pub gender: Gender,
    pub simulation_date: NaiveDate,
    pub birth_date: NaiveDate,
    pub admission_date: NaiveDate,
    pub credited_periods: Vec<CreditedPeriod>,
    pub deductions: Vec<Deduction>,
    pub bonus_leave_credits: Vec<BonusLeaveCredit>,
    pub career_flags: CareerFlags,
    pub regency_years: u32,
}
