use serde::{Deserialize, Serialize};

use super::super::domain::RuleTrack;
use super::super::thresholds::{
    PERMANENT_GENERAL_MIN_AGE, PERMANENT_GENERAL_MIN_CONTRIBUTION_YEARS,
    PERMANENT_TEACHER_MIN_AGE, PERMANENT_TEACHER_MIN_REGENCY_YEARS, POINTS_GENERAL_MIN_AGE,
    POINTS_GENERAL_MIN_CONTRIBUTION_YEARS, POINTS_TEACHER_MIN_AGE,
    POINTS_TEACHER_MIN_CONTRIBUTION_YEARS, TEACHER_TRANSITION_MIN_REGENCY_YEARS,
    TOLL_FULL_GENERAL_MIN_AGE, TOLL_FULL_TEACHER_MIN_AGE, TOLL_HALF_GENERAL_MIN_AGE,
    TOLL_HALF_TEACHER_MIN_AGE,
};
use super::super::toll::TollMode;
use super::criteria::{Criterion, EntryWindow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleFamily {
    Points,
    Toll,
    Permanent,
    Compulsory,
}

pub(crate) struct RuleDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub family: RuleFamily,
    pub teacher_only: bool,
    pub criteria: &'static [Criterion],
}

use Criterion::*;
use EntryWindow::*;

const GENERAL: RuleTrack = RuleTrack::General;
const TEACHER: RuleTrack = RuleTrack::Teacher;

pub(crate) static CATALOGUE: [RuleDefinition; 11] = [
    RuleDefinition {
        id: "points_general",
        name: "Regra Transição - Pontos (Geral)",
        description: "Soma da idade + tempo de contribuição. Pontuação progressiva anual.",
        family: RuleFamily::Points,
        teacher_only: false,
        criteria: &[
            Entry(BeforeCutoff),
            MinimumAge(POINTS_GENERAL_MIN_AGE),
            MinimumContributionYears(POINTS_GENERAL_MIN_CONTRIBUTION_YEARS),
            MinimumScore(GENERAL),
        ],
    },
    RuleDefinition {
        id: "points_teacher",
        name: "Regra Transição - Pontos (Professor)",
        description: "Exclusivo PEBPM. Soma da idade + tempo. Redução de 5 anos nos requisitos.",
        family: RuleFamily::Points,
        teacher_only: true,
        criteria: &[
            Entry(BeforeCutoff),
            MinimumAge(POINTS_TEACHER_MIN_AGE),
            MinimumContributionYears(POINTS_TEACHER_MIN_CONTRIBUTION_YEARS),
            MinimumRegencyYears(TEACHER_TRANSITION_MIN_REGENCY_YEARS),
            MinimumScore(TEACHER),
        ],
    },
    RuleDefinition {
        id: "toll50_general_integral",
        name: "Regra 1 - Pedágio Geral (Integral)",
        description: "Ingresso até 31/12/2003. Pedágio de 50%. Direito a Integralidade e Paridade.",
        family: RuleFamily::Toll,
        teacher_only: false,
        criteria: &[
            Entry(Until2003),
            MinimumAge(TOLL_HALF_GENERAL_MIN_AGE),
            BaseContribution,
            TollContribution(TollMode::Half),
        ],
    },
    RuleDefinition {
        id: "toll50_general_average",
        name: "Regra 2 - Pedágio Geral (Média)",
        description: "Ingresso entre 01/01/2004 e 15/09/2020. Pedágio de 50%. Cálculo pela média.",
        family: RuleFamily::Toll,
        teacher_only: false,
        criteria: &[
            Entry(From2004To2020),
            MinimumAge(TOLL_HALF_GENERAL_MIN_AGE),
            BaseContribution,
            TollContribution(TollMode::Half),
        ],
    },
    RuleDefinition {
        id: "toll50_teacher_integral",
        name: "Regra 3 - Pedágio Professor (Integral)",
        description: "Exclusivo PEBPM. Ingresso até 2003. Pedágio 50%. Redução de 5 anos na idade/tempo.",
        family: RuleFamily::Toll,
        teacher_only: true,
        criteria: &[
            Entry(Until2003),
            MinimumAge(TOLL_HALF_TEACHER_MIN_AGE),
            MinimumRegencyYears(TEACHER_TRANSITION_MIN_REGENCY_YEARS),
            BaseContribution,
            TollContribution(TollMode::Half),
        ],
    },
    RuleDefinition {
        id: "toll50_teacher_average",
        name: "Regra 4 - Pedágio Professor (Média)",
        description: "Exclusivo PEBPM. Ingresso 2004-2020. Pedágio 50%. Cálculo pela média.",
        family: RuleFamily::Toll,
        teacher_only: true,
        criteria: &[
            Entry(From2004To2020),
            MinimumAge(TOLL_HALF_TEACHER_MIN_AGE),
            MinimumRegencyYears(TEACHER_TRANSITION_MIN_REGENCY_YEARS),
            BaseContribution,
            TollContribution(TollMode::Half),
        ],
    },
    RuleDefinition {
        id: "toll100_general",
        name: "Regra 5 - Pedágio 100% (Geral)",
        description: "Ingresso até 15/09/2020. Pedágio de 100% sobre o tempo faltante no corte.",
        family: RuleFamily::Toll,
        teacher_only: false,
        criteria: &[
            Entry(BeforeCutoff),
            MinimumAge(TOLL_FULL_GENERAL_MIN_AGE),
            BaseContribution,
            TollContribution(TollMode::Full),
        ],
    },
    RuleDefinition {
        id: "toll100_teacher",
        name: "Regra 6 - Pedágio 100% (Professor)",
        description: "Exclusivo PEBPM. Ingresso até 15/09/2020. Pedágio de 100% com redução de 5 anos.",
        family: RuleFamily::Toll,
        teacher_only: true,
        criteria: &[
            Entry(BeforeCutoff),
            MinimumAge(TOLL_FULL_TEACHER_MIN_AGE),
            MinimumRegencyYears(TEACHER_TRANSITION_MIN_REGENCY_YEARS),
            BaseContribution,
            TollContribution(TollMode::Full),
        ],
    },
    RuleDefinition {
        id: "permanent_general",
        name: "Regra Permanente (Idade)",
        description: "Regra definitiva pós-reforma. Exige idade mínima, tempo de contribuição e tempo de serviço público/cargo.",
        family: RuleFamily::Permanent,
        teacher_only: false,
        criteria: &[
            MinimumAge(PERMANENT_GENERAL_MIN_AGE),
            MinimumContributionYears(PERMANENT_GENERAL_MIN_CONTRIBUTION_YEARS),
            TenYearsPublicService,
            FiveYearsInPosition,
        ],
    },
    RuleDefinition {
        id: "permanent_teacher",
        name: "Regra Permanente (Professor)",
        description: "Regra definitiva para PEBPM. Redução de idade em relação à geral.",
        family: RuleFamily::Permanent,
        teacher_only: true,
        criteria: &[
            MinimumAge(PERMANENT_TEACHER_MIN_AGE),
            MinimumRegencyYears(PERMANENT_TEACHER_MIN_REGENCY_YEARS),
            TenYearsPublicService,
            FiveYearsInPosition,
        ],
    },
    RuleDefinition {
        id: "compulsory",
        name: "Regra Permanente - Compulsória",
        description: "Afastamento obrigatório por idade limite.",
        family: RuleFamily::Compulsory,
        teacher_only: false,
        criteria: &[CompulsoryAge, CompulsoryDate],
    },
];

/// Static description of a catalogue rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSummary {
    pub rule_id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub family: RuleFamily,
    pub teacher_only: bool,
}

pub fn rule_catalogue() -> Vec<RuleSummary> {
    CATALOGUE
        .iter()
        .map(|rule| RuleSummary {
            rule_id: rule.id,
            name: rule.name,
            description: rule.description,
            family: rule.family,
            teacher_only: rule.teacher_only,
        })
        .collect()
}
