use super::super::domain::{RuleTrack, ServantRole};
use super::super::period::format_date_br;
use super::super::thresholds::{
    required_toll_target, track_required_score, GenderPair, COMPULSORY_AGE_YEARS,
};
use super::super::toll::{toll, TollMode};
use super::{Requirement, RuleContext};

/// Entry windows recognised by the transition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryWindow {
    Until2003,
    From2004To2020,
    BeforeCutoff,
}

/// A single declarative check. Rules are lists of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Criterion {
    TeacherRole,
    Entry(EntryWindow),
    MinimumAge(GenderPair),
    MinimumContributionYears(GenderPair),
    MinimumRegencyYears(GenderPair),
    MinimumScore(RuleTrack),
    /// Contribution reaches the toll target of the servant's own role.
    BaseContribution,
    TollContribution(TollMode),
    TenYearsPublicService,
    FiveYearsInPosition,
    CompulsoryAge,
    CompulsoryDate,
}

impl Criterion {
    pub(crate) fn assess(&self, ctx: &RuleContext<'_>) -> Requirement {
        let gender = ctx.input.gender;
        let flags = &ctx.input.career_flags;

        match *self {
            Criterion::TeacherRole => flag(
                "Cargo PEBPM",
                ctx.input.role == ServantRole::Pebpm,
            ),
            Criterion::Entry(window) => match window {
                EntryWindow::Until2003 => flag("Ingresso até 2003", flags.entered_until_2003),
                EntryWindow::From2004To2020 => {
                    flag("Ingresso 2004-2020", flags.entered_2004_to_2020)
                }
                EntryWindow::BeforeCutoff => {
                    flag("Ingresso até 15/09/2020", flags.entered_before_cutoff())
                }
            },
            Criterion::MinimumAge(years) => {
                at_least("Idade Mínima", years.for_gender(gender), ctx.times.age_years())
            }
            Criterion::MinimumContributionYears(years) => at_least(
                "Tempo Contrib.",
                years.for_gender(gender),
                ctx.times.contribution_years(),
            ),
            Criterion::MinimumRegencyYears(years) => at_least(
                "Tempo Regência",
                years.for_gender(gender),
                ctx.times.regency_years(),
            ),
            Criterion::MinimumScore(track) => {
                let required = track_required_score(track, gender, ctx.input.simulation_date);
                Requirement {
                    label: "Pontos".to_string(),
                    expected: required.label,
                    actual: ctx.score.whole_points.to_string(),
                    satisfied: ctx.score.whole_points >= required.points,
                }
            }
            Criterion::BaseContribution => {
                let target = required_toll_target(ctx.input.role, gender);
                let contribution = ctx.times.contribution_days;
                Requirement {
                    label: "Tempo Base".to_string(),
                    expected: format!("{target} d"),
                    actual: format!("{contribution} d"),
                    satisfied: contribution >= target,
                }
            }
            Criterion::TollContribution(mode) => {
                let owed = toll(
                    ctx.times.cutoff.contribution_days,
                    required_toll_target(ctx.input.role, gender),
                    mode,
                );
                let contribution = ctx.times.contribution_days;
                let beyond_target = (contribution - owed.target_days).max(0);
                Requirement {
                    label: format!("Pedágio ({})", mode.label()),
                    expected: format!("{} d", owed.toll_days),
                    actual: format!("{beyond_target} d"),
                    satisfied: contribution >= owed.required_days(),
                }
            }
            Criterion::TenYearsPublicService => {
                flag("10 Anos Svc Público", flags.ten_years_public_service)
            }
            Criterion::FiveYearsInPosition => {
                flag("5 Anos Cargo Efetivo", flags.five_years_in_position)
            }
            Criterion::CompulsoryAge => Requirement {
                label: "Idade Limite".to_string(),
                expected: format!("{COMPULSORY_AGE_YEARS} anos"),
                actual: ctx.times.age_years().to_string(),
                satisfied: compulsory_reached(ctx),
            },
            Criterion::CompulsoryDate => Requirement {
                label: "Data Limite".to_string(),
                expected: format_date_br(ctx.compulsory_date),
                actual: format_date_br(ctx.input.simulation_date),
                satisfied: compulsory_reached(ctx),
            },
        }
    }
}

fn compulsory_reached(ctx: &RuleContext<'_>) -> bool {
    ctx.input.simulation_date >= ctx.compulsory_date
}

fn flag(label: &str, value: bool) -> Requirement {
    Requirement {
        label: label.to_string(),
        expected: yes_no(true).to_string(),
        actual: yes_no(value).to_string(),
        satisfied: value,
    }
}

fn at_least(label: &str, minimum: i64, actual: i64) -> Requirement {
    Requirement {
        label: label.to_string(),
        expected: minimum.to_string(),
        actual: actual.to_string(),
        satisfied: actual >= minimum,
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Sim"
    } else {
        "Não"
    }
}
