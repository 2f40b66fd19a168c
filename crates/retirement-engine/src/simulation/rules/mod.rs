mod catalogue;
mod criteria;

pub use catalogue::{rule_catalogue, RuleFamily, RuleSummary};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::aggregate::AggregatedTimes;
use super::domain::SimulationInput;
use super::score::ScoreResult;
use catalogue::CATALOGUE;
use criteria::Criterion;

/// One itemized check inside a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub label: String,
    pub expected: String,
    pub actual: String,
    pub satisfied: bool,
}

/// Outcome of one catalogue rule for one simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleVerdict {
    pub rule_id: String,
    pub name: String,
    pub description: String,
    pub family: RuleFamily,
    pub satisfied: bool,
    pub requirements: Vec<Requirement>,
}

impl RuleVerdict {
    pub fn unmet_requirements(&self) -> impl Iterator<Item = &Requirement> {
        self.requirements.iter().filter(|req| !req.satisfied)
    }
}

/// Ordered verdicts for every catalogue rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleVerdictSet(Vec<RuleVerdict>);

impl RuleVerdictSet {
    pub fn any_satisfied(&self) -> bool {
        self.0.iter().any(|verdict| verdict.satisfied)
    }

    pub fn satisfied(&self) -> impl Iterator<Item = &RuleVerdict> {
        self.0.iter().filter(|verdict| verdict.satisfied)
    }

    pub fn get(&self, rule_id: &str) -> Option<&RuleVerdict> {
        self.0.iter().find(|verdict| verdict.rule_id == rule_id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RuleVerdict> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleVerdictSet {
    type Item = &'a RuleVerdict;
    type IntoIter = std::slice::Iter<'a, RuleVerdict>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Everything a criterion may look at.
pub(crate) struct RuleContext<'a> {
    pub input: &'a SimulationInput,
    pub times: &'a AggregatedTimes,
    pub score: &'a ScoreResult,
    pub compulsory_date: NaiveDate,
}

pub(crate) fn evaluate_rules(ctx: &RuleContext<'_>) -> RuleVerdictSet {
    let verdicts = CATALOGUE
        .iter()
        .map(|rule| {
            let requirements: Vec<Requirement> = if rule.teacher_only && !ctx.input.role.is_teacher()
            {
                vec![Criterion::TeacherRole.assess(ctx)]
            } else {
                rule.criteria.iter().map(|criterion| criterion.assess(ctx)).collect()
            };
            let satisfied = requirements.iter().all(|req| req.satisfied);

            RuleVerdict {
                rule_id: rule.id.to_string(),
                name: rule.name.to_string(),
                description: rule.description.to_string(),
                family: rule.family,
                satisfied,
                requirements,
            }
        })
        .collect();

    RuleVerdictSet(verdicts)
}
