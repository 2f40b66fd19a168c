//! Batch evaluation of many simulations.
//!
//! Each request is evaluated independently on the [`rayon`] thread pool; a
//! rejected request yields an entry carrying its error instead of aborting
//! the batch.

use std::io::{Read, Write};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use super::intake::SimulationRequest;
use super::outcome::SimulationOutcome;
use super::RetirementEngine;

/// Result for the request found at `index` in the submitted batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<SimulationOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("failed to read batch input: {0}")]
    Io(#[from] std::io::Error),
    #[error("batch input is not a JSON array of simulations: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write batch summary: {0}")]
    Csv(#[from] csv::Error),
}

impl RetirementEngine {
    pub fn evaluate_batch(&self, requests: Vec<SimulationRequest>) -> Vec<BatchEntry> {
        let total = requests.len();
        let entries: Vec<BatchEntry> = requests
            .into_par_iter()
            .enumerate()
            .map(|(index, request)| match self.evaluate_request(request) {
                Ok(outcome) => BatchEntry {
                    index,
                    outcome: Some(outcome),
                    error: None,
                },
                Err(err) => {
                    warn!(index, field = err.field(), "simulation rejected: {err}");
                    BatchEntry {
                        index,
                        outcome: None,
                        error: Some(err.to_string()),
                    }
                }
            })
            .collect();

        let eligible = entries
            .iter()
            .filter(|entry| entry.outcome.as_ref().is_some_and(|outcome| outcome.eligible))
            .count();
        info!(total, eligible, "batch evaluated");

        entries
    }
}

pub fn read_requests<R: Read>(reader: R) -> Result<Vec<SimulationRequest>, BatchError> {
    Ok(serde_json::from_reader(reader)?)
}

#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    index: usize,
    role: &'a str,
    gender: &'a str,
    age_days: Option<i64>,
    contribution_days: Option<i64>,
    points: Option<i64>,
    toll_days: Option<i64>,
    eligible: bool,
    satisfied_rules: String,
    projected_eligibility_date: String,
    error: &'a str,
}

/// Writes one CSV row per batch entry, in batch order.
pub fn write_summary_csv<W: Write>(entries: &[BatchEntry], writer: W) -> Result<(), BatchError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for entry in entries {
        let row = match &entry.outcome {
            Some(outcome) => SummaryRow {
                index: entry.index,
                role: outcome.role.code(),
                gender: outcome.gender.label(),
                age_days: Some(outcome.aggregated_times.age.total_days),
                contribution_days: Some(outcome.aggregated_times.contribution_days),
                points: Some(outcome.score.whole_points),
                toll_days: Some(outcome.toll.toll_days),
                eligible: outcome.eligible,
                satisfied_rules: outcome
                    .verdicts
                    .satisfied()
                    .map(|verdict| verdict.rule_id.as_str())
                    .collect::<Vec<_>>()
                    .join(";"),
                projected_eligibility_date: super::period::format_date_br(
                    outcome.projected_eligibility_date,
                ),
                error: "",
            },
            None => SummaryRow {
                index: entry.index,
                role: "",
                gender: "",
                age_days: None,
                contribution_days: None,
                points: None,
                toll_days: None,
                eligible: false,
                satisfied_rules: String::new(),
                projected_eligibility_date: String::new(),
                error: entry.error.as_deref().unwrap_or_default(),
            },
        };
        csv_writer.serialize(row)?;
    }

    csv_writer.flush()?;
    Ok(())
}
