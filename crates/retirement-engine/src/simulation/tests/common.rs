use std::sync::Arc;

use axum::response::Response;
use axum::Router;
use chrono::NaiveDate;
use serde_json::Value;

use crate::simulation::{
    simulation_router, CareerFlags, Deduction, DeductionKind, Gender, RetirementEngine,
    ServantRole, SimulationConfig, SimulationInput, SimulationOutcome,
};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn engine() -> RetirementEngine {
    RetirementEngine::new(SimulationConfig::default())
}

pub(super) fn evaluate(input: &SimulationInput) -> SimulationOutcome {
    engine().evaluate(input).expect("input is valid")
}

fn bare_input(
    role: ServantRole,
    gender: Gender,
    birth_date: NaiveDate,
    admission_date: NaiveDate,
    simulation_date: NaiveDate,
) -> SimulationInput {
    SimulationInput {
        role,
        gender,
        simulation_date,
        birth_date,
        admission_date,
        credited_periods: Vec::new(),
        deductions: Vec::new(),
        bonus_leave_credits: Vec::new(),
        career_flags: CareerFlags::default(),
        regency_years: 0,
    }
}

/// Male administrative assistant who entered before 2003 and is still short
/// of every rule on 2026-01-28.
pub(super) fn general_staff_input() -> SimulationInput {
    let mut input = bare_input(
        ServantRole::Aspm,
        Gender::Male,
        date(1970, 1, 1),
        date(1995, 1, 1),
        date(2026, 1, 28),
    );
    input.career_flags.entered_until_2003 = true;
    input
}

/// Female classroom teacher who meets the teacher points rule in 2025.
pub(super) fn eligible_teacher_input() -> SimulationInput {
    let mut input = bare_input(
        ServantRole::Pebpm,
        Gender::Female,
        date(1960, 3, 10),
        date(1990, 2, 1),
        date(2025, 6, 30),
    );
    input.career_flags = CareerFlags {
        entered_until_2003: true,
        entered_2004_to_2020: false,
        ten_years_public_service: true,
        five_years_in_position: true,
    };
    input.regency_years = 26;
    input
}

/// Recently admitted servant whose absences outweigh the service counted.
pub(super) fn heavily_deducted_input() -> SimulationInput {
    let mut input = bare_input(
        ServantRole::Aapm,
        Gender::Male,
        date(1980, 5, 5),
        date(2020, 1, 1),
        date(2021, 1, 1),
    );
    input.career_flags.entered_2004_to_2020 = true;
    input.deductions.push(Deduction {
        days: 2000,
        before_cutoff: false,
        kind: DeductionKind::Absence,
        span: None,
    });
    input
}

/// Servant turning 65 on 2025-01-01, simulated the day before; 2024 is a
/// leap year, so the residual after the 64th birthday is a full 365 days.
pub(super) fn leap_year_eve_input() -> SimulationInput {
    let mut input = bare_input(
        ServantRole::Aspm,
        Gender::Male,
        date(1960, 1, 1),
        date(1985, 1, 1),
        date(2024, 12, 31),
    );
    input.career_flags.ten_years_public_service = true;
    input.career_flags.five_years_in_position = true;
    input
}

/// Simulation dated exactly on the 75th birthday.
pub(super) fn compulsory_input() -> SimulationInput {
    bare_input(
        ServantRole::Agpm,
        Gender::Male,
        date(1950, 6, 10),
        date(1980, 3, 1),
        date(2025, 6, 10),
    )
}

pub(super) fn router() -> Router {
    simulation_router(Arc::new(engine()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
