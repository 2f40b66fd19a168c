//! End-to-end eligibility scenarios driven through the public engine facade.
//!
//! Each scenario builds a request the way an intake client would and checks
//! the aggregated times, the itemized verdicts and the final eligibility.

mod common {
    use chrono::NaiveDate;

    use retirement_engine::simulation::{
        BonusLeaveCredit, CareerFlags, CreditRegime, CreditedDuration, CreditedPeriod, Gender,
        ServantRole, SimulationRequest,
    };

    pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    pub(super) fn request(
        role: ServantRole,
        gender: Gender,
        birth: NaiveDate,
        admission: NaiveDate,
        simulation: NaiveDate,
    ) -> SimulationRequest {
        SimulationRequest {
            role: Some(role),
            gender: Some(gender),
            simulation_date: Some(simulation),
            birth_date: Some(birth),
            admission_date: Some(admission),
            ..SimulationRequest::default()
        }
    }

    /// Male analyst admitted in 2008 with earlier private-sector time.
    pub(super) fn transition_analyst() -> SimulationRequest {
        let mut request = request(
            ServantRole::Agpm,
            Gender::Male,
            date(1962, 8, 20),
            date(2008, 3, 3),
            date(2027, 3, 3),
        );
        request.career_flags = CareerFlags {
            entered_until_2003: false,
            entered_2004_to_2020: true,
            ten_years_public_service: true,
            five_years_in_position: true,
        };
        request.credited_periods = vec![CreditedPeriod {
            duration: CreditedDuration::Explicit { years: 17, days: 0 },
            before_cutoff: true,
            counts_toward_regency: false,
            regime: Some(CreditRegime::Rgps),
            origin: "Iniciativa privada".to_string(),
            function: "Contador".to_string(),
        }];
        request.bonus_leave_credits = vec![BonusLeaveCredit {
            days: 365,
            before_cutoff: true,
        }];
        request
    }
}

use common::*;
use retirement_engine::simulation::{
    DayCountPolicy, Gender, InputError, RetirementEngine, ServantRole, SimulationConfig,
};

#[test]
fn general_staff_scenario_is_itemized_but_ineligible() {
    let mut request = request(
        ServantRole::Aspm,
        Gender::Male,
        date(1970, 1, 1),
        date(1995, 1, 1),
        date(2026, 1, 28),
    );
    request.career_flags.entered_until_2003 = true;

    let outcome = RetirementEngine::default()
        .evaluate_request(request)
        .expect("valid request");

    assert_eq!(outcome.aggregated_times.age.years, 56);
    assert_eq!(outcome.aggregated_times.service.years, 31);
    assert!(!outcome.eligible);
    assert_eq!(outcome.verdicts.len(), 11);

    let points = outcome.verdicts.get("points_general").expect("points rule");
    assert_eq!(points.requirements.len(), 4);
    assert!(points.unmet_requirements().any(|req| req.label == "Idade Mínima"));
    assert!(outcome
        .verdicts
        .get("permanent_general")
        .is_some_and(|verdict| !verdict.satisfied));
}

#[test]
fn transition_analyst_reaches_toll_rule_with_credited_time() {
    let outcome = RetirementEngine::default()
        .evaluate_request(transition_analyst())
        .expect("valid request");
    let times = &outcome.aggregated_times;

    assert_eq!(times.service.total_days, 19 * 365);
    assert_eq!(times.credited_days, 17 * 365);
    assert_eq!(times.bonus_days, 730);
    assert_eq!(times.contribution_days, 36 * 365 + 730);

    // 12 years 196 days at the cutoff, plus the credited and bonus days
    assert_eq!(times.cutoff.contribution_days, 12 * 365 + 196 + 17 * 365 + 730);
    assert_eq!(outcome.toll.deficit_days, 12_775 - times.cutoff.contribution_days);

    let toll_rule = outcome
        .verdicts
        .get("toll50_general_average")
        .expect("toll rule");
    assert!(toll_rule.satisfied, "{:?}", toll_rule.requirements);
    assert!(outcome
        .verdicts
        .get("toll50_general_integral")
        .is_some_and(|verdict| !verdict.satisfied));
    assert!(outcome.eligible);
}

#[test]
fn day_count_policy_changes_only_the_measured_spans() {
    let anniversary = RetirementEngine::new(SimulationConfig {
        day_count_policy: DayCountPolicy::Anniversary,
    })
    .evaluate_request(transition_analyst())
    .expect("valid request");
    let calendar = RetirementEngine::new(SimulationConfig {
        day_count_policy: DayCountPolicy::CalendarExclusive,
    })
    .evaluate_request(transition_analyst())
    .expect("valid request");

    assert_eq!(calendar.day_count_policy, DayCountPolicy::CalendarExclusive);
    assert_eq!(
        anniversary.aggregated_times.credited_days,
        calendar.aggregated_times.credited_days
    );
    assert!(calendar.aggregated_times.service.total_days > anniversary.aggregated_times.service.total_days);
}

#[test]
fn rejected_requests_never_reach_the_rules() {
    let mut request = transition_analyst();
    request.admission_date = Some(date(1960, 1, 1));

    let error = RetirementEngine::default()
        .evaluate_request(request)
        .expect_err("birth after admission");

    assert!(matches!(
        error,
        InputError::InvalidRange {
            field: "birth_date",
            ..
        }
    ));
}

#[test]
fn compulsory_rule_on_exact_birthday() {
    let request = request(
        ServantRole::Eebpm,
        Gender::Female,
        date(1951, 11, 30),
        date(1985, 2, 1),
        date(2026, 11, 30),
    );

    let outcome = RetirementEngine::default()
        .evaluate_request(request)
        .expect("valid request");

    assert_eq!(outcome.compulsory_date, date(2026, 11, 30));
    assert!(outcome
        .verdicts
        .get("compulsory")
        .is_some_and(|verdict| verdict.satisfied));
    assert!(outcome.eligible);
}
