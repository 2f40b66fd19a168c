use chrono::Days;

use super::common::*;
use crate::simulation::{compulsory_date, rule_catalogue, Gender, RuleFamily, ServantRole};

const TEACHER_ONLY_RULES: [&str; 5] = [
    "points_teacher",
    "toll50_teacher_integral",
    "toll50_teacher_average",
    "toll100_teacher",
    "permanent_teacher",
];

#[test]
fn catalogue_lists_every_rule_in_order() {
    let ids: Vec<&str> = rule_catalogue().iter().map(|rule| rule.rule_id).collect();

    assert_eq!(
        ids,
        [
            "points_general",
            "points_teacher",
            "toll50_general_integral",
            "toll50_general_average",
            "toll50_teacher_integral",
            "toll50_teacher_average",
            "toll100_general",
            "toll100_teacher",
            "permanent_general",
            "permanent_teacher",
            "compulsory",
        ]
    );
    let teacher_only: Vec<&str> = rule_catalogue()
        .iter()
        .filter(|rule| rule.teacher_only)
        .map(|rule| rule.rule_id)
        .collect();
    assert_eq!(teacher_only, TEACHER_ONLY_RULES);
}

#[test]
fn verdict_set_is_complete_and_eligibility_is_any_rule() {
    for input in [
        general_staff_input(),
        eligible_teacher_input(),
        heavily_deducted_input(),
        compulsory_input(),
    ] {
        let outcome = evaluate(&input);

        assert_eq!(outcome.verdicts.len(), rule_catalogue().len());
        assert_eq!(
            outcome.eligible,
            outcome.verdicts.iter().any(|verdict| verdict.satisfied)
        );
        for verdict in &outcome.verdicts {
            assert!(!verdict.requirements.is_empty(), "{}", verdict.rule_id);
            assert_eq!(
                verdict.satisfied,
                verdict.requirements.iter().all(|req| req.satisfied),
                "{}",
                verdict.rule_id
            );
        }
    }
}

#[test]
fn general_staff_short_of_every_rule() {
    let outcome = evaluate(&general_staff_input());

    assert!(!outcome.eligible);

    let permanent = outcome
        .verdicts
        .get("permanent_general")
        .expect("permanent rule present");
    assert!(!permanent.satisfied);
    let age = permanent
        .requirements
        .iter()
        .find(|req| req.label == "Idade Mínima")
        .expect("age requirement");
    assert_eq!((age.expected.as_str(), age.actual.as_str()), ("65", "56"));

    let points = outcome.verdicts.get("points_general").expect("points rule");
    let labels: Vec<&str> = points.requirements.iter().map(|req| req.label.as_str()).collect();
    assert_eq!(
        labels,
        ["Ingresso até 15/09/2020", "Idade Mínima", "Tempo Contrib.", "Pontos"]
    );
    let passed: Vec<bool> = points.requirements.iter().map(|req| req.satisfied).collect();
    assert_eq!(passed, [true, false, false, false]);
    let score = &points.requirements[3];
    assert_eq!(score.expected, "100 pts (Desde 01/10/24)");
    assert_eq!(score.actual, "87");
}

#[test]
fn general_staff_memory_and_projection() {
    let outcome = evaluate(&general_staff_input());
    let memory = outcome.memory();

    assert_eq!(memory.age, "56 anos e 27 dias");
    assert_eq!(memory.service, "31 anos e 27 dias");
    assert_eq!(memory.contribution, "31 anos e 27 dias");
    assert_eq!(memory.score_points, 87);
    assert_eq!(memory.days_to_next_point, 311);
    assert_eq!(memory.time_at_cutoff, "25 anos e 258 dias");
    assert_eq!(memory.toll, "4 anos e 236 dias");
    assert_eq!(memory.compulsory_date, "01/01/2045");
    assert_eq!(memory.verdict, outcome.verdict_summary());

    assert_eq!(
        outcome.projected_eligibility_date,
        date(2026, 1, 28) + Days::new(3_129)
    );
}

#[test]
fn teacher_meets_points_and_permanent_rules() {
    let outcome = evaluate(&eligible_teacher_input());

    assert!(outcome.eligible);
    let satisfied: Vec<&str> = outcome
        .verdicts
        .satisfied()
        .map(|verdict| verdict.rule_id.as_str())
        .collect();
    assert!(satisfied.contains(&"points_teacher"), "{satisfied:?}");
    assert!(satisfied.contains(&"permanent_teacher"), "{satisfied:?}");
    assert!(!satisfied.contains(&"compulsory"));
    assert_eq!(outcome.projected_eligibility_date, outcome.simulation_date);
}

#[test]
fn toll_rules_share_the_summary_target() {
    let mut input = eligible_teacher_input();
    input.gender = Gender::Male;

    let outcome = evaluate(&input);

    assert_eq!(outcome.toll.target_days, 30 * 365);
    assert_eq!(outcome.toll.toll_days, 0);
    for rule_id in [
        "toll50_general_integral",
        "toll50_teacher_integral",
        "toll100_general",
        "toll100_teacher",
    ] {
        let verdict = outcome.verdicts.get(rule_id).expect("rule present");
        let requirement = |label: &str| {
            verdict
                .requirements
                .iter()
                .find(|req| req.label == label)
                .unwrap_or_else(|| panic!("{rule_id} has {label}"))
        };
        assert_eq!(requirement("Tempo Base").expected, "10950 d", "{rule_id}");
        let toll_label = if rule_id.starts_with("toll100") {
            "Pedágio (100%)"
        } else {
            "Pedágio (50%)"
        };
        assert_eq!(requirement(toll_label).expected, "0 d", "{rule_id}");
    }
    assert!(outcome
        .verdicts
        .get("toll50_general_integral")
        .is_some_and(|verdict| verdict.satisfied));
    assert_eq!(outcome.projected_eligibility_date, outcome.simulation_date);
}

#[test]
fn teacher_rules_fail_closed_for_other_roles() {
    let mut input = eligible_teacher_input();
    input.role = ServantRole::Eebpm;

    let outcome = evaluate(&input);

    for rule_id in TEACHER_ONLY_RULES {
        let verdict = outcome.verdicts.get(rule_id).expect("rule present");
        assert!(!verdict.satisfied, "{rule_id}");
        assert_eq!(verdict.requirements.len(), 1);
        assert_eq!(verdict.requirements[0].label, "Cargo PEBPM");
        assert_eq!(verdict.requirements[0].actual, "Não");
    }
    assert!(outcome
        .verdicts
        .get("points_general")
        .is_some_and(|verdict| verdict.satisfied));
}

#[test]
fn minimum_age_waits_for_the_actual_birthday() {
    let outcome = evaluate(&leap_year_eve_input());

    assert_eq!(outcome.aggregated_times.age.years, 65);
    assert_eq!(outcome.aggregated_times.age_years(), 64);
    let permanent = outcome
        .verdicts
        .get("permanent_general")
        .expect("permanent rule present");
    assert!(!permanent.satisfied);
    let age = permanent
        .requirements
        .iter()
        .find(|req| req.label == "Idade Mínima")
        .expect("age requirement");
    assert_eq!((age.expected.as_str(), age.actual.as_str()), ("65", "64"));
    assert!(!age.satisfied);

    let mut birthday = leap_year_eve_input();
    birthday.simulation_date = date(2025, 1, 1);
    assert!(evaluate(&birthday)
        .verdicts
        .get("permanent_general")
        .is_some_and(|verdict| verdict.satisfied));
}

#[test]
fn negative_contribution_fails_contribution_checks() {
    let outcome = evaluate(&heavily_deducted_input());

    assert!(outcome.aggregated_times.contribution_days < 0);
    assert!(!outcome.eligible);
    assert_eq!(outcome.memory().contribution, "-5 anos e 190 dias");

    for verdict in &outcome.verdicts {
        for requirement in &verdict.requirements {
            let contribution_check = requirement.label == "Tempo Contrib."
                || requirement.label == "Tempo Base"
                || requirement.label.starts_with("Pedágio");
            if contribution_check {
                assert!(!requirement.satisfied, "{} {}", verdict.rule_id, requirement.label);
            }
        }
    }
}

#[test]
fn compulsory_rule_applies_on_75th_birthday() {
    let outcome = evaluate(&compulsory_input());

    assert_eq!(outcome.compulsory_date, date(2025, 6, 10));
    let compulsory = outcome.verdicts.get("compulsory").expect("compulsory rule");
    assert_eq!(compulsory.family, RuleFamily::Compulsory);
    assert!(compulsory.satisfied);
    assert!(outcome.eligible);

    let mut day_before = compulsory_input();
    day_before.simulation_date = date(2025, 6, 9);
    let outcome = evaluate(&day_before);
    assert!(outcome
        .verdicts
        .get("compulsory")
        .is_some_and(|verdict| !verdict.satisfied));
}

#[test]
fn compulsory_date_for_leap_day_birth_falls_on_28_february() {
    assert_eq!(compulsory_date(date(1952, 2, 29)), date(2027, 2, 28));
}
