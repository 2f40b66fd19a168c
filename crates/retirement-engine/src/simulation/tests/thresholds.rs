use super::common::*;
use crate::simulation::thresholds::score_table;
use crate::simulation::{required_score, required_toll_target, Gender, RuleTrack, ServantRole};

#[test]
fn general_score_steps_at_published_dates() {
    let cases = [
        (date(2021, 6, 1), 97),
        (date(2022, 3, 31), 97),
        (date(2022, 4, 1), 98),
        (date(2023, 7, 1), 99),
        (date(2024, 9, 30), 99),
        (date(2024, 10, 1), 100),
        (date(2040, 1, 1), 100),
    ];
    for (on, points) in cases {
        assert_eq!(
            required_score(ServantRole::Aspm, Gender::Male, on).points,
            points,
            "{on}"
        );
    }
    assert_eq!(
        required_score(ServantRole::Eebpm, Gender::Female, date(2023, 7, 1)).points,
        88
    );
}

#[test]
fn teacher_score_rises_each_year() {
    assert_eq!(
        required_score(ServantRole::Pebpm, Gender::Male, date(2025, 6, 30)).points,
        96
    );
    assert_eq!(
        required_score(ServantRole::Pebpm, Gender::Female, date(2025, 6, 30)).points,
        85
    );
    assert_eq!(
        required_score(ServantRole::Pebpm, Gender::Female, date(2035, 1, 1)).points,
        92
    );
}

#[test]
fn dates_before_first_step_use_first_step() {
    let required = required_score(ServantRole::Pebpm, Gender::Male, date(2019, 1, 1));

    assert_eq!(required.points, 92);
    assert_eq!(required.label, "92 pts (em 2021)");
}

#[test]
fn score_tables_never_decrease() {
    for track in [RuleTrack::General, RuleTrack::Teacher] {
        for gender in [Gender::Male, Gender::Female] {
            let table = score_table(track, gender);
            assert!(table
                .windows(2)
                .all(|pair| pair[0].effective < pair[1].effective && pair[0].points <= pair[1].points));
        }
    }
}

#[test]
fn toll_targets_follow_track_and_gender() {
    assert_eq!(required_toll_target(ServantRole::Agpm, Gender::Male), 35 * 365);
    assert_eq!(required_toll_target(ServantRole::Agpm, Gender::Female), 30 * 365);
    assert_eq!(required_toll_target(ServantRole::Pebpm, Gender::Male), 30 * 365);
    assert_eq!(required_toll_target(ServantRole::Pebpm, Gender::Female), 25 * 365);
}
