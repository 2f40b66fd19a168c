//! Batch evaluation and CSV summary export.

use chrono::NaiveDate;

use retirement_engine::simulation::{
    read_requests, write_summary_csv, BatchError, Gender, RetirementEngine, ServantRole,
    SimulationRequest,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn servant(role: ServantRole, birth: NaiveDate, simulation: NaiveDate) -> SimulationRequest {
    SimulationRequest {
        role: Some(role),
        gender: Some(Gender::Male),
        simulation_date: Some(simulation),
        birth_date: Some(birth),
        admission_date: Some(date(1990, 5, 2)),
        ..SimulationRequest::default()
    }
}

fn batch() -> Vec<SimulationRequest> {
    let mut missing_gender = servant(ServantRole::Aapm, date(1968, 4, 2), date(2025, 1, 15));
    missing_gender.gender = None;

    vec![
        servant(ServantRole::Agpm, date(1949, 7, 1), date(2024, 7, 1)),
        missing_gender,
        servant(ServantRole::Aspm, date(1975, 9, 9), date(2025, 1, 15)),
    ]
}

#[test]
fn batch_preserves_order_and_isolates_failures() {
    let entries = RetirementEngine::default().evaluate_batch(batch());

    let indexes: Vec<usize> = entries.iter().map(|entry| entry.index).collect();
    assert_eq!(indexes, [0, 1, 2]);

    assert!(entries[0].outcome.as_ref().is_some_and(|outcome| outcome.eligible));
    assert!(entries[1].outcome.is_none());
    assert_eq!(
        entries[1].error.as_deref(),
        Some("required field 'gender' is missing")
    );
    assert!(entries[2].outcome.as_ref().is_some_and(|outcome| !outcome.eligible));
}

#[test]
fn summary_csv_has_one_row_per_entry() {
    let entries = RetirementEngine::default().evaluate_batch(batch());

    let mut buffer = Vec::new();
    write_summary_csv(&entries, &mut buffer).expect("csv written");

    let mut reader = csv::Reader::from_reader(buffer.as_slice());
    let headers = reader.headers().expect("header row").clone();
    assert_eq!(&headers[0], "index");
    assert_eq!(&headers[8], "satisfied_rules");

    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("rows parse");
    assert_eq!(rows.len(), 3);

    assert_eq!(&rows[0][1], "AGPM");
    assert_eq!(&rows[0][7], "true");
    assert_eq!(&rows[0][8], "compulsory");

    assert_eq!(&rows[1][1], "");
    assert_eq!(&rows[1][10], "required field 'gender' is missing");

    assert_eq!(&rows[2][7], "false");
}

#[test]
fn requests_load_from_json_array() {
    let payload = serde_json::to_vec(&batch()).expect("serialize batch");

    let requests = read_requests(payload.as_slice()).expect("json array");

    assert_eq!(requests, batch());
}

#[test]
fn non_array_input_is_rejected() {
    let error = read_requests(&b"{\"role\":\"PEBPM\"}"[..]).expect_err("object payload");

    assert!(matches!(error, BatchError::Json(_)));
}
