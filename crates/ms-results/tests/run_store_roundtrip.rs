use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{TimeZone, Utc};
use ms_core::{JobId, ParameterSet};
use ms_results::{ResultsError, RunRecord, RunStore};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

fn record(run_number: u32, sims: &std::path::Path) -> RunRecord {
    let mut parameters = ParameterSet::new();
    parameters.insert("chi_barrier_width", 0.02).unwrap();
    RunRecord::new(
        run_number,
        sims.join(format!("run_{run_number}")),
        Utc.with_ymd_and_hms(2026, 2, 25, 12, 0, 0).unwrap(),
        JobId::new(format!("{}", 1000 + run_number)).unwrap(),
        24.0,
        parameters,
    )
}

#[test]
fn save_list_load_roundtrip() {
    let sims = unique_temp_dir("ms_results_roundtrip");
    let store = RunStore::for_simulations(&sims).expect("failed to create run store");

    store.save_record(&record(2, &sims)).unwrap();
    store.save_record(&record(0, &sims)).unwrap();
    store.save_record(&record(1, &sims)).unwrap();

    let records = store.list_records().expect("failed to list records");
    let numbers: Vec<u32> = records.iter().map(|r| r.run_number).collect();
    assert_eq!(numbers, vec![0, 1, 2]);

    let loaded = store.load_record(1).expect("failed to load record");
    assert_eq!(loaded, record(1, &sims));
    assert_eq!(loaded.job_id.as_str(), "1001");
    assert_eq!(store.next_run_number().unwrap(), 3);
}

#[test]
fn store_lives_outside_case_directories() {
    let sims = unique_temp_dir("ms_results_location");
    let store = RunStore::for_simulations(&sims).unwrap();
    assert!(store.root_dir().starts_with(&sims));
    assert!(!store.root_dir().starts_with(sims.join("run_0")));
}

#[test]
fn missing_record_is_reported() {
    let sims = unique_temp_dir("ms_results_missing");
    let store = RunStore::for_simulations(&sims).unwrap();
    assert!(matches!(
        store.load_record(9),
        Err(ResultsError::RecordNotFound { run_number: 9 })
    ));
    assert_eq!(store.next_run_number().unwrap(), 0);
}

#[test]
fn unrelated_files_are_ignored() {
    let sims = unique_temp_dir("ms_results_unrelated");
    let store = RunStore::for_simulations(&sims).unwrap();
    store.save_record(&record(4, &sims)).unwrap();
    fs::write(store.root_dir().join("README"), "notes").unwrap();

    assert_eq!(store.list_records().unwrap().len(), 1);
}

#[test]
fn corrupt_record_is_surfaced_with_its_path() {
    let sims = unique_temp_dir("ms_results_corrupt");
    let store = RunStore::for_simulations(&sims).unwrap();
    store.save_record(&record(0, &sims)).unwrap();
    fs::write(store.root_dir().join("run_1.json"), "{ truncated").unwrap();

    match store.list_records() {
        Err(ResultsError::CorruptRecord { path, .. }) => assert!(path.ends_with("run_1.json")),
        other => panic!("expected CorruptRecord, got {other:?}"),
    }
    assert!(matches!(
        store.load_record(1),
        Err(ResultsError::CorruptRecord { .. })
    ));
    // the unreadable record still reserves its number
    assert_eq!(store.next_run_number().unwrap(), 2);
}

#[test]
fn record_with_bad_timeout_is_rejected_on_load() {
    let sims = unique_temp_dir("ms_results_bad_timeout");
    let store = RunStore::for_simulations(&sims).unwrap();
    let mut bad = record(3, &sims);
    bad.timeout_hours = -5.0;
    store.save_record(&bad).unwrap();

    assert!(matches!(
        store.load_record(3),
        Err(ResultsError::InvalidRecord { run_number: 3, .. })
    ));
}

#[test]
fn record_filed_under_wrong_number_is_rejected() {
    let sims = unique_temp_dir("ms_results_misfiled");
    let store = RunStore::for_simulations(&sims).unwrap();
    store.save_record(&record(4, &sims)).unwrap();
    fs::rename(
        store.root_dir().join("run_4.json"),
        store.root_dir().join("run_5.json"),
    )
    .unwrap();

    assert!(matches!(
        store.load_record(5),
        Err(ResultsError::InvalidRecord { run_number: 5, .. })
    ));
}

#[test]
fn case_directories_without_records_reserve_run_numbers() {
    let sims = unique_temp_dir("ms_results_orphan_case");
    let store = RunStore::for_simulations(&sims).unwrap();
    store.save_record(&record(0, &sims)).unwrap();

    // run_2 was created by a launch that failed before its record was saved
    fs::create_dir_all(sims.join("run_2")).unwrap();
    fs::write(sims.join("run_9"), "a file, not a case").unwrap();
    fs::create_dir_all(sims.join("ref_clean")).unwrap();

    assert_eq!(store.next_run_number().unwrap(), 3);
    assert_eq!(store.list_records().unwrap().len(), 1);
}
