//! Contract tests for the dataset access layer against an on-disk cohort.

mod common;

use common::{Cohort, subject};
use pretty_assertions::assert_eq;
use rstest::rstest;
use sigma_core::{CoreError, DatasetFamily, Period};
use sigma_data::{DataError, Table, Value, read_csv};

fn assert_invalid_subject(result: Result<Table, DataError>, raw: u32) {
    match result {
        Err(DataError::Core(CoreError::InvalidSubject { subject, .. })) => {
            assert_eq!(subject, raw);
        }
        other => panic!("expected InvalidSubject for {raw}, got {other:?}"),
    }
}

#[rstest]
#[case(0)]
#[case(6)]
#[case(42)]
#[case(u32::MAX)]
fn every_accessor_rejects_subjects_outside_the_cohort(#[case] raw: u32) {
    let cohort = Cohort::new();
    let store = cohort.store();

    assert_invalid_subject(store.diary(raw, None), raw);
    assert_invalid_subject(store.diary(raw, Some(&["date"])), raw);
    assert_invalid_subject(store.barcode_table(raw, Period::Baseline, None), raw);
    assert_invalid_subject(store.barcode_table(raw, Period::Intervention, None), raw);
    assert_invalid_subject(store.table(raw, DatasetFamily::Diary, None), raw);
}

#[rstest]
#[case("")]
#[case("exp")]
#[case("experiment")]
#[case("both")]
fn unknown_period_tags_are_rejected(#[case] raw: &str) {
    assert_eq!(
        raw.parse::<Period>().unwrap_err(),
        CoreError::InvalidPeriod(raw.to_string())
    );
}

#[test]
fn unprojected_diary_matches_source_file() {
    let cohort = Cohort::new();
    let store = cohort.store();

    for n in 1..=5 {
        let path = store.paths().path(subject(n), DatasetFamily::Diary);
        let raw = read_csv(&path).unwrap();
        let table = store.diary(n, None).unwrap();

        assert_eq!(table.len(), raw.len());
        assert_eq!(table.columns(), raw.columns());
        assert_eq!(table, raw);
        assert_eq!(table.len(), n as usize + 2);
    }
}

#[test]
fn date_projection_is_the_date_column_in_order() {
    let cohort = Cohort::new();
    let store = cohort.store();

    let full = store.diary(3, None).unwrap();
    let dates = store.diary(3, Some(&["date"])).unwrap();

    assert_eq!(dates.columns(), &["date"]);
    let expected: Vec<Vec<Value>> = full
        .column("date")
        .unwrap()
        .into_iter()
        .map(|value| vec![value.clone()])
        .collect();
    assert_eq!(dates.rows(), expected.as_slice());
}

#[test]
fn projection_follows_file_order_and_tolerates_unknown_columns() {
    let cohort = Cohort::new();
    let store = cohort.store();

    let table = store
        .diary(2, Some(&["spo2_m1_r", "no such column", "masktype"]))
        .unwrap();
    assert_eq!(table.columns(), &["masktype", "spo2_m1_r"]);
    assert_eq!(table.len(), 4);
}

#[test]
fn species_projection_returns_rows_in_source_order() {
    let cohort = Cohort::new();
    let store = cohort.store();

    let table = store
        .barcode_table(1, Period::Baseline, Some(&["species"]))
        .unwrap();

    assert_eq!(table.columns(), &["species"]);
    assert_eq!(
        table.texts("species").unwrap(),
        vec![
            "Cutibacterium acnes",
            "Cutibacterium acnes",
            "Staphylococcus capitis",
            "Cutibacterium acnes",
            "Staphylococcus capitis",
        ]
    );

    let acnes = table
        .texts("species")
        .unwrap()
        .iter()
        .filter(|species| species.as_str() == "Cutibacterium acnes")
        .count();
    #[allow(clippy::cast_precision_loss)]
    let proportion = acnes as f64 / table.len() as f64;
    assert!((proportion - 0.6).abs() < 1e-12);
}

#[test]
fn periods_read_distinct_files() {
    let cohort = Cohort::new();
    let store = cohort.store();

    let baseline = store.barcode_table(2, Period::Baseline, None).unwrap();
    let intervention = store.barcode_table(2, Period::Intervention, None).unwrap();
    assert_ne!(baseline, intervention);
    assert_eq!(intervention.len(), 3);
}

#[rstest]
#[case(Period::Baseline)]
#[case(Period::Intervention)]
fn cohort_union_is_ordered_concatenation(#[case] period: Period) {
    let cohort = Cohort::new();
    let store = cohort.store();

    let all = store.all_subjects(period).unwrap();
    let per_subject: Vec<Table> = (1..=5)
        .map(|n| store.barcode_table(n, period, None).unwrap())
        .collect();

    let total: usize = per_subject.iter().map(Table::len).sum();
    assert_eq!(all.len(), total);

    let mut offset = 0;
    for table in &per_subject {
        assert_eq!(&all.slice(offset..offset + table.len()), table);
        offset += table.len();
    }

    let barcodes = all.texts("barcode").unwrap();
    assert_eq!(barcodes.first().map(String::as_str), Some("barcode01"));
    assert_eq!(barcodes.last().map(String::as_str), Some("barcode05"));
}

#[test]
fn repeated_calls_return_equal_tables() {
    let cohort = Cohort::new();
    let store = cohort.store();

    assert_eq!(store.diary(4, None).unwrap(), store.diary(4, None).unwrap());
    assert_eq!(
        store.barcode_table(5, Period::Intervention, Some(&["species"])).unwrap(),
        store.barcode_table(5, Period::Intervention, Some(&["species"])).unwrap()
    );
    assert_eq!(
        store.all_subjects(Period::Baseline).unwrap(),
        store.all_subjects(Period::Baseline).unwrap()
    );
}

#[test]
fn missing_file_is_fatal() {
    let cohort = Cohort::new();
    cohort.remove(subject(3), DatasetFamily::Baseline);
    let store = cohort.store();

    assert!(matches!(
        store.barcode_table(3, Period::Baseline, None),
        Err(DataError::MissingFile { .. })
    ));
    assert!(matches!(
        store.all_subjects(Period::Baseline),
        Err(DataError::MissingFile { .. })
    ));
    assert!(store.all_subjects(Period::Intervention).is_ok());
}

#[test]
fn strict_union_rejects_mismatched_subject_schema() {
    let cohort = Cohort::new();
    cohort.write(
        subject(4),
        DatasetFamily::Intervention,
        "barcode,species\nbarcode04,Staphylococcus capitis\n",
    );

    match cohort.store().all_subjects(Period::Intervention) {
        Err(DataError::SchemaMismatch { block, found, .. }) => {
            assert_eq!(block, 4);
            assert_eq!(found, vec!["barcode", "species"]);
        }
        other => panic!("expected schema mismatch, got {other:?}"),
    }
}

#[test]
fn permissive_union_aligns_mismatched_subject_schema() {
    let cohort = Cohort::new();
    cohort.write(
        subject(4),
        DatasetFamily::Intervention,
        "barcode,species\nbarcode04,Staphylococcus capitis\n",
    );

    let all = cohort
        .permissive_store()
        .all_subjects(Period::Intervention)
        .unwrap();
    assert_eq!(all.len(), 13);
    assert_eq!(all.columns(), &["read_id", "barcode", "species"]);

    let subject_four = all.filter_rows(|row| {
        row.get("barcode").and_then(Value::as_str) == Some("barcode04")
    });
    assert_eq!(subject_four.len(), 1);
    assert_eq!(subject_four.rows()[0][0], Value::Null);
}

#[test]
fn malformed_csv_is_reported() {
    let cohort = Cohort::new();
    cohort.write(subject(1), DatasetFamily::Diary, "date,acne\n2021-05-01\n");

    assert!(matches!(
        cohort.store().diary(1, None),
        Err(DataError::Csv { .. })
    ));
}
