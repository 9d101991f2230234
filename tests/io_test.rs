use std::io::Write;

use chrono::{NaiveDate, Weekday};
use keeling::error::Error;
use keeling::io::read_raw_rows;
use keeling::temporal::{Frequency, TimeSeries};

fn write_csv(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_read_raw_rows() {
    let file = write_csv(
        "date,co2\n\
         1958-03-29,316.1\n\
         1958-04-05,NaN\n\
         1958-04-12,\n\
         1958-04-19,317.5\n",
    );

    let rows = read_raw_rows(file.path(), true).unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], ("1958-03-29".to_string(), Some(316.1)));
    assert_eq!(rows[1], ("1958-04-05".to_string(), None));
    assert_eq!(rows[2], ("1958-04-12".to_string(), None));
    assert_eq!(rows[3], ("1958-04-19".to_string(), Some(317.5)));
}

#[test]
fn test_read_without_header() {
    let file = write_csv("1958-03-29,316.1\n1958-04-05,317.3\n");
    let rows = read_raw_rows(file.path(), false).unwrap();
    assert_eq!(rows.len(), 2);
}

#[test]
fn test_bad_number_is_an_error() {
    let file = write_csv("date,co2\n1958-03-29,high\n");
    match read_raw_rows(file.path(), true) {
        Err(Error::InvalidValue(_)) => {}
        other => panic!("Expected an invalid value error, got {:?}", other),
    }
}

#[test]
fn test_missing_value_column_is_an_error() {
    let file = write_csv("date,co2\n1958-03-29\n");
    match read_raw_rows(file.path(), true) {
        Err(Error::InvalidValue(_)) => {}
        other => panic!("Expected an invalid value error, got {:?}", other),
    }
}

#[test]
fn test_load_then_build_pipeline() {
    let file = write_csv(
        "date,co2\n\
         1958-03-29,316.1\n\
         1958-04-05,317.3\n\
         1958-04-19,317.5\n",
    );

    let rows = read_raw_rows(file.path(), true).unwrap();
    let ts = TimeSeries::<NaiveDate>::from_raw_rows(
        rows,
        Frequency::Weekly(Weekday::Sat),
        Some("co2".to_string()),
    )
    .unwrap();

    // 1958-04-12 is materialized as a grid hole
    assert_eq!(ts.len(), 4);
    assert_eq!(ts.na_count(), 1);
}

#[test]
fn test_bundled_dataset_loads() {
    let rows = read_raw_rows(concat!(env!("CARGO_MANIFEST_DIR"), "/data/co2_weekly.csv"), true)
        .unwrap();
    assert!(!rows.is_empty());
    assert_eq!(rows[0].0, "1958-03-29");

    let ts = TimeSeries::<NaiveDate>::from_raw_rows(
        rows,
        Frequency::Weekly(Weekday::Sat),
        Some("co2".to_string()),
    )
    .unwrap();
    assert!(ts.na_count() > 0);

    let monthly = ts.resample(Frequency::MonthStart).mean().unwrap();
    assert_eq!(monthly.timestamps()[0], NaiveDate::from_ymd_opt(1958, 3, 1).unwrap());
}
