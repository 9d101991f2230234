use chrono::NaiveDate;
use keeling::error::Error;
use keeling::temporal::{date_range, Frequency, PartialDate, TimeSeries};
use keeling::NA;

fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn pd(s: &str) -> PartialDate {
    s.parse().unwrap()
}

/// Monthly series covering 1989-01-01 through 1992-12-01
fn monthly_series() -> TimeSeries<NaiveDate> {
    let grid = date_range(d("1989-01-01"), d("1992-12-01"), Frequency::MonthStart).unwrap();
    let values = (0..grid.len()).map(|i| NA::Value(i as f64)).collect();
    TimeSeries::new(values, grid, Some("co2".to_string()))
        .unwrap()
        .with_frequency(Frequency::MonthStart)
}

#[test]
fn test_partial_date_parsing() {
    assert_eq!(pd("1990"), PartialDate::Year(1990));
    assert_eq!(pd("1990-06"), PartialDate::YearMonth(1990, 6));
    assert_eq!(pd("1990-06-15"), PartialDate::Date(d("1990-06-15")));

    match "1990-13".parse::<PartialDate>() {
        Err(Error::Parse(_)) => {}
        other => panic!("Expected a parse error, got {:?}", other),
    }
    match "soon".parse::<PartialDate>() {
        Err(Error::Parse(_)) => {}
        other => panic!("Expected a parse error, got {:?}", other),
    }
}

#[test]
fn test_year_through_exact_date_is_inclusive() {
    // start="1990", end="1991-01-01" on a monthly series: 13 points,
    // 1990-01-01 through 1991-01-01 inclusive
    let ts = monthly_series();
    let selected = ts
        .select_range(Some(pd("1990")), Some(pd("1991-01-01")))
        .unwrap();

    assert_eq!(selected.len(), 13);
    assert_eq!(selected.timestamps()[0], d("1990-01-01"));
    assert_eq!(selected.timestamps()[12], d("1991-01-01"));
    assert_eq!(selected.frequency(), Some(&Frequency::MonthStart));
    assert_eq!(selected.name(), Some(&"co2".to_string()));
}

#[test]
fn test_year_month_bounds() {
    let ts = monthly_series();
    let selected = ts
        .select_range(Some(pd("1990-03")), Some(pd("1990-07")))
        .unwrap();
    assert_eq!(selected.len(), 5);
    assert_eq!(selected.timestamps()[0], d("1990-03-01"));
    assert_eq!(selected.timestamps()[4], d("1990-07-01"));
}

#[test]
fn test_omitted_bounds_default_to_extremes() {
    let ts = monthly_series();

    let from_1992 = ts.select_range(Some(pd("1992")), None).unwrap();
    assert_eq!(from_1992.len(), 12);
    assert_eq!(from_1992.timestamps()[0], d("1992-01-01"));

    let until_1989 = ts.select_range(None, Some(pd("1989"))).unwrap();
    assert_eq!(until_1989.len(), 12);
    assert_eq!(
        until_1989.timestamps()[11],
        d("1989-12-01")
    );

    let all = ts.select_range(None, None).unwrap();
    assert_eq!(all.len(), ts.len());
}

#[test]
fn test_selection_outside_index_is_empty() {
    let ts = monthly_series();
    let selected = ts
        .select_range(Some(pd("2005")), Some(pd("2006")))
        .unwrap();
    assert!(selected.is_empty());
    assert_eq!(selected.frequency(), Some(&Frequency::MonthStart));
}

#[test]
fn test_reversed_bounds_fail() {
    let ts = monthly_series();
    let result = ts.select_range(Some(pd("1991")), Some(pd("1990")));
    match result {
        Err(Error::RangeOrder { .. }) => {}
        other => panic!("Expected a range order error, got {:?}", other),
    }
}

#[test]
fn test_selection_preserves_values_and_order() {
    let ts = monthly_series();
    let selected = ts.select_range(Some(pd("1989-02")), Some(pd("1989-04"))).unwrap();
    // Positions 1, 2, 3 of the full series
    assert_eq!(selected.values(), &[NA::Value(1.0), NA::Value(2.0), NA::Value(3.0)]);
}
