use keeling::NA;

#[test]
fn test_na_predicates() {
    let value: NA<f64> = NA::Value(3.5);
    let missing: NA<f64> = NA::NA;

    assert!(value.is_value());
    assert!(!value.is_na());
    assert!(missing.is_na());
    assert_eq!(value.value(), Some(&3.5));
    assert_eq!(missing.value(), None);
}

#[test]
fn test_na_option_conversions() {
    assert_eq!(NA::from(Some(1.5)), NA::Value(1.5));
    assert_eq!(NA::<f64>::from(None), NA::NA);
    assert_eq!(Option::<f64>::from(NA::Value(1.5)), Some(1.5));
    assert_eq!(Option::<f64>::from(NA::<f64>::NA), None);
}

#[test]
fn test_na_map() {
    let doubled = NA::Value(2.0).map(|v| v * 2.0);
    assert_eq!(doubled, NA::Value(4.0));

    let still_missing: NA<f64> = NA::<f64>::NA.map(|v| v * 2.0);
    assert!(still_missing.is_na());
}

#[test]
fn test_na_display() {
    assert_eq!(format!("{}", NA::Value(316.1)), "316.1");
    assert_eq!(format!("{}", NA::<f64>::NA), "NA");
}

#[test]
fn test_na_equality() {
    assert_eq!(NA::<f64>::NA, NA::<f64>::NA);
    assert_ne!(NA::Value(1.0), NA::NA);
    assert_eq!(NA::Value(1.0), NA::Value(1.0));
}
