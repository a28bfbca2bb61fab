use super::*;

#[test]
fn parses_decimal_strings() {
    assert_eq!(Price::parse("42.17").unwrap().cents(), 4217);
    assert_eq!(Price::parse("42.5").unwrap().cents(), 4250);
    assert_eq!(Price::parse("7").unwrap().cents(), 700);
    assert_eq!(Price::parse(".99").unwrap().cents(), 99);
    assert_eq!(Price::parse(" 0.00 ").unwrap().cents(), 0);
}

#[test]
fn rejects_malformed_prices() {
    for bad in ["", ".", "1.234", "-1", "abc", "1.x"] {
        assert!(Price::parse(bad).is_err(), "accepted {:?}", bad);
    }
}

#[test]
fn displays_with_two_decimals() {
    assert_eq!(Price::from_cents(5).to_string(), "0.05");
    assert_eq!(Price::from_cents(12345).to_string(), "123.45");
}

#[test]
fn wire_format_is_a_string_but_numbers_are_accepted() {
    assert_eq!(
        serde_json::to_value(Price::from_cents(1999)).unwrap(),
        serde_json::json!("19.99")
    );
    let p: Price = serde_json::from_value(serde_json::json!(19.99)).unwrap();
    assert_eq!(p.cents(), 1999);
    let p: Price = serde_json::from_value(serde_json::json!("19.99")).unwrap();
    assert_eq!(p.cents(), 1999);
    assert!(serde_json::from_value::<Price>(serde_json::json!(-1.0)).is_err());
}

#[test]
fn signs_inside_either_part_are_rejected() {
    for bad in ["+3", "1.+5", "+1.00", "1.-5", " +.5", "1 .5", "1_000"] {
        assert!(Price::parse(bad).is_err(), "accepted {:?}", bad);
    }
}

#[test]
fn oversized_amounts_are_rejected_not_clamped() {
    assert!(Price::parse("184467440737095516.16").is_err());
    assert!(Price::parse("99999999999999999999999").is_err());
    assert!(serde_json::from_value::<Price>(serde_json::json!(1e300)).is_err());
    assert!(serde_json::from_value::<Price>(serde_json::json!(1.9e17)).is_err());

    let p: Price = serde_json::from_value(serde_json::json!(1e15)).unwrap();
    assert_eq!(p.cents(), 100_000_000_000_000_000);
}
