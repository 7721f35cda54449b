use payfield_core::{FieldKind, FormatVariant, validate};

#[test]
fn serializes_valid_outcome_deterministically() {
    let outcome = validate(FieldKind::Bin, FormatVariant::Legacy, "123456");

    let json = serde_json::to_string_pretty(&outcome).expect("serialize outcome");
    let expected = r#"{
  "value": "123456",
  "is_valid": true
}"#;
    assert_eq!(json, expected);
}

#[test]
fn serializes_invalid_outcome_with_violations() {
    let outcome = validate(FieldKind::Bin, FormatVariant::Legacy, "12345A");

    let json = serde_json::to_string_pretty(&outcome).expect("serialize outcome");
    let expected = r#"{
  "value": "12345A",
  "is_valid": false,
  "violations": [
    {
      "code": "format_invalid",
      "message": "Bin Number must contain only digits"
    }
  ]
}"#;
    assert_eq!(json, expected);
}

#[test]
fn outcome_round_trips_through_json() {
    let outcome = validate(FieldKind::ProviderId, FormatVariant::New, "GLOBAL-PROVIDER-001");
    let json = serde_json::to_string(&outcome).expect("serialize outcome");
    let back: payfield_core::ValidationOutcome =
        serde_json::from_str(&json).expect("deserialize outcome");
    assert_eq!(back, outcome);
}
