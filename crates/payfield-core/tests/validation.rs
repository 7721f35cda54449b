use payfield_core::{
    FieldKind, FormatVariant, ViolationCode, all_field_schemas, validate, verify_registry,
};

fn sample_char(schema: &payfield_core::FieldSchema) -> char {
    match schema.char_class {
        payfield_core::CharClass::Digits => '7',
        _ => 'A',
    }
}

#[test]
fn registry_is_internally_consistent() {
    verify_registry().expect("registry invariants hold");
    assert_eq!(all_field_schemas().count(), 6);
}

#[test]
fn max_length_value_is_valid_for_every_schema() {
    for schema in all_field_schemas() {
        let value: String = std::iter::repeat(sample_char(schema))
            .take(schema.max_length)
            .collect();
        let outcome = validate(schema.kind, schema.variant, &value);
        assert!(
            outcome.is_valid,
            "{:?}/{:?} rejected a max-length value: {:?}",
            schema.kind, schema.variant, outcome.violations
        );
    }
}

#[test]
fn over_length_value_is_invalid_for_every_schema() {
    for schema in all_field_schemas() {
        let value: String = std::iter::repeat(sample_char(schema))
            .take(schema.max_length + 1)
            .collect();
        let outcome = validate(schema.kind, schema.variant, &value);
        assert!(!outcome.is_valid);
        let expected_code = if schema.is_fixed_width() {
            ViolationCode::LengthInvalid
        } else {
            ViolationCode::LengthExceeded
        };
        assert!(
            outcome.violations.iter().any(|v| v.code == expected_code),
            "{:?}/{:?} missing length violation: {:?}",
            schema.kind, schema.variant, outcome.violations
        );
    }
}

#[test]
fn legacy_bin_accepts_six_digits() {
    let outcome = validate(FieldKind::Bin, FormatVariant::Legacy, "123456");
    assert!(outcome.is_valid);
    assert!(outcome.violations.is_empty());
}

#[test]
fn legacy_bin_rejects_short_value() {
    let outcome = validate(FieldKind::Bin, FormatVariant::Legacy, "12345");
    assert!(!outcome.is_valid);
    assert_eq!(outcome.violations.len(), 1);
    assert_eq!(outcome.violations[0].code, ViolationCode::LengthInvalid);
}

#[test]
fn legacy_bin_rejects_non_digit() {
    let outcome = validate(FieldKind::Bin, FormatVariant::Legacy, "12345A");
    assert!(!outcome.is_valid);
    assert_eq!(outcome.violations.len(), 1);
    assert_eq!(outcome.violations[0].code, ViolationCode::FormatInvalid);
}

#[test]
fn new_bin_accepts_zero_prefixed_value() {
    let outcome = validate(FieldKind::Bin, FormatVariant::New, "00123456");
    assert!(outcome.is_valid);
}

#[test]
fn empty_value_reports_single_required_violation() {
    for schema in all_field_schemas() {
        let outcome = validate(schema.kind, schema.variant, "");
        assert!(!outcome.is_valid);
        assert_eq!(outcome.violations.len(), 1);
        assert_eq!(outcome.violations[0].code, ViolationCode::RequiredField);
        assert_eq!(outcome.value, "");
    }
}

#[test]
fn length_and_format_violations_co_occur() {
    let value = format!("{}!", "X".repeat(35));
    let outcome = validate(FieldKind::ProviderId, FormatVariant::New, &value);
    assert!(!outcome.is_valid);
    let codes: Vec<_> = outcome.violations.iter().map(|v| v.code).collect();
    assert_eq!(
        codes,
        vec![ViolationCode::LengthExceeded, ViolationCode::FormatInvalid]
    );
}

#[test]
fn legacy_provider_rejects_hyphen() {
    let outcome = validate(FieldKind::ProviderId, FormatVariant::Legacy, "PROV-1");
    assert!(!outcome.is_valid);
    assert_eq!(outcome.violations[0].code, ViolationCode::FormatInvalid);
}

#[test]
fn new_product_service_accepts_hyphens_and_underscores() {
    let outcome = validate(
        FieldKind::ProductServiceId,
        FormatVariant::New,
        "PRODUCT-PAYMENT_STANDARD-001",
    );
    assert!(outcome.is_valid);
}

#[test]
fn validate_is_idempotent() {
    let first = validate(FieldKind::ProductServiceId, FormatVariant::Legacy, "PROD-001");
    let second = validate(FieldKind::ProductServiceId, FormatVariant::Legacy, "PROD-001");
    assert_eq!(first, second);
}
