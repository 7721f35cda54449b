use std::collections::BTreeMap;
use std::sync::LazyLock;

use payfield_core::{FieldKind, FormatVariant, field_schema};

/// Curated legacy→new provider identifier migrations.
///
/// Keys are uppercased legacy values; lookups are case-insensitive on the
/// legacy side. The tables are process-wide read-only constants; adding a
/// migration is a data change here, never a runtime mutation.
static PROVIDER_MIGRATIONS: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    BTreeMap::from([
        ("PROV001", "GLOBAL-PROVIDER-001"),
        ("PROV002", "EU-SECURE-67890"),
        ("PROVIDER1", "GLOBAL-PROVIDER-001"),
        ("PROVIDER2", "US-PROVIDER-002"),
        ("TESTPROV", "TEST-PROVIDER-999"),
    ])
});

/// Curated legacy→new product/service identifier migrations.
static PRODUCT_SERVICE_MIGRATIONS: LazyLock<BTreeMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        BTreeMap::from([
            ("PROD-001", "PRODUCT-PAYMENT-STANDARD-001"),
            ("SVC-001", "SERVICE-FRAUD-DETECTION-001"),
            ("SUB-001", "SUBSCRIPTION-BILLING-STANDARD-001"),
        ])
    });

/// No curated BIN migrations exist; the BIN expectation is structural
/// (see [`expected_new_bin`]).
static BIN_MIGRATIONS: LazyLock<BTreeMap<&'static str, &'static str>> =
    LazyLock::new(BTreeMap::new);

/// Look up the curated new-format value for a legacy identifier.
pub fn expected_new_value(kind: FieldKind, legacy_value: &str) -> Option<&'static str> {
    let table = match kind {
        FieldKind::Bin => &BIN_MIGRATIONS,
        FieldKind::ProviderId => &PROVIDER_MIGRATIONS,
        FieldKind::ProductServiceId => &PRODUCT_SERVICE_MIGRATIONS,
    };
    table.get(legacy_value.to_uppercase().as_str()).copied()
}

/// Structural expectation for a migrated BIN: the legacy value left-padded
/// with zeros to the new width. Padding never truncates; a value already at
/// or beyond the new width is returned unchanged.
pub fn expected_new_bin(legacy_value: &str) -> String {
    let width = field_schema(FieldKind::Bin, FormatVariant::New).max_length;
    format!("{legacy_value:0>width$}")
}
