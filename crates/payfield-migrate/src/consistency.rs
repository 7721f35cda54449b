use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use payfield_core::FieldKind;

use crate::mappings::{expected_new_bin, expected_new_value};

/// Weight of a migration mismatch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MismatchSeverity {
    /// Worth surfacing; not a data error on its own.
    Informational,
    /// Must be resolved before the record can migrate.
    Blocking,
}

/// Per-kind severity assignment for consistency mismatches.
///
/// The weight of a mismatch depends on the field kind: a new BIN need not
/// derive from a legacy one, while provider and product identities must
/// survive the migration intact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct SeverityPolicy {
    pub bin: MismatchSeverity,
    pub provider_id: MismatchSeverity,
    pub product_service_id: MismatchSeverity,
}

impl SeverityPolicy {
    /// Severity assigned to a mismatch for `kind`.
    pub fn severity(&self, kind: FieldKind) -> MismatchSeverity {
        match kind {
            FieldKind::Bin => self.bin,
            FieldKind::ProviderId => self.provider_id,
            FieldKind::ProductServiceId => self.product_service_id,
        }
    }
}

impl Default for SeverityPolicy {
    fn default() -> Self {
        Self {
            bin: MismatchSeverity::Informational,
            provider_id: MismatchSeverity::Blocking,
            product_service_id: MismatchSeverity::Blocking,
        }
    }
}

/// Outcome of comparing an observed (legacy, new) value pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct ConsistencyResult {
    pub is_consistent: bool,
    /// Expected new-format value, when an expectation exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// Severity of the mismatch; absent when consistent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<MismatchSeverity>,
}

impl ConsistencyResult {
    fn consistent(expected: Option<String>) -> Self {
        Self {
            is_consistent: true,
            expected,
            severity: None,
        }
    }

    fn mismatch(expected: String, severity: MismatchSeverity) -> Self {
        Self {
            is_consistent: false,
            expected: Some(expected),
            severity: Some(severity),
        }
    }
}

/// Check a (legacy, new) pair with the default severity policy.
pub fn check_consistency(
    kind: FieldKind,
    legacy_value: &str,
    new_value: &str,
) -> ConsistencyResult {
    check_consistency_with(&SeverityPolicy::default(), kind, legacy_value, new_value)
}

/// Check a (legacy, new) pair against the curated migration tables.
///
/// A partial pair imposes no constraint, and neither does a legacy value
/// without a curated entry. For BINs the expectation is structural instead
/// of curated: the legacy value zero-padded to the new width.
pub fn check_consistency_with(
    policy: &SeverityPolicy,
    kind: FieldKind,
    legacy_value: &str,
    new_value: &str,
) -> ConsistencyResult {
    if legacy_value.is_empty() || new_value.is_empty() {
        return ConsistencyResult::consistent(None);
    }

    if let Some(expected) = expected_new_value(kind, legacy_value) {
        return if new_value == expected {
            ConsistencyResult::consistent(Some(expected.to_string()))
        } else {
            ConsistencyResult::mismatch(expected.to_string(), policy.severity(kind))
        };
    }

    if kind == FieldKind::Bin {
        let expected = expected_new_bin(legacy_value);
        return if new_value == expected {
            ConsistencyResult::consistent(Some(expected))
        } else {
            ConsistencyResult::mismatch(expected, policy.severity(kind))
        };
    }

    ConsistencyResult::consistent(None)
}
