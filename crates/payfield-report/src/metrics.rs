use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use payfield_core::{FieldKind, FormatVariant};
use payfield_migrate::MismatchSeverity;

/// Summary contract version for serialized analysis artifacts.
pub const SUMMARY_VERSION: &str = "0.1";

/// Valid/invalid tallies for one (kind, variant) field slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct FieldCounts {
    pub kind: FieldKind,
    pub variant: FormatVariant,
    pub valid: u64,
    pub invalid: u64,
    /// Bounded sample of violation messages, input order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sample_violations: Vec<String>,
}

impl FieldCounts {
    /// Zeroed tally for one field slot.
    pub fn zero(kind: FieldKind, variant: FormatVariant) -> Self {
        Self {
            kind,
            variant,
            valid: 0,
            invalid: 0,
            sample_violations: Vec::new(),
        }
    }
}

/// Record that still exposes a legacy value without its new counterpart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct MigrationCandidate {
    /// Position of the record in the analyzed batch.
    pub record_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    /// Field kinds still awaiting a new-format value.
    pub needs: Vec<FieldKind>,
}

/// One legacy/new pair that disagrees with its migration expectation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct ConsistencyMismatch {
    pub record_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    pub kind: FieldKind,
    pub legacy: String,
    pub new: String,
    pub expected: String,
    pub severity: MismatchSeverity,
}

/// Machine-readable summary of a batch analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct AnalysisSummary {
    pub summary_version: String,
    pub total_records: u64,
    /// Per-field tallies in registry order; slots never observed keep zero
    /// counts so batches serialize with a stable shape.
    pub fields: Vec<FieldCounts>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub migration_candidates: Vec<MigrationCandidate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mismatches: Vec<ConsistencyMismatch>,
}
