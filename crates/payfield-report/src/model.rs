use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use payfield_core::{FieldKind, FormatVariant};
use payfield_migrate::SeverityPolicy;

use crate::aliases::resolve_field_alias;

/// Options for batch analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeOptions {
    /// Limit on sampled violation messages kept per field.
    pub max_examples: usize,
    /// Severity assignment for consistency mismatches.
    pub severity: SeverityPolicy,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            max_examples: 20,
            severity: SeverityPolicy::default(),
        }
    }
}

/// Observed legacy/new values for one field kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct FieldPair {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new: Option<String>,
}

/// One record of field values: a form submission, a grid row, an import row.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct FieldRecord {
    /// Caller-supplied identifier carried into mismatch and candidate lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    #[serde(default)]
    pub bin: FieldPair,
    #[serde(default)]
    pub provider_id: FieldPair,
    #[serde(default)]
    pub product_service_id: FieldPair,
}

impl FieldRecord {
    /// Values observed for `kind`.
    pub fn pair(&self, kind: FieldKind) -> &FieldPair {
        match kind {
            FieldKind::Bin => &self.bin,
            FieldKind::ProviderId => &self.provider_id,
            FieldKind::ProductServiceId => &self.product_service_id,
        }
    }

    fn pair_mut(&mut self, kind: FieldKind) -> &mut FieldPair {
        match kind {
            FieldKind::Bin => &mut self.bin,
            FieldKind::ProviderId => &mut self.provider_id,
            FieldKind::ProductServiceId => &mut self.product_service_id,
        }
    }

    /// Build a record from a field-name → value map, collapsing the source
    /// systems' naming-convention aliases onto canonical slots.
    ///
    /// Unrecognized names belong to the presentation layer and are ignored;
    /// empty values are dropped. When several aliases feed the same slot,
    /// the last one in map order wins.
    pub fn from_fields(record_id: Option<String>, fields: &BTreeMap<String, String>) -> Self {
        let mut record = FieldRecord {
            record_id,
            ..FieldRecord::default()
        };
        for (name, value) in fields {
            if value.is_empty() {
                continue;
            }
            let Some((kind, variant)) = resolve_field_alias(name) else {
                continue;
            };
            let pair = record.pair_mut(kind);
            match variant {
                FormatVariant::Legacy => pair.legacy = Some(value.clone()),
                FormatVariant::New => pair.new = Some(value.clone()),
            }
        }
        record
    }
}
